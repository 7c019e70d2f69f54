//! The mask formatting engine.
//!
//! [`format_with_mask`] reconciles freely typed (or pasted) text against a
//! mask and returns three aligned views of the value:
//!
//! - `masked`: literals plus accepted characters, for display
//! - `unmasked`: only the accepted characters, for submission
//! - `obfuscated`: like `masked`, with sensitive slots hidden
//!
//! The scan is a single left-to-right pass over the mask and the input.
//! Characters that a pattern slot rejects are consumed and dropped, so
//! pre-formatted input such as `"(11) 98765-4321"` formats to itself.
//!
//! # Example
//!
//! ```
//! use text_mask::{format_with_mask, FormatOptions, Mask, MaskSource};
//!
//! let phone = MaskSource::from(Mask::parse("(99) 99999-9999").unwrap());
//! let result = format_with_mask("11987654321", Some(&phone), &FormatOptions::default());
//!
//! assert_eq!(result.masked, "(11) 98765-4321");
//! assert_eq!(result.unmasked, "11987654321");
//! assert_eq!(result.obfuscated, "(11) 98765-4321");
//! ```

use crate::mask::MaskSource;
use crate::token::MaskToken;
use std::fmt;
use zeroize::Zeroize;

/// Default placeholder for obfuscated characters.
pub const DEFAULT_OBFUSCATION_CHARACTER: char = '*';

/// Per-call formatting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Placeholder written to the obfuscated view for hidden slots.
    pub obfuscation_character: char,

    /// When input runs out mid-mask, keep appending the literals that
    /// follow (never pattern slots) so the remaining format is previewed.
    pub auto_complete: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            obfuscation_character: DEFAULT_OBFUSCATION_CHARACTER,
            auto_complete: false,
        }
    }
}

impl FormatOptions {
    /// Default options: `*` placeholder, no auto-complete.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the obfuscation placeholder.
    #[inline]
    pub fn obfuscation_character(mut self, c: char) -> Self {
        self.obfuscation_character = c;
        self
    }

    /// Builder method to toggle trailing-literal auto-completion.
    #[inline]
    pub fn auto_complete(mut self, enabled: bool) -> Self {
        self.auto_complete = enabled;
        self
    }
}

/// The three views produced by one formatting call.
///
/// `unmasked` (and usually `masked`) may hold sensitive data, so `Debug`
/// prints only the obfuscated view, and the value can be wiped with
/// [`Zeroize::zeroize`].
#[derive(Clone, Default, PartialEq, Eq, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatResult {
    /// Display value: literals plus accepted characters, in mask order.
    pub masked: String,
    /// Accepted characters only, in the order they were consumed.
    pub unmasked: String,
    /// Display value with obfuscated slots replaced by the placeholder.
    pub obfuscated: String,
}

impl FormatResult {
    /// A result with `text` in all three views.
    pub fn passthrough(text: &str) -> Self {
        Self {
            masked: text.to_string(),
            unmasked: text.to_string(),
            obfuscated: text.to_string(),
        }
    }

    /// Returns true if nothing was produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.masked.is_empty()
    }
}

impl fmt::Debug for FormatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatResult")
            .field("obfuscated", &self.obfuscated)
            .field("masked_len", &self.masked.chars().count())
            .field("unmasked_len", &self.unmasked.chars().count())
            .finish()
    }
}

/// Formats `text` against an optional mask source.
///
/// - Empty `text` yields three empty strings without consulting the mask.
/// - `None` (or a mask that resolves to no tokens) passes `text` through
///   unchanged in all three views.
/// - A dynamic source is evaluated exactly once, against the whole text.
///
/// Never fails: input that does not fit simply truncates the output.
/// Panics raised by custom matchers or dynamic masks propagate.
pub fn format_with_mask(
    text: &str,
    mask: Option<&MaskSource>,
    options: &FormatOptions,
) -> FormatResult {
    if text.is_empty() {
        return FormatResult::default();
    }

    let Some(source) = mask else {
        return FormatResult::passthrough(text);
    };

    let resolved = source.resolve(text);
    format_with_tokens(text, resolved.tokens(), options)
}

/// Formats `text` against a concrete token sequence.
///
/// This is the scan behind [`format_with_mask`]:
///
/// 1. With input exhausted, a literal is appended only when
///    `auto_complete` is set; anything else ends the scan.
/// 2. A literal is always written to the display views. It consumes the
///    current input character only when that character equals it.
/// 3. A pattern slot always consumes one input character. An accepted
///    character fills the slot; a rejected one is dropped and the same slot
///    is tried against the next character.
///
/// # Example
///
/// ```
/// use text_mask::format::format_with_tokens;
/// use text_mask::token::MaskToken;
/// use text_mask::FormatOptions;
///
/// let mask = [MaskToken::digit(), MaskToken::digit(), MaskToken::literal('-'), MaskToken::digit()];
/// let opts = FormatOptions::new().auto_complete(true);
///
/// assert_eq!(format_with_tokens("12", &mask, &opts).masked, "12-");
/// assert_eq!(format_with_tokens("1x2y3", &mask, &opts).unmasked, "123");
/// ```
pub fn format_with_tokens(
    text: &str,
    tokens: &[MaskToken],
    options: &FormatOptions,
) -> FormatResult {
    if text.is_empty() {
        return FormatResult::default();
    }
    if tokens.is_empty() {
        return FormatResult::passthrough(text);
    }

    let mut masked = String::with_capacity(text.len() + tokens.len());
    let mut unmasked = String::with_capacity(text.len());
    let mut obfuscated = String::with_capacity(text.len() + tokens.len());

    let mut input = text.chars().peekable();
    let mut mask = tokens.iter().peekable();

    while let Some(&token) = mask.peek() {
        let Some(&c) = input.peek() else {
            match token {
                MaskToken::Literal(literal) if options.auto_complete => {
                    masked.push(*literal);
                    obfuscated.push(*literal);
                    mask.next();
                    continue;
                }
                _ => break,
            }
        };

        match token {
            MaskToken::Literal(literal) => {
                masked.push(*literal);
                obfuscated.push(*literal);
                if *literal == c {
                    input.next();
                }
                mask.next();
            }
            MaskToken::Pattern { matcher, obfuscate } => {
                input.next();
                if matcher.matches(c) {
                    masked.push(c);
                    unmasked.push(c);
                    obfuscated.push(if *obfuscate {
                        options.obfuscation_character
                    } else {
                        c
                    });
                    mask.next();
                }
            }
        }
    }

    FormatResult {
        masked,
        unmasked,
        obfuscated,
    }
}

/// A mask paired with its options, ready to format repeatedly.
///
/// # Example
///
/// ```
/// use text_mask::{catalog::masks, MaskFormatter};
///
/// let cpf = MaskFormatter::new(masks::brl_cpf()).auto_complete(true);
/// assert_eq!(cpf.format("123").masked, "123.");
/// assert_eq!(cpf.format("12345678901").masked, "123.456.789-01");
/// assert_eq!(cpf.unmask("123.456.789-01"), "12345678901");
/// ```
#[derive(Debug, Clone)]
pub struct MaskFormatter {
    source: MaskSource,
    options: FormatOptions,
}

impl MaskFormatter {
    /// Creates a formatter with default options.
    pub fn new(source: impl Into<MaskSource>) -> Self {
        Self {
            source: source.into(),
            options: FormatOptions::default(),
        }
    }

    /// Replaces all options at once.
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Builder method to set the obfuscation placeholder.
    pub fn obfuscation_character(mut self, c: char) -> Self {
        self.options.obfuscation_character = c;
        self
    }

    /// Builder method to toggle trailing-literal auto-completion.
    pub fn auto_complete(mut self, enabled: bool) -> Self {
        self.options.auto_complete = enabled;
        self
    }

    /// The mask source.
    #[inline]
    pub fn source(&self) -> &MaskSource {
        &self.source
    }

    /// The options used for every call.
    #[inline]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Formats `text`.
    #[inline]
    pub fn format(&self, text: &str) -> FormatResult {
        format_with_mask(text, Some(&self.source), &self.options)
    }

    /// Returns only the raw (unmasked) value of `text`.
    #[inline]
    pub fn unmask(&self, text: &str) -> String {
        self.format(text).unmasked
    }
}
