//! Masks: ordered token sequences, their notation, and dynamic sources.
//!
//! A [`Mask`] can be assembled token by token, with [`MaskBuilder`], or
//! parsed from a compact notation string:
//!
//! | Char | Meaning |
//! |------|---------|
//! | `9` | digit slot |
//! | `A` | letter slot |
//! | `S` | letter-or-digit slot |
//! | `*` | any-character slot |
//! | `\x` | literal `x` |
//! | `[...]` | pattern slots inside are obfuscated |
//! | anything else | literal |
//!
//! # Example
//!
//! ```
//! use text_mask::Mask;
//!
//! let phone = Mask::parse("(99) 99999-9999").unwrap();
//! assert_eq!(phone.len(), 15);
//! assert_eq!(phone.pattern_count(), 11);
//! assert_eq!(phone.apply("11987654321").masked, "(11) 98765-4321");
//! ```

use crate::error::MaskError;
use crate::format::{format_with_tokens, FormatOptions, FormatResult};
use crate::token::{Matcher, MaskToken};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// An ordered, finite sequence of mask tokens.
#[derive(Debug, Clone, Default)]
pub struct Mask {
    tokens: Vec<MaskToken>,
}

impl Mask {
    /// Creates a mask from a token vector.
    #[inline]
    pub fn new(tokens: Vec<MaskToken>) -> Self {
        Self { tokens }
    }

    /// Starts a fluent builder.
    #[inline]
    pub fn builder() -> MaskBuilder {
        MaskBuilder::default()
    }

    /// Parses a mask from its notation.
    ///
    /// # Errors
    ///
    /// Returns an error for a trailing `\`, nested or unbalanced `[`/`]`.
    ///
    /// # Example
    ///
    /// ```
    /// use text_mask::Mask;
    ///
    /// let card = Mask::parse("9999 [9999] [9999] 9999").unwrap();
    /// let result = card.apply("4111111111111111");
    /// assert_eq!(result.obfuscated, "4111 **** **** 1111");
    ///
    /// assert!(Mask::parse("99\\").is_err());
    /// ```
    pub fn parse(notation: &str) -> Result<Self, MaskError> {
        let mut tokens = Vec::with_capacity(notation.len());
        let mut group_start: Option<usize> = None;
        let mut chars = notation.chars().enumerate();

        while let Some((position, c)) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some((_, escaped)) => tokens.push(MaskToken::Literal(escaped)),
                    None => return Err(MaskError::DanglingEscape { position }),
                },
                '[' => {
                    if group_start.is_some() {
                        return Err(MaskError::NestedGroup { position });
                    }
                    group_start = Some(position);
                }
                ']' => {
                    if group_start.take().is_none() {
                        return Err(MaskError::UnmatchedClose { position });
                    }
                }
                other => {
                    let token = match Matcher::from_symbol(other) {
                        Some(matcher) => MaskToken::Pattern {
                            matcher,
                            obfuscate: group_start.is_some(),
                        },
                        None => MaskToken::Literal(other),
                    };
                    tokens.push(token);
                }
            }
        }

        if let Some(position) = group_start {
            return Err(MaskError::UnclosedGroup { position });
        }

        Ok(Self { tokens })
    }

    /// The tokens in mask order.
    #[inline]
    pub fn tokens(&self) -> &[MaskToken] {
        &self.tokens
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the mask has no tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of pattern slots, i.e. the longest possible unmasked value.
    pub fn pattern_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_pattern()).count()
    }

    /// Formats `text` with this mask and default options.
    pub fn apply(&self, text: &str) -> FormatResult {
        format_with_tokens(text, &self.tokens, &FormatOptions::default())
    }
}

impl fmt::Display for Mask {
    /// Renders the mask back into notation. Regex and custom slots have no
    /// notation and render as `/re/` and `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut in_group = false;

        for token in &self.tokens {
            match token {
                MaskToken::Literal(c) => {
                    if in_group {
                        f.write_str("]")?;
                        in_group = false;
                    }
                    if Matcher::from_symbol(*c).is_some() || matches!(c, '\\' | '[' | ']') {
                        f.write_str("\\")?;
                    }
                    write!(f, "{}", c)?;
                }
                MaskToken::Pattern { matcher, obfuscate } => {
                    if *obfuscate != in_group {
                        f.write_str(if *obfuscate { "[" } else { "]" })?;
                        in_group = *obfuscate;
                    }
                    write!(f, "{}", matcher)?;
                }
            }
        }

        if in_group {
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl FromIterator<MaskToken> for Mask {
    fn from_iter<I: IntoIterator<Item = MaskToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl Extend<MaskToken> for Mask {
    fn extend<I: IntoIterator<Item = MaskToken>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

impl IntoIterator for Mask {
    type Item = MaskToken;
    type IntoIter = std::vec::IntoIter<MaskToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mask {
    type Item = &'a MaskToken;
    type IntoIter = std::slice::Iter<'a, MaskToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl From<Vec<MaskToken>> for Mask {
    fn from(tokens: Vec<MaskToken>) -> Self {
        Self { tokens }
    }
}

/// Fluent builder for [`Mask`].
///
/// # Example
///
/// ```
/// use text_mask::Mask;
///
/// let mask = Mask::builder()
///     .obfuscated_digits(12)
///     .digits(4)
///     .build();
/// let result = mask.apply("4111111111111234");
/// assert_eq!(result.obfuscated, "************1234");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaskBuilder {
    tokens: Vec<MaskToken>,
}

impl MaskBuilder {
    /// Appends one literal.
    pub fn literal(mut self, c: char) -> Self {
        self.tokens.push(MaskToken::Literal(c));
        self
    }

    /// Appends every char of `s` as a literal.
    pub fn literals(mut self, s: &str) -> Self {
        self.tokens.extend(s.chars().map(MaskToken::Literal));
        self
    }

    /// Appends `count` visible digit slots.
    pub fn digits(self, count: usize) -> Self {
        self.repeat(MaskToken::digit(), count)
    }

    /// Appends `count` obfuscated digit slots.
    pub fn obfuscated_digits(self, count: usize) -> Self {
        self.repeat(MaskToken::digit().obfuscated(), count)
    }

    /// Appends `count` visible letter slots.
    pub fn letters(self, count: usize) -> Self {
        self.repeat(MaskToken::letter(), count)
    }

    /// Appends `count` visible alphanumeric slots.
    pub fn alphanumerics(self, count: usize) -> Self {
        self.repeat(MaskToken::alphanumeric(), count)
    }

    /// Appends one visible slot with a custom matcher.
    pub fn pattern(mut self, matcher: Matcher) -> Self {
        self.tokens.push(MaskToken::pattern(matcher));
        self
    }

    /// Appends an arbitrary token.
    pub fn token(mut self, token: MaskToken) -> Self {
        self.tokens.push(token);
        self
    }

    /// Finishes the mask.
    pub fn build(self) -> Mask {
        Mask {
            tokens: self.tokens,
        }
    }

    fn repeat(mut self, token: MaskToken, count: usize) -> Self {
        self.tokens.extend(std::iter::repeat(token).take(count));
        self
    }
}

/// Signature of a dynamic mask: a pure function of the whole current text.
pub type DynamicMask = dyn Fn(&str) -> Mask + Send + Sync;

/// Where the mask for a formatting call comes from.
///
/// Dynamic sources are evaluated once per call against the entire text,
/// which lets a mask grow with its value (currency amounts, for example).
#[derive(Clone)]
pub enum MaskSource {
    /// A fixed token sequence.
    Static(Mask),
    /// A mask recomputed from the current text on every call.
    Dynamic(Arc<DynamicMask>),
}

impl MaskSource {
    /// Wraps a closure as a dynamic mask source.
    ///
    /// # Example
    ///
    /// ```
    /// use text_mask::{format_with_mask, FormatOptions, Mask, MaskSource};
    ///
    /// // Landlines have 8 digits after the area code, mobiles have 9.
    /// let phone = MaskSource::dynamic(|text| {
    ///     let digits = text.chars().filter(|c| c.is_ascii_digit()).count();
    ///     let notation = if digits > 10 { "(99) 99999-9999" } else { "(99) 9999-9999" };
    ///     Mask::parse(notation).unwrap_or_default()
    /// });
    ///
    /// let opts = FormatOptions::default();
    /// assert_eq!(format_with_mask("1134567890", Some(&phone), &opts).masked, "(11) 3456-7890");
    /// assert_eq!(format_with_mask("11987654321", Some(&phone), &opts).masked, "(11) 98765-4321");
    /// ```
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&str) -> Mask + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(f))
    }

    /// Produces the concrete mask for `text`.
    #[inline]
    pub fn resolve(&self, text: &str) -> Cow<'_, Mask> {
        match self {
            Self::Static(mask) => Cow::Borrowed(mask),
            Self::Dynamic(f) => Cow::Owned(f(text)),
        }
    }

    /// Returns true for dynamic sources.
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }
}

impl fmt::Debug for MaskSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(mask) => f.debug_tuple("Static").field(mask).finish(),
            Self::Dynamic(_) => write!(f, "Dynamic(..)"),
        }
    }
}

impl From<Mask> for MaskSource {
    fn from(mask: Mask) -> Self {
        Self::Static(mask)
    }
}

impl From<Vec<MaskToken>> for MaskSource {
    fn from(tokens: Vec<MaskToken>) -> Self {
        Self::Static(Mask::new(tokens))
    }
}
