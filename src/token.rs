//! Mask tokens: the literal and pattern slots a mask is made of.
//!
//! A mask position either asserts a fixed character ([`MaskToken::Literal`])
//! or accepts one input character that satisfies a [`Matcher`]
//! ([`MaskToken::Pattern`]). Pattern slots carry an explicit `obfuscate`
//! flag that hides the accepted character in the obfuscated view.

use crate::error::MaskError;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Signature of a user-supplied character predicate.
pub type CharPredicate = dyn Fn(char) -> bool + Send + Sync;

/// Decides whether a single input character may fill a pattern slot.
#[derive(Clone)]
pub enum Matcher {
    /// ASCII digit `0-9`.
    Digit,
    /// ASCII letter `A-Z` or `a-z`.
    Letter,
    /// ASCII letter or digit.
    Alphanumeric,
    /// Any character at all.
    Any,
    /// A regular expression searched against the single character.
    Regex(Regex),
    /// An arbitrary predicate.
    Custom(Arc<CharPredicate>),
}

impl Matcher {
    /// Compiles a regular expression matcher.
    ///
    /// The expression is searched (not anchored) against a one-character
    /// string, so `\d` and `[A-F]` behave the way single-character classes
    /// usually do.
    ///
    /// # Example
    ///
    /// ```
    /// use text_mask::token::Matcher;
    ///
    /// let hex = Matcher::regex("[0-9A-Fa-f]").unwrap();
    /// assert!(hex.matches('c'));
    /// assert!(!hex.matches('g'));
    /// ```
    pub fn regex(pattern: &str) -> Result<Self, MaskError> {
        Regex::new(pattern)
            .map(Self::Regex)
            .map_err(|e| MaskError::InvalidRegex {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }

    /// Wraps a closure as a matcher.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    /// Returns true if `c` may fill a slot guarded by this matcher.
    #[inline]
    pub fn matches(&self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Letter => c.is_ascii_alphabetic(),
            Self::Alphanumeric => c.is_ascii_alphanumeric(),
            Self::Any => true,
            Self::Regex(re) => {
                let mut buf = [0u8; 4];
                re.is_match(c.encode_utf8(&mut buf))
            }
            Self::Custom(predicate) => predicate(c),
        }
    }

    /// The notation symbol for built-in matchers, if there is one.
    #[inline]
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Digit => Some('9'),
            Self::Letter => Some('A'),
            Self::Alphanumeric => Some('S'),
            Self::Any => Some('*'),
            Self::Regex(_) | Self::Custom(_) => None,
        }
    }

    /// Maps a notation symbol back to its built-in matcher.
    #[inline]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '9' => Some(Self::Digit),
            'A' => Some(Self::Letter),
            'S' => Some(Self::Alphanumeric),
            '*' => Some(Self::Any),
            _ => None,
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit => write!(f, "Digit"),
            Self::Letter => write!(f, "Letter"),
            Self::Alphanumeric => write!(f, "Alphanumeric"),
            Self::Any => write!(f, "Any"),
            Self::Regex(re) => f.debug_tuple("Regex").field(&re.as_str()).finish(),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regex(re) => write!(f, "/{}/", re.as_str()),
            Self::Custom(_) => write!(f, "?"),
            other => match other.symbol() {
                Some(symbol) => write!(f, "{}", symbol),
                None => Ok(()),
            },
        }
    }
}

/// One position of a mask.
#[derive(Debug, Clone)]
pub enum MaskToken {
    /// A character the mask supplies verbatim.
    Literal(char),
    /// A slot filled by one accepted input character.
    Pattern {
        /// Which characters the slot accepts.
        matcher: Matcher,
        /// Hide the accepted character in the obfuscated view.
        obfuscate: bool,
    },
}

impl MaskToken {
    /// A literal token.
    #[inline]
    pub const fn literal(c: char) -> Self {
        Self::Literal(c)
    }

    /// A visible pattern slot.
    #[inline]
    pub const fn pattern(matcher: Matcher) -> Self {
        Self::Pattern {
            matcher,
            obfuscate: false,
        }
    }

    /// A visible digit slot.
    #[inline]
    pub const fn digit() -> Self {
        Self::pattern(Matcher::Digit)
    }

    /// A visible letter slot.
    #[inline]
    pub const fn letter() -> Self {
        Self::pattern(Matcher::Letter)
    }

    /// A visible alphanumeric slot.
    #[inline]
    pub const fn alphanumeric() -> Self {
        Self::pattern(Matcher::Alphanumeric)
    }

    /// A visible slot accepting any character.
    #[inline]
    pub const fn any() -> Self {
        Self::pattern(Matcher::Any)
    }

    /// Marks a pattern slot as obfuscated. Literals are returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use text_mask::token::MaskToken;
    ///
    /// let hidden = MaskToken::digit().obfuscated();
    /// assert!(hidden.is_obfuscated());
    /// assert!(!MaskToken::literal('-').obfuscated().is_obfuscated());
    /// ```
    #[inline]
    pub fn obfuscated(self) -> Self {
        match self {
            Self::Pattern { matcher, .. } => Self::Pattern {
                matcher,
                obfuscate: true,
            },
            literal => literal,
        }
    }

    /// Returns true for literal tokens.
    #[inline]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns true for pattern slots.
    #[inline]
    pub const fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern { .. })
    }

    /// Returns true for obfuscated pattern slots.
    #[inline]
    pub const fn is_obfuscated(&self) -> bool {
        matches!(self, Self::Pattern { obfuscate: true, .. })
    }

    /// Returns true if `c` would be placed at this position.
    ///
    /// Literals match only their own character; patterns defer to their
    /// matcher.
    #[inline]
    pub fn matches(&self, c: char) -> bool {
        match self {
            Self::Literal(expected) => *expected == c,
            Self::Pattern { matcher, .. } => matcher.matches(c),
        }
    }
}

impl From<char> for MaskToken {
    fn from(c: char) -> Self {
        Self::Literal(c)
    }
}

impl From<Matcher> for MaskToken {
    fn from(matcher: Matcher) -> Self {
        Self::pattern(matcher)
    }
}
