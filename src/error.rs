//! Error types for mask construction.
//!
//! Formatting itself never fails: input that does not fit a mask simply
//! yields a shorter result. Errors only arise while *building* masks, from
//! notation strings, regular expressions, numeric configurations or catalog
//! files.

use std::fmt;

/// Errors that can occur while constructing a mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// A `\` escape appeared as the last character of a notation string.
    DanglingEscape {
        /// Char offset of the escape character.
        position: usize,
    },

    /// A `[` was opened while another obfuscation group was still open.
    NestedGroup {
        /// Char offset of the second `[`.
        position: usize,
    },

    /// A `]` appeared without a matching `[`.
    UnmatchedClose {
        /// Char offset of the `]`.
        position: usize,
    },

    /// The notation ended with an obfuscation group still open.
    UnclosedGroup {
        /// Char offset of the `[` that was never closed.
        position: usize,
    },

    /// A pattern regular expression failed to compile.
    InvalidRegex {
        /// The offending pattern.
        pattern: String,
        /// The compiler's explanation.
        reason: String,
    },

    /// A numeric mask configuration is contradictory.
    InvalidNumberConfig {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// No catalog entry exists under the requested name.
    UnknownMask {
        /// The requested name.
        name: String,
    },

    /// A catalog file could not be read.
    Io(String),

    /// A catalog file could not be parsed.
    Parse(String),
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingEscape { position } => {
                write!(f, "dangling escape at position {} (nothing to escape)", position)
            }

            Self::NestedGroup { position } => {
                write!(f, "nested obfuscation group at position {}", position)
            }

            Self::UnmatchedClose { position } => {
                write!(f, "unmatched ']' at position {}", position)
            }

            Self::UnclosedGroup { position } => {
                write!(f, "obfuscation group opened at position {} is never closed", position)
            }

            Self::InvalidRegex { pattern, reason } => {
                write!(f, "invalid pattern '{}': {}", pattern, reason)
            }

            Self::InvalidNumberConfig { reason } => {
                write!(f, "invalid number mask configuration: {}", reason)
            }

            Self::UnknownMask { name } => write!(f, "unknown mask '{}'", name),

            Self::Io(msg) => write!(f, "I/O error: {}", msg),

            Self::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for MaskError {}

impl From<std::io::Error> for MaskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
