//! Currency-style number masks.
//!
//! A number mask grows with the value. It is rebuilt from the count of
//! digits in the current text, so thousands delimiters and the decimal
//! separator move as digits are typed or deleted.
//!
//! # Example
//!
//! ```
//! use text_mask::numeric::{create_number_mask, NumberMaskConfig};
//! use text_mask::MaskFormatter;
//!
//! let brl = create_number_mask(&NumberMaskConfig::new().prefix("R$ ")).unwrap();
//! let formatter = MaskFormatter::new(brl);
//!
//! assert_eq!(formatter.format("123456").masked, "R$ 1.234,56");
//! assert_eq!(formatter.format("R$ 1.234,56").unmasked, "123456");
//! assert_eq!(formatter.format("12345678").masked, "R$ 123.456,78");
//! ```

use crate::error::MaskError;
use crate::mask::{Mask, MaskSource};
use crate::token::MaskToken;

/// Digits per thousands group.
const GROUP_SIZE: usize = 3;

/// Configuration for [`create_number_mask`].
///
/// Defaults follow the Brazilian convention: `.` between thousands, `,`
/// before two decimal places, no prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumberMaskConfig {
    /// Inserted between groups of three integer digits.
    pub delimiter: Option<char>,
    /// Inserted before the fractional digits.
    pub separator: Option<char>,
    /// Number of fractional digits.
    pub precision: usize,
    /// Literal text placed before the number, e.g. `"R$ "`.
    pub prefix: String,
}

impl Default for NumberMaskConfig {
    fn default() -> Self {
        Self {
            delimiter: Some('.'),
            separator: Some(','),
            precision: 2,
            prefix: String::new(),
        }
    }
}

impl NumberMaskConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the thousands delimiter (`None` disables it).
    pub fn delimiter(mut self, delimiter: Option<char>) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder method to set the decimal separator (`None` disables it).
    pub fn separator(mut self, separator: Option<char>) -> Self {
        self.separator = separator;
        self
    }

    /// Builder method to set the number of fractional digits.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method to set the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Checks that the configuration can produce unambiguous masks.
    ///
    /// Digits are reserved for the value itself: a digit delimiter,
    /// separator or prefix would be taken for typed digits.
    pub fn validate(&self) -> Result<(), MaskError> {
        for (role, c) in [("delimiter", self.delimiter), ("separator", self.separator)] {
            if let Some(c) = c.filter(char::is_ascii_digit) {
                return Err(MaskError::InvalidNumberConfig {
                    reason: format!("{} '{}' is a digit", role, c),
                });
            }
        }
        if self.prefix.chars().any(|c| c.is_ascii_digit()) {
            return Err(MaskError::InvalidNumberConfig {
                reason: format!("prefix '{}' contains a digit", self.prefix),
            });
        }
        if let (Some(delimiter), Some(separator)) = (self.delimiter, self.separator) {
            if delimiter == separator && self.precision > 0 {
                return Err(MaskError::InvalidNumberConfig {
                    reason: format!(
                        "delimiter and separator are both '{}'",
                        delimiter.escape_default()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Builds the concrete mask for a value holding `digit_count` digits.
    ///
    /// # Example
    ///
    /// ```
    /// use text_mask::numeric::NumberMaskConfig;
    ///
    /// let config = NumberMaskConfig::new().prefix("$").delimiter(Some(',')).separator(Some('.'));
    /// assert_eq!(config.mask_for_digits(7).to_string(), "$99,999.99");
    /// ```
    pub fn mask_for_digits(&self, digit_count: usize) -> Mask {
        let with_separator = self.precision > 0 && self.separator.is_some();
        let integer_digits = digit_count.saturating_sub(self.precision);
        let fraction_digits = digit_count.min(self.precision);

        let mut tokens: Vec<MaskToken> = self.prefix.chars().map(MaskToken::Literal).collect();

        for i in 0..integer_digits {
            let remaining = integer_digits - i;
            if i > 0 && remaining % GROUP_SIZE == 0 {
                if let Some(delimiter) = self.delimiter {
                    tokens.push(MaskToken::Literal(delimiter));
                }
            }
            tokens.push(MaskToken::digit());
        }

        if with_separator {
            if let Some(separator) = self.separator {
                tokens.push(MaskToken::Literal(separator));
            }
        }

        tokens.extend(std::iter::repeat(MaskToken::digit()).take(fraction_digits));

        Mask::new(tokens)
    }
}

/// Creates a dynamic number mask.
///
/// The returned source counts the ASCII digits of the whole current text
/// and lays out a mask for exactly that many digits. When the value has no
/// more digits than `precision`, the separator leads: `"5"` formats as
/// `",5"` with the default configuration.
///
/// # Errors
///
/// Returns [`MaskError::InvalidNumberConfig`] when delimiter and separator
/// are the same character, or when the delimiter, separator or prefix
/// holds a digit.
pub fn create_number_mask(config: &NumberMaskConfig) -> Result<MaskSource, MaskError> {
    config.validate()?;
    Ok(number_mask_source(config.clone()))
}

/// Wraps an already validated configuration as a dynamic source.
pub(crate) fn number_mask_source(config: NumberMaskConfig) -> MaskSource {
    MaskSource::dynamic(move |text| {
        let digit_count = text.chars().filter(char::is_ascii_digit).count();
        config.mask_for_digits(digit_count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{format_with_mask, FormatOptions};

    fn masked(config: &NumberMaskConfig, text: &str) -> String {
        let source = create_number_mask(config).unwrap();
        format_with_mask(text, Some(&source), &FormatOptions::default()).masked
    }

    #[test]
    fn test_default_layouts() {
        let config = NumberMaskConfig::default();
        assert_eq!(masked(&config, "1"), ",1");
        assert_eq!(masked(&config, "12"), ",12");
        assert_eq!(masked(&config, "123"), "1,23");
        assert_eq!(masked(&config, "12345"), "123,45");
        assert_eq!(masked(&config, "123456"), "1.234,56");
        assert_eq!(masked(&config, "123456789"), "1.234.567,89");
    }

    #[test]
    fn test_prefix() {
        let config = NumberMaskConfig::new().prefix("R$ ");
        assert_eq!(masked(&config, "100000"), "R$ 1.000,00");
    }

    #[test]
    fn test_preformatted_value_is_stable() {
        let config = NumberMaskConfig::new().prefix("R$ ");
        assert_eq!(masked(&config, "R$ 1.000,00"), "R$ 1.000,00");
    }

    #[test]
    fn test_typing_one_more_digit_reflows() {
        let config = NumberMaskConfig::new().prefix("R$ ");
        assert_eq!(masked(&config, "R$ 1.000,005"), "R$ 10.000,05");
    }

    #[test]
    fn test_zero_precision() {
        let config = NumberMaskConfig::new().precision(0);
        assert_eq!(masked(&config, "1234567"), "1.234.567");
        assert_eq!(masked(&config, "123"), "123");
    }

    #[test]
    fn test_no_delimiter() {
        let config = NumberMaskConfig::new().delimiter(None);
        assert_eq!(masked(&config, "1234567"), "12345,67");
    }

    #[test]
    fn test_no_separator() {
        let config = NumberMaskConfig::new().separator(None);
        assert_eq!(masked(&config, "123456"), "1.23456");
    }

    #[test]
    fn test_us_style() {
        let config = NumberMaskConfig::new()
            .prefix("$")
            .delimiter(Some(','))
            .separator(Some('.'));
        assert_eq!(masked(&config, "123456789"), "$1,234,567.89");
    }

    #[test]
    fn test_same_delimiter_and_separator_rejected() {
        let config = NumberMaskConfig::new().delimiter(Some(',')).separator(Some(','));
        assert!(matches!(
            create_number_mask(&config),
            Err(MaskError::InvalidNumberConfig { .. })
        ));
    }

    #[test]
    fn test_digit_delimiter_rejected() {
        let config = NumberMaskConfig::new().delimiter(Some('5'));
        assert!(matches!(
            create_number_mask(&config),
            Err(MaskError::InvalidNumberConfig { .. })
        ));
    }

    #[test]
    fn test_digit_separator_rejected() {
        let config = NumberMaskConfig::new().separator(Some('0'));
        assert!(matches!(
            config.validate(),
            Err(MaskError::InvalidNumberConfig { .. })
        ));
    }

    #[test]
    fn test_digit_in_prefix_rejected() {
        let config = NumberMaskConfig::new().prefix("1");
        assert!(matches!(
            create_number_mask(&config),
            Err(MaskError::InvalidNumberConfig { .. })
        ));
        assert!(NumberMaskConfig::new().prefix("US$ ").validate().is_ok());
    }

    #[test]
    fn test_every_typed_digit_reaches_unmasked() {
        let config = NumberMaskConfig::new()
            .prefix("€ ")
            .delimiter(Some(' '))
            .separator(Some('.'));
        assert_eq!(masked(&config, "155555"), "€ 1 555.55");

        let source = create_number_mask(&config).unwrap();
        let result = format_with_mask("155555", Some(&source), &FormatOptions::default());
        assert_eq!(result.unmasked, "155555");
    }

    #[test]
    fn test_same_chars_allowed_without_fraction() {
        let config = NumberMaskConfig::new()
            .delimiter(Some(','))
            .separator(Some(','))
            .precision(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mask_for_digits_counts() {
        let config = NumberMaskConfig::default();
        let mask = config.mask_for_digits(9);
        assert_eq!(mask.pattern_count(), 9);
        assert_eq!(mask.to_string(), "9.999.999,99");
        assert_eq!(config.mask_for_digits(0).to_string(), ",");
    }

    #[test]
    fn test_unmasked_is_digits_only() {
        let source = create_number_mask(&NumberMaskConfig::new().prefix("R$ ")).unwrap();
        let result = format_with_mask("R$ 12.345,67", Some(&source), &FormatOptions::default());
        assert_eq!(result.unmasked, "1234567");
    }
}
