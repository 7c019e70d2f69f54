//! Batch formatting for many values at once.
//!
//! Useful for reformatting an imported column (phone numbers, tax ids) or
//! normalising stored values back to their raw form, with optional parallel
//! processing using rayon.

use crate::format::{format_with_mask, FormatOptions, FormatResult, MaskFormatter};
use crate::mask::MaskSource;

/// Batch formatter for processing many values with one mask.
///
/// # Example
///
/// ```
/// use text_mask::{catalog::masks, BatchFormatter};
///
/// let batch = BatchFormatter::new(masks::brl_cep());
/// let values = ["01310100", "04538-133", ""];
/// let results = batch.format_all(&values);
///
/// assert_eq!(results[0].masked, "01310-100");
/// assert_eq!(results[1].masked, "04538-133");
/// assert!(results[2].is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BatchFormatter {
    formatter: MaskFormatter,
}

impl BatchFormatter {
    /// Creates a batch formatter with default options.
    pub fn new(source: impl Into<MaskSource>) -> Self {
        Self {
            formatter: MaskFormatter::new(source),
        }
    }

    /// Creates a batch formatter from a configured single-value formatter.
    pub fn from_formatter(formatter: MaskFormatter) -> Self {
        Self { formatter }
    }

    /// The underlying single-value formatter.
    #[inline]
    pub fn formatter(&self) -> &MaskFormatter {
        &self.formatter
    }

    /// Formats every value, preserving order.
    pub fn format_all<S: AsRef<str>>(&self, values: &[S]) -> Vec<FormatResult> {
        values.iter().map(|v| self.formatter.format(v.as_ref())).collect()
    }

    /// Returns the raw (unmasked) form of every value, preserving order.
    pub fn unmask_all<S: AsRef<str>>(&self, values: &[S]) -> Vec<String> {
        values.iter().map(|v| self.formatter.unmask(v.as_ref())).collect()
    }

    /// Formats values in parallel using rayon.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn format_parallel<S: AsRef<str> + Sync>(&self, values: &[S]) -> Vec<FormatResult> {
        use rayon::prelude::*;
        values
            .par_iter()
            .map(|v| self.formatter.format(v.as_ref()))
            .collect()
    }

    /// Unmasks values in parallel using rayon.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn unmask_parallel<S: AsRef<str> + Sync>(&self, values: &[S]) -> Vec<String> {
        use rayon::prelude::*;
        values
            .par_iter()
            .map(|v| self.formatter.unmask(v.as_ref()))
            .collect()
    }
}

/// Formats a slice of values without creating a [`BatchFormatter`].
///
/// # Example
///
/// ```
/// use text_mask::batch::format_batch;
/// use text_mask::{catalog::masks, FormatOptions, MaskSource};
///
/// let source = MaskSource::from(masks::zip_code());
/// let results = format_batch(&["94105", "1-0-0-0-1"], &source, &FormatOptions::default());
/// assert_eq!(results[1].masked, "10001");
/// ```
#[inline]
pub fn format_batch<S: AsRef<str>>(
    values: &[S],
    source: &MaskSource,
    options: &FormatOptions,
) -> Vec<FormatResult> {
    values
        .iter()
        .map(|v| format_with_mask(v.as_ref(), Some(source), options))
        .collect()
}

/// Formats a slice of values in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn format_batch_parallel<S: AsRef<str> + Sync>(
    values: &[S],
    source: &MaskSource,
    options: &FormatOptions,
) -> Vec<FormatResult> {
    use rayon::prelude::*;
    values
        .par_iter()
        .map(|v| format_with_mask(v.as_ref(), Some(source), options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::masks;

    const RAW_PHONE: &str = "11987654321";
    const FORMATTED_PHONE: &str = "(11) 98765-4321";

    #[test]
    fn test_batch_format_all() {
        let batch = BatchFormatter::new(masks::brl_phone());
        let values = vec![RAW_PHONE, FORMATTED_PHONE, "11 9 8765 4321"];
        let results = batch.format_all(&values);

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.masked == FORMATTED_PHONE));
    }

    #[test]
    fn test_batch_unmask_all() {
        let batch = BatchFormatter::new(masks::brl_phone());
        let raw = batch.unmask_all(&[FORMATTED_PHONE, "(21) 3"]);
        assert_eq!(raw, vec![RAW_PHONE.to_string(), "213".to_string()]);
    }

    #[test]
    fn test_from_formatter_keeps_options() {
        let formatter = MaskFormatter::new(masks::brl_cep()).auto_complete(true);
        let batch = BatchFormatter::from_formatter(formatter);
        assert!(batch.formatter().options().auto_complete);
        assert_eq!(batch.format_all(&["01310"])[0].masked, "01310-");
    }

    #[test]
    fn test_format_batch_fn() {
        let source = MaskSource::from(masks::brl_cpf());
        let results = format_batch(&["12345678901"], &source, &FormatOptions::default());
        assert_eq!(results[0].masked, "123.456.789-01");
    }

    #[test]
    fn test_empty_batch() {
        let batch = BatchFormatter::new(masks::brl_phone());
        let values: Vec<&str> = vec![];
        assert!(batch.format_all(&values).is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_formatting() {
        let batch = BatchFormatter::new(masks::brl_phone());
        let values: Vec<String> = (0..1000).map(|_| RAW_PHONE.to_string()).collect();

        let results = batch.format_parallel(&values);
        assert_eq!(results.len(), 1000);
        assert!(results.iter().all(|r| r.masked == FORMATTED_PHONE));

        let raw = batch.unmask_parallel(&values);
        assert!(raw.iter().all(|r| r == RAW_PHONE));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_format_batch_parallel_fn() {
        let source = masks::brl_currency();
        let values = vec!["100", "100000"];
        let results = format_batch_parallel(&values, &source, &FormatOptions::default());
        assert_eq!(results[0].masked, "R$ 1,00");
        assert_eq!(results[1].masked, "R$ 1.000,00");
    }
}
