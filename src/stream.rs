//! Streaming formatting for values as they arrive.
//!
//! Iterator adapters that format (or unmask) each value lazily, useful for
//! processing large files or network streams without collecting them first.
//!
//! # Example
//!
//! ```
//! use text_mask::stream::FormatExt;
//! use text_mask::{catalog::masks, MaskFormatter};
//!
//! let cpf = MaskFormatter::new(masks::brl_cpf());
//! let lines = ["12345678901", "987.654.321-00"];
//! let raw: Vec<String> = lines.iter().unmask_with(&cpf).collect();
//!
//! assert_eq!(raw, vec!["12345678901", "98765432100"]);
//! ```

use crate::format::{FormatResult, MaskFormatter};

/// Formats each value yielded by the wrapped iterator.
///
/// Created by [`FormatExt::format_with`].
#[derive(Debug, Clone)]
pub struct FormatStream<'f, I> {
    inner: I,
    formatter: &'f MaskFormatter,
}

impl<'f, I> FormatStream<'f, I> {
    /// Creates a new FormatStream wrapping the given iterator.
    #[inline]
    pub fn new(inner: I, formatter: &'f MaskFormatter) -> Self {
        Self { inner, formatter }
    }

    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for FormatStream<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = FormatResult;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| self.formatter.format(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for FormatStream<'_, I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

impl<I, S> DoubleEndedIterator for FormatStream<'_, I>
where
    I: DoubleEndedIterator<Item = S>,
    S: AsRef<str>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|s| self.formatter.format(s.as_ref()))
    }
}

/// Yields the raw (unmasked) form of each value.
///
/// Created by [`FormatExt::unmask_with`].
#[derive(Debug, Clone)]
pub struct UnmaskStream<'f, I> {
    inner: I,
    formatter: &'f MaskFormatter,
}

impl<'f, I> UnmaskStream<'f, I> {
    /// Creates a new UnmaskStream wrapping the given iterator.
    #[inline]
    pub fn new(inner: I, formatter: &'f MaskFormatter) -> Self {
        Self { inner, formatter }
    }
}

impl<I, S> Iterator for UnmaskStream<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| self.formatter.unmask(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for UnmaskStream<'_, I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

/// Extension trait adding mask formatting to any iterator.
///
/// Automatically implemented for all iterators.
pub trait FormatExt: Iterator + Sized {
    /// Formats each value with `formatter`.
    ///
    /// # Example
    ///
    /// ```
    /// use text_mask::stream::FormatExt;
    /// use text_mask::{catalog::masks, MaskFormatter};
    ///
    /// let phone = MaskFormatter::new(masks::us_phone());
    /// let shown: Vec<String> = ["4155550123"]
    ///     .iter()
    ///     .format_with(&phone)
    ///     .map(|r| r.masked.clone())
    ///     .collect();
    /// assert_eq!(shown, vec!["(415) 555-0123"]);
    /// ```
    fn format_with(self, formatter: &MaskFormatter) -> FormatStream<'_, Self>;

    /// Yields only the raw value of each item.
    fn unmask_with(self, formatter: &MaskFormatter) -> UnmaskStream<'_, Self>;
}

impl<I: Iterator + Sized> FormatExt for I {
    #[inline]
    fn format_with(self, formatter: &MaskFormatter) -> FormatStream<'_, Self> {
        FormatStream::new(self, formatter)
    }

    #[inline]
    fn unmask_with(self, formatter: &MaskFormatter) -> UnmaskStream<'_, Self> {
        UnmaskStream::new(self, formatter)
    }
}
