//! Ranges in original-sequence coordinates.
//!
//! A `Span` is what the scan reports once a palindrome has been mapped back
//! out of the interleaved sequence. It is storage-agnostic: the same span
//! slices a `&[u8]`, a `&[char]` or (after byte mapping) a `&str`.

use std::ops::Range;

/// Half-open interval [start, end) over the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Inclusive start index.
    pub start: usize,
    /// Exclusive end index; the span covers [start, end).
    pub end: usize,
}

impl Span {
    /// Build a span from a start index and a length.
    #[inline]
    pub fn new(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    /// Length of the span in original units.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Slice `seq` by this span.
    ///
    /// # Panics
    /// Panics if the span does not fit inside `seq`.
    #[inline]
    pub fn slice<'a, T>(&self, seq: &'a [T]) -> &'a [T] {
        &seq[self.range()]
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}
