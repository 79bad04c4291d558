//! Assorted utilities and helpers.

use std::ops::Range;

use crate::span::Span;

/// Translate a span over the `char`s of `s` into a byte range of `s`.
///
/// The returned range always lies on UTF-8 boundaries, so `&s[range]` is
/// valid. Spans reaching past the last char are clamped to `s.len()`.
pub fn char_span_to_bytes(s: &str, span: Span) -> Range<usize> {
    let mut boundaries = s
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(s.len()));
    let start = boundaries.nth(span.start).unwrap_or(s.len());
    let end = if span.is_empty() {
        start
    } else {
        boundaries.nth(span.len() - 1).unwrap_or(s.len())
    };
    start..end
}
