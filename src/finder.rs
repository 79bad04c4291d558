//! Longest-palindrome finder.
//!
//! [`PalindromeFinder`] ties the pieces together for one query:
//! 1. interleave the input with separators,
//! 2. run the Manacher scan under the configured rule,
//! 3. optionally extend each center with a mismatch budget,
//! 4. map the best center back to original coordinates and slice.
//!
//! The finder holds configuration only. Every call allocates and drops its
//! own scan state, so one finder can serve many threads at once.

use crate::cell::interleave;
use crate::mismatch::MismatchTable;
use crate::radius::RadiusTable;
use crate::rules::Exact;
use crate::span::Span;
use crate::traits::MirrorRule;
use crate::utils::char_span_to_bytes;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Longest palindromic substring search under a pairing rule.
///
/// ```
/// use manacher::{PalindromeFinder, rules::DnaComplement};
///
/// let exact = PalindromeFinder::default();
/// assert_eq!(exact.find_str("xyzracecarabc"), "racecar");
///
/// let helix = PalindromeFinder::with_mismatches(DnaComplement, 1);
/// assert_eq!(helix.find(b"ACGTTT"), b"ACGTT");
/// ```
#[derive(Debug, Clone)]
pub struct PalindromeFinder<R = Exact> {
    rule: R,
    mismatches: usize,
}

impl Default for PalindromeFinder<Exact> {
    fn default() -> Self {
        Self::new(Exact)
    }
}

impl<R> PalindromeFinder<R> {
    /// Finder for exact palindromes under `rule`.
    pub fn new(rule: R) -> Self {
        Self::with_mismatches(rule, 0)
    }

    /// Finder tolerating up to `mismatches` failing pairs per palindrome.
    pub fn with_mismatches(rule: R, mismatches: usize) -> Self {
        Self { rule, mismatches }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Configured mismatch budget.
    pub fn mismatches(&self) -> usize {
        self.mismatches
    }

    /// Exact radius table for `seq`. Ignores the mismatch budget.
    pub fn radii<T>(&self, seq: &[T]) -> RadiusTable
    where
        R: MirrorRule<T>,
    {
        RadiusTable::compute(&interleave(seq), &self.rule)
    }

    /// Location of the longest palindrome in `seq`; leftmost on ties.
    pub fn find_span<T>(&self, seq: &[T]) -> Span
    where
        R: MirrorRule<T>,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("find_span", len = seq.len(), mismatches = self.mismatches);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let cells = interleave(seq);
        let exact = RadiusTable::compute(&cells, &self.rule);
        if self.mismatches == 0 {
            return exact.longest();
        }
        MismatchTable::compute(&cells, &self.rule, &exact, self.mismatches).longest()
    }

    /// Longest palindrome in `seq`, borrowed from `seq`.
    pub fn find<'a, T>(&self, seq: &'a [T]) -> &'a [T]
    where
        R: MirrorRule<T>,
    {
        self.find_span(seq).slice(seq)
    }

    /// Longest palindrome in `s`, compared char by char.
    ///
    /// The result is a sub-slice of `s`; multi-byte chars are never split.
    pub fn find_str<'a>(&self, s: &'a str) -> &'a str
    where
        R: MirrorRule<char>,
    {
        let chars: Vec<char> = s.chars().collect();
        let span = self.find_span(&chars);
        &s[char_span_to_bytes(s, span)]
    }

    /// Run [`find_str`](Self::find_str) on every input, preserving order.
    #[cfg(feature = "parallel")]
    pub fn find_batch<'a>(&self, inputs: &[&'a str]) -> Vec<&'a str>
    where
        R: MirrorRule<char> + Sync,
    {
        inputs
            .par_iter()
            .map(|&s| {
                #[cfg(feature = "tracing")]
                let span = tracing::trace_span!("batch_item", len = s.len());
                #[cfg(feature = "tracing")]
                let _enter = span.enter();
                self.find_str(s)
            })
            .collect()
    }

    /// Run [`find_str`](Self::find_str) on every input, preserving order.
    #[cfg(not(feature = "parallel"))]
    pub fn find_batch<'a>(&self, inputs: &[&'a str]) -> Vec<&'a str>
    where
        R: MirrorRule<char>,
    {
        inputs
            .iter()
            .map(|&s| {
                #[cfg(feature = "tracing")]
                let span = tracing::trace_span!("batch_item", len = s.len());
                #[cfg(feature = "tracing")]
                let _enter = span.enter();
                self.find_str(s)
            })
            .collect()
    }
}

/// Longest palindromic substring of `s`; the first one on ties.
///
/// ```
/// use manacher::find_longest_palindrome;
///
/// assert_eq!(find_longest_palindrome("abaxyzzyxf"), "xyzzyx");
/// assert_eq!(find_longest_palindrome(""), "");
/// ```
pub fn find_longest_palindrome(s: &str) -> &str {
    PalindromeFinder::default().find_str(s)
}

/// Longest palindromic run of `seq` under equality; the first one on ties.
pub fn longest_palindrome<T: Eq>(seq: &[T]) -> &[T] {
    PalindromeFinder::default().find(seq)
}
