//! The Manacher scan: per-center palindrome radii in linear time.
//!
//! Given the interleaved sequence `t` (see [`crate::cell`]), the scan visits
//! every interior center `i` once, left to right, and computes `radius[i]`,
//! the largest `k` such that `t[i-k..=i+k]` is a palindrome under the rule.
//!
//! Two pieces of rolling state make this linear:
//! - the *window*: center and right edge of the rightmost palindrome seen so
//!   far. Inside it, the radius at `i` is at least the radius at its mirror
//!   `2*center - i`, capped at `right - i`.
//! - the *best*: the first center achieving the largest radius.
//!
//! A palindrome only becomes the window if its center cell pairs with itself
//! (see [`Cell::pairs_with_itself`]). Reflecting through a window whose
//! center cannot pair with itself would chain a pair through that center and
//! overstate the seed. Separators always qualify, so a rule such as
//! [`DnaComplement`](crate::rules::DnaComplement) still reuses
//! separator-centered windows.
//!
//! When every center qualifies (as with [`Exact`](crate::rules::Exact)),
//! `right` never moves left and every successful comparison pushes it one
//! step right, so the scan makes at most `n` successful comparisons and at
//! most one failing comparison per center.

use crate::cell::Cell;
use crate::span::Span;
use crate::traits::MirrorRule;

/// Rightmost palindrome discovered so far.
#[derive(Debug, Clone, Copy, Default)]
struct Window {
    center: usize,
    right: usize,
}

impl Window {
    /// Seed for `radius[i]` from its mirror, or 0 outside the window.
    #[inline]
    fn seed(&self, i: usize, radii: &[usize]) -> usize {
        if i < self.right {
            let mirror = 2 * self.center - i;
            (self.right - i).min(radii[mirror])
        } else {
            0
        }
    }

    #[inline]
    fn reaches_past(&self, i: usize, radius: usize) -> bool {
        i + radius > self.right
    }

    #[inline]
    fn advance(&mut self, i: usize, radius: usize) {
        self.center = i;
        self.right = i + radius;
    }
}

/// First center achieving the largest radius.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Best {
    pub(crate) radius: usize,
    pub(crate) center: usize,
}

impl Best {
    /// Strictly greater only: ties keep the earlier (leftmost) center.
    #[inline]
    pub(crate) fn offer(&mut self, center: usize, radius: usize) {
        if radius > self.radius {
            self.radius = radius;
            self.center = center;
        }
    }

    #[inline]
    pub(crate) fn span(&self) -> Span {
        span_for(self.center, self.radius)
    }
}

/// Map a transformed center and radius back to original coordinates.
#[inline]
pub(crate) fn span_for(center: usize, radius: usize) -> Span {
    Span::new((center - radius) / 2, radius)
}

/// Palindrome radii for every position of an interleaved sequence.
#[derive(Debug, Clone)]
pub struct RadiusTable {
    radii: Vec<usize>,
    best: Best,
    comparisons: usize,
}

impl RadiusTable {
    /// Run the scan over `cells` with the given pairing rule.
    pub fn compute<T, R>(cells: &[Cell<'_, T>], rule: &R) -> Self
    where
        R: MirrorRule<T> + ?Sized,
    {
        let n = cells.len();
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("manacher_scan", cells = n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut radii = vec![0usize; n];
        let mut window = Window::default();
        let mut best = Best::default();
        let mut comparisons = 0usize;

        // Positions 0 and n-1 are boundary separators; their radius stays 0.
        for i in 1..n.saturating_sub(1) {
            let mut radius = window.seed(i, &radii);
            loop {
                let reach = radius + 1;
                if reach > i || i + reach >= n {
                    break;
                }
                comparisons += 1;
                if !cells[i - reach].pairs_with(&cells[i + reach], rule) {
                    break;
                }
                radius = reach;
            }
            radii[i] = radius;
            if window.reaches_past(i, radius) && cells[i].pairs_with_itself(rule) {
                window.advance(i, radius);
            }
            best.offer(i, radius);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            comparisons,
            best_center = best.center,
            best_radius = best.radius,
            "scan complete"
        );

        Self {
            radii,
            best,
            comparisons,
        }
    }

    /// Number of transformed positions (`2m + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Length of the original sequence the table was built from.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.radii.len() / 2
    }

    #[inline]
    pub fn radii(&self) -> &[usize] {
        &self.radii
    }

    /// Radius at transformed position `center`.
    ///
    /// # Panics
    /// Panics if `center >= self.len()`.
    #[inline]
    pub fn radius(&self, center: usize) -> usize {
        self.radii[center]
    }

    /// The maximal palindrome centered at transformed position `center`.
    pub fn span_at(&self, center: usize) -> Span {
        span_for(center, self.radii[center])
    }

    /// Longest palindrome; leftmost on ties. Empty for empty input.
    #[inline]
    pub fn longest(&self) -> Span {
        self.best.span()
    }

    /// Whether `span` of the original sequence is a palindrome, in O(1).
    ///
    /// Out-of-range spans are never palindromes.
    pub fn is_palindrome(&self, span: Span) -> bool {
        if span.start > span.end || span.end > self.source_len() {
            return false;
        }
        // Original index k sits at transformed 2k+1, so [start, end) is
        // centered at start + end.
        self.radii[span.start + span.end] >= span.len()
    }

    /// Rule evaluations performed by the expansion step.
    ///
    /// Never exceeds `2 * len()` when every symbol pairs with itself.
    #[inline]
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }
}
