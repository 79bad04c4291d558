//! Palindromes that tolerate a bounded number of mismatched pairs.
//!
//! A span is a `k`-mismatch palindrome when at most `k` of its mirrored
//! symbol pairs fail the rule. The center symbol of an odd-length span is
//! never compared.
//!
//! The exact radius at a center is a free lower bound: no pair inside it can
//! mismatch. Each center therefore starts from the exact radius, spends one
//! unit of budget per mismatched pair beyond it, and stops at the first
//! mismatch it cannot afford or at a sequence bound. Expansion past the exact
//! radius is not amortized, so the worst case is O(n·m) when `k > 0`.

use crate::cell::Cell;
use crate::radius::{span_for, Best, RadiusTable};
use crate::span::Span;
use crate::traits::MirrorRule;

/// Per-center radii under a mismatch budget.
#[derive(Debug, Clone)]
pub struct MismatchTable {
    radii: Vec<usize>,
    best: Best,
    budget: usize,
}

impl MismatchTable {
    /// Extend every exact radius in `exact` by spending up to `budget`
    /// mismatches.
    ///
    /// `exact` must have been computed over the same `cells` and `rule`.
    pub fn compute<T, R>(cells: &[Cell<'_, T>], rule: &R, exact: &RadiusTable, budget: usize) -> Self
    where
        R: MirrorRule<T> + ?Sized,
    {
        let n = cells.len();
        debug_assert_eq!(exact.len(), n, "exact radii built over different cells");
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("mismatch_scan", cells = n, budget);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut radii = vec![0usize; n];
        let mut best = Best::default();

        for i in 1..n.saturating_sub(1) {
            let mut radius = exact.radius(i);
            let mut spent = 0usize;
            if budget > 0 {
                loop {
                    let reach = radius + 1;
                    if reach > i || i + reach >= n {
                        break;
                    }
                    if !cells[i - reach].pairs_with(&cells[i + reach], rule) {
                        if spent == budget {
                            break;
                        }
                        spent += 1;
                    }
                    radius = reach;
                }
            }
            radii[i] = radius;
            best.offer(i, radius);
        }

        Self {
            radii,
            best,
            budget,
        }
    }

    #[inline]
    pub fn budget(&self) -> usize {
        self.budget
    }

    #[inline]
    pub fn radii(&self) -> &[usize] {
        &self.radii
    }

    #[inline]
    pub fn radius(&self, center: usize) -> usize {
        self.radii[center]
    }

    pub fn span_at(&self, center: usize) -> Span {
        span_for(center, self.radii[center])
    }

    /// Longest span within budget; leftmost on ties.
    #[inline]
    pub fn longest(&self) -> Span {
        self.best.span()
    }
}
