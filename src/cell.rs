//! Interleaved ("transformed") sequence.
//!
//! Separating every symbol, and both ends, with a separator cell makes every
//! palindrome odd-length in the transformed coordinates, so even and odd
//! palindromes of the input are handled by the same center expansion.
//!
//! The separator is a distinct enum variant rather than a reserved character,
//! so no input can collide with it.

use crate::traits::MirrorRule;

/// One position of the transformed sequence.
#[derive(Debug, PartialEq, Eq)]
pub enum Cell<'a, T> {
    Separator,
    Symbol(&'a T),
}

// Manual impls: a derive would demand `T: Clone`/`T: Copy`.
impl<T> Clone for Cell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cell<'_, T> {}

impl<'a, T> Cell<'a, T> {
    #[inline]
    pub fn is_separator(&self) -> bool {
        matches!(self, Cell::Separator)
    }

    /// Pair two cells under `rule`.
    ///
    /// Separators pair with separators only; symbols are delegated to the rule.
    #[inline]
    pub fn pairs_with<R>(&self, other: &Self, rule: &R) -> bool
    where
        R: MirrorRule<T> + ?Sized,
    {
        match (self, other) {
            (Cell::Separator, Cell::Separator) => true,
            (Cell::Symbol(l), Cell::Symbol(r)) => rule.pairs(l, r),
            _ => false,
        }
    }

    /// Whether the cell pairs with itself. Separators always do.
    ///
    /// Only such cells may serve as the center of a reused window: reflecting
    /// a palindrome across the window can land on the window's own center.
    #[inline]
    pub fn pairs_with_itself<R>(&self, rule: &R) -> bool
    where
        R: MirrorRule<T> + ?Sized,
    {
        self.pairs_with(self, rule)
    }
}

/// Interleave `seq` with separators: `#a#b#c#`.
///
/// The result has length `2 * seq.len() + 1`; even indices hold separators and
/// odd index `2k + 1` holds `seq[k]`.
pub fn interleave<T>(seq: &[T]) -> Vec<Cell<'_, T>> {
    let mut cells = Vec::with_capacity(2 * seq.len() + 1);
    cells.push(Cell::Separator);
    for symbol in seq {
        cells.push(Cell::Symbol(symbol));
        cells.push(Cell::Separator);
    }
    cells
}
