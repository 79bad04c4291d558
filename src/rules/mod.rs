//! Built-in pairing rules for the palindrome scan.
//!
//! - [`Exact`] : ordinary palindromes, symbols pair when equal.
//! - [`dna`]   : reverse-complement palindromes over nucleotides.

pub mod dna;

use crate::traits::MirrorRule;

pub use dna::DnaComplement;

/// Symbols pair when they are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

impl<T: Eq + ?Sized> MirrorRule<T> for Exact {
    #[inline]
    fn pairs(&self, left: &T, right: &T) -> bool {
        left == right
    }
}
