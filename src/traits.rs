//! Core trait definitions for palindrome pairing rules.
//!
//! The scan never compares two symbols directly. Every comparison in the
//! expansion step goes through a [`MirrorRule`], which decides whether the
//! symbol on the left of a center *pairs* with the symbol on the right.
//!
//! With [`Exact`](crate::rules::Exact) this is plain equality and the scan
//! finds ordinary palindromes. With
//! [`DnaComplement`](crate::rules::dna::DnaComplement) it finds
//! reverse-complement palindromes ("helices") in nucleotide strings.

/// Pairing relation used by the palindrome scan.
///
/// Requirements:
/// - Symmetric: `pairs(a, b) == pairs(b, a)`.
/// - Chain-consistent: if `a~b`, `b~c` and `c~d` then `a~d`.
///
/// Mirror reuse seeds the radius at `i` from the radius at `2*center - i` by
/// chaining pairs through the enclosing palindrome. When that chain crosses
/// the enclosing center it needs the center cell to pair with itself, so the
/// scan only reuses windows centered on separators or on symbols `s` with
/// `pairs(s, s)`. Equality qualifies everywhere. The Watson–Crick complement
/// never pairs a base with itself, so helices only reuse separator-centered
/// windows.
///
/// A rule that breaks these requirements still produces *a* palindrome-ish
/// span, but not necessarily the longest one.
pub trait MirrorRule<T: ?Sized> {
    /// Whether `left` and `right` may sit at mirrored positions of a palindrome.
    fn pairs(&self, left: &T, right: &T) -> bool;
}

impl<T: ?Sized, R: MirrorRule<T> + ?Sized> MirrorRule<T> for &R {
    #[inline]
    fn pairs(&self, left: &T, right: &T) -> bool {
        (**self).pairs(left, right)
    }
}
