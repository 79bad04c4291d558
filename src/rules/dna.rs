//! Watson–Crick complement pairing.
//!
//! A helix is a stretch of DNA equal to its own reverse complement, e.g.
//! `GAATTC`. Under this rule a symbol pairs with its complement
//! (A↔T, C↔G) rather than with itself.
//!
//! Lowercase nucleotides pair with lowercase complements only. Anything that
//! is not a nucleotide (including `N`) never pairs.

use crate::traits::MirrorRule;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DnaComplement;

impl DnaComplement {
    /// Complement of a nucleotide byte, or `None` for anything else.
    #[inline]
    pub fn complement(base: u8) -> Option<u8> {
        match base {
            b'A' => Some(b'T'),
            b'T' => Some(b'A'),
            b'C' => Some(b'G'),
            b'G' => Some(b'C'),
            b'a' => Some(b't'),
            b't' => Some(b'a'),
            b'c' => Some(b'g'),
            b'g' => Some(b'c'),
            _ => None,
        }
    }
}

impl MirrorRule<u8> for DnaComplement {
    #[inline]
    fn pairs(&self, left: &u8, right: &u8) -> bool {
        Self::complement(*left) == Some(*right)
    }
}

impl MirrorRule<char> for DnaComplement {
    #[inline]
    fn pairs(&self, left: &char, right: &char) -> bool {
        match (u8::try_from(*left), u8::try_from(*right)) {
            (Ok(l), Ok(r)) => Self::complement(l) == Some(r),
            _ => false,
        }
    }
}
