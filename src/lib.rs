//! Longest palindromic substring in linear time (Manacher's algorithm).
//!
//! This crate finds the longest contiguous palindrome of a sequence with a
//! single left-to-right scan that reuses palindromes it has already seen.
//!
//! ## Core idea
//! 1. Interleave the input with separator cells (`#a#b#a#`) so that even- and
//!    odd-length palindromes both have a single center cell.
//! 2. Scan centers left to right, keeping the rightmost palindrome found so
//!    far. Inside it, the radius at `i` starts from the radius at its mirror
//!    `2*center - i` instead of from zero.
//! 3. Map the widest center back to the original input and slice it.
//!
//! Because the right edge of the window only moves forward, the total number
//! of comparisons is at most twice the interleaved length.
//!
//! Separators are a distinct enum variant ([`cell::Cell`]), not a reserved
//! character, so every input is valid, including arbitrary Unicode.
//!
//! ## Quick start
//! ```
//! use manacher::find_longest_palindrome;
//!
//! assert_eq!(find_longest_palindrome("xyzracecarabc"), "racecar");
//! assert_eq!(find_longest_palindrome("abcdef"), "a");
//! ```
//!
//! ## Pairing rules
//! The comparison is pluggable through [`MirrorRule`]:
//! - [`rules::Exact`] for ordinary palindromes,
//! - [`rules::DnaComplement`] for reverse-complement palindromes in DNA.
//!
//! A [`PalindromeFinder`] may also tolerate a fixed number of mismatched
//! pairs:
//! ```
//! use manacher::{PalindromeFinderBuilder, rules::DnaComplement};
//!
//! let finder = PalindromeFinderBuilder::new(DnaComplement)
//!     .with_mismatches(1)
//!     .build();
//! assert_eq!(finder.find_str("CCGGTAC"), "CCGGT");
//! ```

pub mod builder;
pub mod cell;
pub mod finder;
pub mod mismatch;
pub mod radius;
pub mod rules;
pub mod span;
pub mod traits;
pub mod utils;

pub use crate::builder::PalindromeFinderBuilder;
pub use crate::finder::{find_longest_palindrome, longest_palindrome, PalindromeFinder};
pub use crate::radius::RadiusTable;
pub use crate::span::Span;
pub use crate::traits::MirrorRule;
