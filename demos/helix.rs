//! Example: reverse-complement palindromes ("helices") in DNA.
//!
//! Run with:
//! `cargo run --example helix`
//!
//! A helix reads the same on both strands, e.g. the EcoRI site `GAATTC`.
//! Allowing a mismatch finds near-helices that a single point mutation broke.

use manacher::{rules::DnaComplement, PalindromeFinderBuilder};

fn main() {
    let seq = "TTACGGAATTCATGCCGGTACAT";

    for mismatches in 0..=2 {
        let finder = PalindromeFinderBuilder::new(DnaComplement)
            .with_mismatches(mismatches)
            .build();
        let span = finder.find_span(seq.as_bytes());
        println!(
            "mismatches={mismatches}: {} at {}..{}",
            &seq[span.range()],
            span.start,
            span.end
        );
    }
}
