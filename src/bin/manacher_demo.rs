//! Prints the longest palindrome of a few fixed inputs.
//!
//! Run with:
//! `cargo run --bin manacher_demo`

use manacher::find_longest_palindrome;

const CASES: &[&str] = &[
    "abcba",
    "abaxyzzyxf",
    "xyzracecarabc",
    "fgjijkllkjljgf",
    "abacdfgdcabbaabcdedcba",
];

fn main() {
    for (idx, input) in CASES.iter().enumerate() {
        println!("Test Case {}: {}", idx + 1, find_longest_palindrome(input));
    }
}
