//! Example: longest palindromes in strings, byte slices and numbers.
//!
//! Run with:
//! `cargo run --example longest`

use manacher::{find_longest_palindrome, longest_palindrome, PalindromeFinder, Span};

fn main() {
    for input in ["abaxyzzyxf", "xyzracecarabc", "bananas", "été", "no palindromes"] {
        println!("{input:>16} -> {}", find_longest_palindrome(input));
    }

    let digits = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
    println!("digits of pi    -> {:?}", longest_palindrome(&digits));

    // The radius table answers "is this range a palindrome?" in O(1).
    let text = b"abacabadabacaba";
    let table = PalindromeFinder::default().radii(text);
    println!("longest span    -> {:?}", table.longest());
    for span in [Span::new(0, 7), Span::new(4, 7), Span::new(1, 4)] {
        println!(
            "{:<15} -> {}",
            String::from_utf8_lossy(span.slice(text)),
            table.is_palindrome(span)
        );
    }
}
