use manacher::rules::{DnaComplement, Exact};
use manacher::{MirrorRule, PalindromeFinder, PalindromeFinderBuilder, Span};
use proptest::prelude::*;

/// Mismatched mirrored pairs of `sub` under `rule`; the middle symbol is free.
fn mismatches<R: MirrorRule<u8>>(sub: &[u8], rule: &R) -> usize {
    let half = sub.len() / 2;
    (0..half)
        .filter(|&k| !rule.pairs(&sub[k], &sub[sub.len() - 1 - k]))
        .count()
}

fn brute_force<R: MirrorRule<u8>>(seq: &[u8], rule: &R, budget: usize) -> Span {
    let mut best = Span::default();
    for i in 0..seq.len() {
        for j in i + 1..=seq.len() {
            if j - i > best.len() && mismatches(&seq[i..j], rule) <= budget {
                best = Span { start: i, end: j };
            }
        }
    }
    best
}

#[test]
fn challenge_examples() {
    let cases: [(&str, [&str; 3]); 6] = [
        ("GAATTC", ["GAATTC", "GAATTC", "GAATTC"]),
        ("ACGTTT", ["ACGT", "ACGTT", "ACGTTT"]),
        ("AAAAAA", ["A", "AAA", "AAAAA"]),
        ("GGATCCA", ["GGATCC", "GGATCC", "GGATCCA"]),
        ("TTGCAACG", ["TTGCAA", "TTGCAA", "TTGCAAC"]),
        ("CCGGTAC", ["CCGG", "CCGGT", "CCGGT"]),
    ];
    for (seq, expected) in cases {
        for (budget, want) in expected.iter().enumerate() {
            let finder = PalindromeFinder::with_mismatches(DnaComplement, budget);
            assert_eq!(finder.find(seq.as_bytes()), want.as_bytes(), "seq={seq} budget={budget}");
        }
    }
}

#[test]
fn non_nucleotides_break_helices() {
    let finder = PalindromeFinder::new(DnaComplement);
    // The middle symbol of an odd helix is never compared, so N may sit there.
    assert_eq!(finder.find(b"GAANTTC"), b"GAANTTC");
    assert_eq!(finder.find(b"GANATC"), b"AT");
    assert_eq!(finder.find(b"NNN"), b"N");
    assert_eq!(finder.find_str("gaattc"), "gaattc");
}

#[test]
fn odd_helices_do_not_seed_neighbours() {
    // A base never pairs with itself, so the radius found around the middle
    // T of "ATT" says nothing about the "TT" center to its right.
    let finder = PalindromeFinder::new(DnaComplement);
    assert_eq!(finder.find(b"ATTT"), b"ATT");
    assert_eq!(finder.find(b"AAAT"), b"AAT");

    let seq = b"TTATTTATATTG";
    let expected = ["TATA", "TATTTATA", "TTATTTATAT"];
    for (budget, want) in expected.iter().enumerate() {
        let span = PalindromeFinder::with_mismatches(DnaComplement, budget).find_span(seq);
        assert_eq!(span, brute_force(seq, &DnaComplement, budget), "budget={budget}");
        assert_eq!(span.slice(seq), want.as_bytes(), "budget={budget}");
    }
}

proptest! {
    #[test]
    fn helix_matches_brute_force(s in "[ACGT]{0,80}", budget in 0usize..3) {
        let seq = s.as_bytes();
        let finder = PalindromeFinderBuilder::new(DnaComplement)
            .with_mismatches(budget)
            .build();
        prop_assert_eq!(finder.find_span(seq), brute_force(seq, &DnaComplement, budget));
    }

    #[test]
    fn exact_with_budget_matches_brute_force(s in "[abc]{0,80}", budget in 0usize..3) {
        let seq = s.as_bytes();
        let finder = PalindromeFinder::with_mismatches(Exact, budget);
        prop_assert_eq!(finder.find_span(seq), brute_force(seq, &Exact, budget));
    }

    #[test]
    fn larger_budget_never_shrinks(s in "[ACGT]{0,80}", budget in 0usize..4) {
        let seq = s.as_bytes();
        let tight = PalindromeFinder::with_mismatches(DnaComplement, budget).find_span(seq);
        let loose = PalindromeFinder::with_mismatches(DnaComplement, budget + 1).find_span(seq);
        prop_assert!(loose.len() >= tight.len());
    }
}
