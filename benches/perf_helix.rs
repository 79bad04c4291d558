use criterion::{black_box, criterion_group, criterion_main, Criterion};
use manacher::{rules::DnaComplement, PalindromeFinder};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn bench_helix(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let seq = random_dna(&mut rng, 100_000);

    let mut group = c.benchmark_group("helix_100k");
    for budget in 0..=2usize {
        let finder = PalindromeFinder::with_mismatches(DnaComplement, budget);
        group.bench_function(format!("mismatches_{budget}"), |b| {
            b.iter(|| black_box(finder.find_span(black_box(&seq))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_helix);
criterion_main!(benches);
