use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use manacher::{find_longest_palindrome, PalindromeFinder};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_text(rng: &mut StdRng, alphabet: &[u8], len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        p.memory() / 1024
    } else {
        0
    }
}

fn bench_random_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("manacher_random_bytes");
    for &len in &[1_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(format!("len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_text(&mut rng, b"ab", len)
                },
                |seq| {
                    let before = rss_kib();
                    let span = PalindromeFinder::default().find_span(&seq);
                    let after = rss_kib();
                    black_box(span);
                    // record memory delta to stderr to avoid criterion noise
                    eprintln!(
                        "RSS KiB delta (manacher {len}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

fn bench_uniform_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("manacher_uniform_run");
    for &len in &[1_000usize, 100_000, 1_000_000] {
        let text = "a".repeat(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_function(format!("len_{len}"), |b| {
            b.iter(|| black_box(find_longest_palindrome(black_box(&text)).len()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random_bytes, bench_uniform_run);
criterion_main!(benches);
