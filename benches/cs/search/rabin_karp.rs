use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rksearch::hashing::{poly_hash, window_hashes, HashParams, DEFAULT_MODULUS};
use rksearch::search::search;

fn random_text(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(b'a'..=b'd') as char).collect()
}

/// Re-hashes every window from scratch; the baseline the rolling recurrence replaces.
fn rehash_every_window(text: &str, window_len: usize, params: &HashParams) -> Vec<u64> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(window_len)
        .map(|w| poly_hash(&w.iter().collect::<String>(), params))
        .collect()
}

fn bench_window_hashes(c: &mut Criterion) {
    let params = HashParams::new(DEFAULT_MODULUS, 1_000_003).unwrap();
    let text = random_text(20_000, 1);
    let mut group = c.benchmark_group("window_hashes");

    for &window_len in &[8usize, 64, 512] {
        group.bench_with_input(
            BenchmarkId::new("rolling", window_len),
            &window_len,
            |b, &w| b.iter(|| window_hashes(black_box(&text), w, &params).unwrap()),
        );
        group.bench_with_input(
            BenchmarkId::new("rehash", window_len),
            &window_len,
            |b, &w| b.iter(|| rehash_every_window(black_box(&text), w, &params)),
        );
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let params = HashParams::new(DEFAULT_MODULUS, 1_000_003).unwrap();
    let text = random_text(100_000, 2);
    let pattern: String = text.chars().skip(50_000).take(16).collect();

    c.bench_function("search_100k", |b| {
        b.iter(|| search(black_box(&text), black_box(&pattern), &params))
    });
}

criterion_group!(benches, bench_window_hashes, bench_search);
criterion_main!(benches);
