//! Benchmarks for subset-sum amplification runs.
//!
//! Run with: cargo bench -p alsvid-grover

use alsvid_grover::{GroverSearch, SearchConfig, decode};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Benchmark full runs as the address register grows.
fn bench_search_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_width");

    for num_weights in &[3usize, 5, 7] {
        let weights: Vec<u64> = (1..=*num_weights as u64).collect();
        let config = SearchConfig::new(weights, 5, 6, 7);
        group.bench_with_input(
            BenchmarkId::new("run", num_weights),
            &config,
            |b, config| {
                let search = GroverSearch::new(config.clone()).unwrap();
                b.iter(|| black_box(search.run().unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark scaling in the number of amplification rounds.
fn bench_search_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_rounds");

    let config = SearchConfig::new(vec![1, 3, 6, 4, 2], 4, 6, 1);
    let search = GroverSearch::new(config).unwrap();
    for rounds in &[1usize, 4, 7, 12] {
        group.bench_with_input(BenchmarkId::new("rounds", rounds), rounds, |b, &rounds| {
            b.iter(|| black_box(search.run_rounds(rounds).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark decoding alone.
fn bench_decode(c: &mut Criterion) {
    let weights = vec![1u64, 3, 6, 4, 2];
    let config = SearchConfig::new(weights.clone(), 4, 6, 7);
    let outcome = GroverSearch::new(config).unwrap().run().unwrap();

    c.bench_function("decode", |b| {
        b.iter(|| black_box(decode(&outcome.distribution, &weights)));
    });
}

criterion_group!(
    benches,
    bench_search_width,
    bench_search_rounds,
    bench_decode
);
criterion_main!(benches);
