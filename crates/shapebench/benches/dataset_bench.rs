//! Criterion benchmarks for dataset generation (setup cost, not measured by
//! the dispatch benches).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shapebench::dataset::Dataset;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset");
    for &n in &[8usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("generate", n), &n, |b, &n| {
            b.iter(|| black_box(Dataset::generate(n)))
        });
        group.bench_with_input(BenchmarkId::new("shuffled", n), &n, |b, &n| {
            b.iter(|| black_box(Dataset::shuffled(n, 7)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
