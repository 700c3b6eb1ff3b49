use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use sm_engine::{BlockedEngine, MatmulEngine, ReferenceEngine, SystolicEngine};

fn patterned_matrix(rows: usize, cols: usize) -> Vec<i32> {
    (0..rows * cols).map(|i| (i % 23) as i32 - 11).collect()
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    for size in [64usize, 128, 256] {
        let a = patterned_matrix(size, size);
        let b = patterned_matrix(size, size);

        group.bench_with_input(BenchmarkId::new("reference", size), &size, |bench, &s| {
            let engine = ReferenceEngine::new();
            bench.iter(|| engine.multiply(&a, &b, s, s, s).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("blocked", size), &size, |bench, &s| {
            let engine = BlockedEngine::<8>::new();
            bench.iter(|| engine.multiply(&a, &b, s, s, s).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("systolic", size), &size, |bench, &s| {
            let engine = SystolicEngine::<8>::new();
            bench.iter(|| engine.multiply(&a, &b, s, s, s).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
