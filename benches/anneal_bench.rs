//! Criterion benchmarks for the annealing loop.
//!
//! One group per cooling scheme, across dimensions, so schedule overhead
//! and objective cost can be told apart.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_anneal::objective::rastrigin;
use u_anneal::sa::{AnnealConfig, AnnealRunner, CoolingScheme};

fn bench_rastrigin(c: &mut Criterion) {
    let mut group = c.benchmark_group("rastrigin");
    for &dim in &[3usize, 30, 300] {
        let x: Vec<f64> = (0..dim).map(|i| (i as f64 * 0.37).sin() * 5.0).collect();
        group.bench_with_input(BenchmarkId::from_parameter(dim), &x, |b, x| {
            b.iter(|| rastrigin(black_box(x)))
        });
    }
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);

    for scheme in CoolingScheme::ALL {
        for &dim in &[3usize, 10, 50] {
            let rate = if scheme == CoolingScheme::Linear { 50.0 } else { 0.9 };
            let config = AnnealConfig::default()
                .with_dimensions(dim)
                .with_scheme(scheme)
                .with_cooling_rate(rate)
                .with_max_iterations(10_000)
                .with_seed(42);
            group.bench_with_input(
                BenchmarkId::new(scheme.name(), dim),
                &config,
                |b, config| {
                    b.iter(|| {
                        let result = AnnealRunner::run(black_box(config));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_rastrigin, bench_anneal);
criterion_main!(benches);
