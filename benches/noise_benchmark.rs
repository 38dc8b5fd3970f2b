//! Benchmark for noise generation performance.
//!
//! Run with: cargo bench --bench noise_benchmark

use coherent_noise::fractal::FractalParamsBuilder;
use coherent_noise::worley::Metric;
use coherent_noise::Engine;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn benchmark_single_sample(c: &mut Criterion) {
    let engine = Engine::new(42);

    c.bench_function("single_noise2_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(engine.noise2(black_box(x), black_box(x * 0.7)))
        });
    });
}

fn benchmark_million_samples(c: &mut Criterion) {
    let engine = Engine::new(42);

    let mut group = c.benchmark_group("million_samples");
    group.throughput(Throughput::Elements(1_000_000));
    group.sample_size(10);

    group.bench_function("1M_noise2_samples", |b| {
        b.iter(|| {
            for i in 0..1_000_000 {
                let x = (i % 1000) as f64 * 0.1;
                let y = (i / 1000) as f64 * 0.1;
                black_box(engine.noise2(x, y));
            }
        });
    });

    group.finish();
}

fn benchmark_fbm(c: &mut Criterion) {
    let engine = Engine::new(42);
    let params = FractalParamsBuilder::new().octaves(6).build();

    c.bench_function("fbm2_6_octaves", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(engine.fbm2(black_box(x), black_box(x * 0.7), params))
        });
    });
}

fn benchmark_ridged(c: &mut Criterion) {
    let engine = Engine::new(42);
    let params = FractalParamsBuilder::new().octaves(4).build();

    c.bench_function("ridged2_4_octaves", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(engine.ridged2(black_box(x), black_box(x * 0.7), params))
        });
    });
}

fn benchmark_worley(c: &mut Criterion) {
    let engine = Engine::new(42);

    c.bench_function("worley2_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(engine.worley2(black_box(x), black_box(x * 0.7), 1.0, Metric::Euclidean))
        });
    });
}

fn benchmark_domain_warp(c: &mut Criterion) {
    let engine = Engine::new(42);

    c.bench_function("domain_warp2_sample", |b| {
        let mut x = 0.0f64;
        b.iter(|| {
            x += 0.1;
            black_box(engine.domain_warp2(black_box(x), black_box(x * 0.7), 1.0))
        });
    });
}

criterion_group!(
    benches,
    benchmark_single_sample,
    benchmark_million_samples,
    benchmark_fbm,
    benchmark_ridged,
    benchmark_worley,
    benchmark_domain_warp
);
criterion_main!(benches);
