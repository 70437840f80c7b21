//! Benchmarks for the wash-time pipeline stages.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fuzzy_wash::defuzzify::Defuzzifier;
use fuzzy_wash::rules::{infer, StandardRules};
use fuzzy_wash::terms::{DIRT_REFERENCE, GREASE, WASH_TIME};
use fuzzy_wash::WashController;

fn fuzzify_benchmark(c: &mut Criterion) {
    c.bench_function("fuzzify_dirt_and_grease", |b| {
        b.iter(|| {
            let d = DIRT_REFERENCE.fuzzify(black_box(37.5));
            let g = GREASE.fuzzify(black_box(12.0));
            black_box((d, g))
        });
    });
}

fn inference_benchmark(c: &mut Criterion) {
    let dirt = DIRT_REFERENCE.fuzzify(60.0);
    let grease = GREASE.fuzzify(35.0);
    c.bench_function("max_min_inference", |b| {
        b.iter(|| black_box(infer(&StandardRules, black_box(&dirt), black_box(&grease))));
    });
}

fn defuzzify_benchmark(c: &mut Criterion) {
    let activations = infer(&StandardRules, &DIRT_REFERENCE.fuzzify(60.0), &GREASE.fuzzify(35.0));
    let mut group = c.benchmark_group("centroid");
    for samples in [100usize, 1_000, 10_000] {
        let d = Defuzzifier::with_samples(samples).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(samples), &d, |b, d| {
            b.iter(|| black_box(d.centroid(black_box(&activations), &WASH_TIME)));
        });
    }
    group.finish();
}

fn controller_benchmark(c: &mut Criterion) {
    let controller = WashController::new();
    c.bench_function("compute_end_to_end", |b| {
        b.iter(|| black_box(controller.compute(black_box(80.0), black_box(40.0))));
    });
}

criterion_group!(
    benches,
    fuzzify_benchmark,
    inference_benchmark,
    defuzzify_benchmark,
    controller_benchmark
);
criterion_main!(benches);
