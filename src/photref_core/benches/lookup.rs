extern crate criterion;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use photref_core::prelude::*;

pub fn lookup_benchmark(c: &mut Criterion) {
    let mut filter_group = c.benchmark_group("effwav");
    let _ = filter_group.bench_function("known", |b| b.iter(|| effwav(black_box("z'"))));
    let _ = filter_group.bench_function("unknown", |b| b.iter(|| effwav(black_box("z"))));
    filter_group.finish();

    let mut obs_group = c.benchmark_group("observatoryephem");
    let _ = obs_group.bench_function("known", |b| {
        b.iter(|| observatoryephem(black_box("kryoneri")))
    });
    let _ = obs_group.bench_function("unknown", |b| {
        b.iter(|| observatoryephem(black_box("unknown")))
    });
    obs_group.finish();
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
