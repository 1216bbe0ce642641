mod common;

use census::prelude::*;
use common::{bench_today, keyed_profiles, named_profiles};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Benchmark aggregation over each representation with identical inputs
fn bench_aggregate_representations(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for count in [100, 1_000, 10_000] {
        let named = named_profiles(count, 42);
        let keyed = keyed_profiles(count, 42);

        group.bench_with_input(BenchmarkId::new("named_field", count), &named, |b, profiles| {
            b.iter(|| black_box(aggregate(profiles, bench_today()).ok()));
        });
        group.bench_with_input(BenchmarkId::new("keyed_mapping", count), &keyed, |b, profiles| {
            b.iter(|| black_box(aggregate(profiles, bench_today()).ok()));
        });
    }

    group.finish();
}

/// Benchmark the full timed runs, generation included
fn bench_full_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("calc_data");
    group.sample_size(20);

    for count in [1_000, 10_000] {
        let config = ComparisonConfig::new().with_profile_count(count).with_seed(7);

        group.bench_with_input(BenchmarkId::new("named_field", count), &config, |b, config| {
            b.iter(|| black_box(calc_data_using_named(config, bench_today()).ok()));
        });
        group.bench_with_input(BenchmarkId::new("keyed_mapping", count), &config, |b, config| {
            b.iter(|| black_box(calc_data_using_keyed(config, bench_today()).ok()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate_representations, bench_full_comparison);
criterion_main!(benches);
