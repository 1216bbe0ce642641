mod common;

use census::prelude::*;
use common::{bench_today, named_profiles};
use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Benchmark seeded profile generation per locale
fn bench_generate_profiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_profiles");

    for locale in [Locale::EnUs, Locale::EnGb] {
        for count in [100, 1_000] {
            group.bench_with_input(
                BenchmarkId::new(format!("{locale:?}"), count),
                &count,
                |b, &count| {
                    b.iter_batched(
                        || ProfileGenerator::seeded(42, bench_today()).with_locale(locale),
                        |mut generator| black_box(generate_profiles(&mut generator, count).ok()),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

/// Benchmark conversion from named-field to keyed-mapping profiles
fn bench_keyed_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed_conversion");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || named_profiles(count, 42),
                |profiles| {
                    let keyed: Vec<KeyedProfile> =
                        profiles.into_iter().map(KeyedProfile::from).collect();
                    black_box(keyed)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_profiles, bench_keyed_conversion);
criterion_main!(benches);
