use census::prelude::*;
use chrono::NaiveDate;

/// Fixed reference date so fixture ages stay stable across bench runs
pub fn bench_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Generate `count` named-field profiles from a seeded generator
pub fn named_profiles(count: usize, seed: u64) -> Vec<Profile> {
    let mut generator = ProfileGenerator::seeded(seed, bench_today());
    generate_profiles(&mut generator, count).unwrap()
}

/// Same profiles as [`named_profiles`], converted to keyed mappings
pub fn keyed_profiles(count: usize, seed: u64) -> Vec<KeyedProfile> {
    named_profiles(count, seed)
        .into_iter()
        .map(KeyedProfile::from)
        .collect()
}
