use census::prelude::*;
use chrono::NaiveDate;

/// Representation comparison hotpath profiling
///
/// Profiles generation and aggregation for both profile representations
/// over the same seeded workload.
///
/// Run with: cargo run --release --bin hotpath_comparison --features profiling
#[hotpath::main]
fn main() {
    println!("=== Representation Comparison Hotpath Profile ===");
    println!("Workload: 100K seeded profiles per representation");
    println!();

    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let num_profiles = 100_000;

    let named = generate_named(num_profiles, today);
    let keyed = convert_to_keyed(&named);

    aggregate_named(&named, today);
    aggregate_keyed(&keyed, today);

    println!();
    println!("Profiling complete. Results above show function-level breakdown.");
}

#[hotpath::measure]
fn generate_named(count: usize, today: NaiveDate) -> Vec<Profile> {
    let mut generator = ProfileGenerator::seeded(42, today);
    match generate_profiles(&mut generator, count) {
        Ok(profiles) => profiles,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            Vec::new()
        }
    }
}

#[hotpath::measure]
fn convert_to_keyed(profiles: &[Profile]) -> Vec<KeyedProfile> {
    profiles.iter().cloned().map(KeyedProfile::from).collect()
}

#[hotpath::measure]
fn aggregate_named(profiles: &[Profile], today: NaiveDate) {
    report("named-field", aggregate(profiles, today).map(|s| s.average_age));
}

#[hotpath::measure]
fn aggregate_keyed(profiles: &[KeyedProfile], today: NaiveDate) {
    report("keyed-mapping", aggregate(profiles, today).map(|s| s.average_age));
}

fn report(label: &str, result: Result<i64, EngineError>) {
    match result {
        Ok(average_age) => println!("{label}: average age {average_age}"),
        Err(e) => eprintln!("{label}: {e}"),
    }
}
