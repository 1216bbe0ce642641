use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use super::config::{ComparisonConfig, Representation};
use super::error::ComparisonError;
use crate::domain::{KeyedProfile, Profile, Summary, keys};
use crate::engine::aggregate;
use crate::source::{ProfileSource, generate_keyed_profiles, generate_profiles};
use crate::timing::{Timed, measure};

/// Generate `count` named-field profiles from `source` and aggregate them
pub fn summarize_named<S>(
    source: &mut S,
    count: usize,
    today: NaiveDate,
) -> Result<Summary<Profile>, ComparisonError>
where
    S: ProfileSource + ?Sized,
{
    let profiles = generate_profiles(source, count)?;
    Ok(aggregate(&profiles, today)?)
}

/// Generate `count` keyed-mapping profiles from `source` and aggregate them
pub fn summarize_keyed<S>(
    source: &mut S,
    count: usize,
    today: NaiveDate,
) -> Result<Summary<KeyedProfile>, ComparisonError>
where
    S: ProfileSource + ?Sized,
{
    let profiles = generate_keyed_profiles(source, count)?;
    Ok(aggregate(&profiles, today)?)
}

/// Timed run over named-field profiles
pub fn calc_data_using_named(
    config: &ComparisonConfig,
    today: NaiveDate,
) -> Result<Timed<Summary<Profile>>, ComparisonError> {
    measure("calc_data_using_named", || -> Result<_, ComparisonError> {
        let mut generator = config.generator(today)?;
        summarize_named(&mut generator, config.profile_count(), today)
    })
    .transpose()
}

/// Timed run over keyed-mapping profiles
///
/// Profiles are generated in named-field form and converted inside the timed
/// region, so this run's elapsed time includes one `KeyedProfile::from` per
/// profile on top of keyed field access. The named run pays no such cost.
pub fn calc_data_using_keyed(
    config: &ComparisonConfig,
    today: NaiveDate,
) -> Result<Timed<Summary<KeyedProfile>>, ComparisonError> {
    measure("calc_data_using_keyed", || -> Result<_, ComparisonError> {
        let mut generator = config.generator(today)?;
        summarize_keyed(&mut generator, config.profile_count(), today)
    })
    .transpose()
}

/// Outcome of running both representations
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub profile_count: usize,
    pub today: NaiveDate,
    pub named: Timed<Summary<Profile>>,
    pub keyed: Timed<Summary<KeyedProfile>>,
}

impl ComparisonReport {
    /// Whether both runs produced the same statistics
    pub fn statistics_match(&self) -> bool {
        self.named.value.same_statistics(&self.keyed.value)
    }

    /// Representation that finished first
    pub fn faster(&self) -> Representation {
        if self.keyed.elapsed < self.named.elapsed {
            Representation::KeyedMapping
        } else {
            Representation::NamedField
        }
    }

    /// Name of the oldest person found by the given run
    pub fn oldest_name(&self, representation: Representation) -> Option<String> {
        match representation {
            Representation::NamedField => self
                .named
                .value
                .oldest_person
                .as_ref()
                .map(|oldest| oldest.profile.name.clone()),
            Representation::KeyedMapping => self
                .keyed
                .value
                .oldest_person
                .as_ref()
                .and_then(|oldest| oldest.profile.text(keys::NAME).ok())
                .map(str::to_string),
        }
    }
}

/// Run both representations against the current local date
pub fn run_comparison(config: &ComparisonConfig) -> Result<ComparisonReport, ComparisonError> {
    run_comparison_at(config, Local::now().date_naive())
}

/// Run both representations against a fixed reference date
pub fn run_comparison_at(
    config: &ComparisonConfig,
    today: NaiveDate,
) -> Result<ComparisonReport, ComparisonError> {
    let named = calc_data_using_named(config, today)?;
    let keyed = calc_data_using_keyed(config, today)?;

    let report = ComparisonReport {
        profile_count: config.profile_count(),
        today,
        named,
        keyed,
    };

    if config.seed().is_some() && !report.statistics_match() {
        warn!(
            seed = ?config.seed(),
            "Seeded runs produced different statistics across representations"
        );
    }

    info!(
        profile_count = report.profile_count,
        named_secs = report.named.elapsed_secs(),
        keyed_secs = report.keyed.elapsed_secs(),
        faster = %report.faster(),
        "Comparison complete"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;
    use crate::domain::profile::sample_profile;
    use crate::domain::{BloodGroup, Coordinate};
    use crate::engine::EngineError;
    use crate::source::{FixtureSource, SourceError};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn fixtures() -> Vec<Profile> {
        [
            (BloodGroup::OPositive, 400),
            (BloodGroup::APositive, 800),
            (BloodGroup::OPositive, 36_500),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (group, days))| {
            sample_profile(
                &format!("Person {i}"),
                group,
                today().checked_sub_days(Days::new(days)).unwrap(),
                Coordinate::new(i as f64, i as f64 * 2.0),
            )
        })
        .collect()
    }

    #[test]
    fn summarize_named_and_keyed_agree_on_fixtures() {
        let named =
            summarize_named(&mut FixtureSource::new(fixtures()), 3, today()).unwrap();
        let keyed =
            summarize_keyed(&mut FixtureSource::new(fixtures()), 3, today()).unwrap();

        assert!(named.same_statistics(&keyed));
        assert_eq!(named.average_age, 34);
        assert_eq!(named.oldest_age_years(), Some(100));
    }

    #[test]
    fn source_failure_propagates() {
        let err = summarize_named(&mut FixtureSource::new(fixtures()), 4, today()).unwrap_err();
        assert!(matches!(
            err,
            ComparisonError::Source(SourceError::Exhausted { generated: 3 })
        ));
    }

    #[test]
    fn zero_profiles_is_division_by_zero() {
        let config = ComparisonConfig::new().with_profile_count(0).with_seed(1);

        let err = calc_data_using_named(&config, today()).unwrap_err();
        assert!(matches!(
            err,
            ComparisonError::Engine(EngineError::DivisionByZero)
        ));
        let err = calc_data_using_keyed(&config, today()).unwrap_err();
        assert!(matches!(
            err,
            ComparisonError::Engine(EngineError::DivisionByZero)
        ));
    }

    #[test]
    fn seeded_comparison_statistics_match() {
        let config = ComparisonConfig::new().with_profile_count(500).with_seed(42);
        let report = run_comparison_at(&config, today()).unwrap();

        assert_eq!(report.profile_count, 500);
        assert_eq!(report.today, today());
        assert!(report.statistics_match());
        assert_eq!(
            report.oldest_name(Representation::NamedField),
            report.oldest_name(Representation::KeyedMapping)
        );
    }

    #[test]
    fn unseeded_comparison_completes() {
        let config = ComparisonConfig::new().with_profile_count(50);
        let report = run_comparison(&config).unwrap();

        assert!(report.named.value.largest_blood_type.count >= 1);
        assert!(report.keyed.value.largest_blood_type.count <= 50);
    }

    #[test]
    fn faster_picks_smaller_elapsed() {
        let config = ComparisonConfig::new().with_profile_count(10).with_seed(3);
        let mut report = run_comparison_at(&config, today()).unwrap();

        report.named.elapsed = std::time::Duration::from_millis(10);
        report.keyed.elapsed = std::time::Duration::from_millis(5);
        assert_eq!(report.faster(), Representation::KeyedMapping);

        report.keyed.elapsed = std::time::Duration::from_millis(20);
        assert_eq!(report.faster(), Representation::NamedField);
    }
}
