use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::source::{Locale, ProfileGenerator, SourceError};

/// Number of profiles generated per run unless overridden
pub const DEFAULT_PROFILE_COUNT: usize = 10_000;

/// How profiles are held while being aggregated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Representation {
    /// Fields accessed by compile-time names
    NamedField,
    /// Fields accessed by runtime string keys
    KeyedMapping,
}

impl Representation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NamedField => "named-field",
            Self::KeyedMapping => "keyed-mapping",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings shared by both timed runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonConfig {
    profile_count: usize,
    seed: Option<u64>,
    locale: Locale,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            profile_count: DEFAULT_PROFILE_COUNT,
            seed: None,
            locale: Locale::default(),
        }
    }
}

impl ComparisonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many profiles each run generates (defaults to 10,000)
    ///
    /// Zero is accepted here; aggregation then fails with a division-by-zero
    /// error.
    pub fn with_profile_count(mut self, profile_count: usize) -> Self {
        self.profile_count = profile_count;
        self
    }

    /// Seed both runs identically so they see the same profiles
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn profile_count(&self) -> usize {
        self.profile_count
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Fresh generator for one run
    pub fn generator(&self, today: NaiveDate) -> Result<ProfileGenerator, SourceError> {
        let generator = match self.seed {
            Some(seed) => ProfileGenerator::seeded(seed, today),
            None => ProfileGenerator::from_entropy(today)?,
        };
        Ok(generator.with_locale(self.locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ProfileSource, generate_profiles};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn defaults_match_reference_run() {
        let config = ComparisonConfig::new();

        assert_eq!(config.profile_count(), 10_000);
        assert_eq!(config.seed(), None);
        assert_eq!(config.locale(), Locale::EnUs);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = ComparisonConfig::new()
            .with_profile_count(25)
            .with_seed(99)
            .with_locale(Locale::EnGb);

        assert_eq!(config.profile_count(), 25);
        assert_eq!(config.seed(), Some(99));
        assert_eq!(config.locale(), Locale::EnGb);
    }

    #[test]
    fn seeded_generators_are_identical() {
        let config = ComparisonConfig::new().with_seed(5);
        let mut a = config.generator(today()).unwrap();
        let mut b = config.generator(today()).unwrap();

        assert_eq!(
            generate_profiles(&mut a, 10).unwrap(),
            generate_profiles(&mut b, 10).unwrap()
        );
    }

    #[test]
    fn generator_uses_configured_locale() {
        let config = ComparisonConfig::new().with_locale(Locale::EnGb);
        let mut generator = config.generator(today()).unwrap();

        assert_eq!(generator.locale(), Locale::EnGb);
        assert!(generator.generate_profile().is_ok());
    }

    #[test]
    fn representation_display() {
        assert_eq!(Representation::NamedField.to_string(), "named-field");
        assert_eq!(Representation::KeyedMapping.to_string(), "keyed-mapping");
    }
}
