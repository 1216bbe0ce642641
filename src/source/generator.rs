use chrono::{Days, Months, NaiveDate};
use rand::rngs::{OsRng, StdRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::error::SourceError;
use super::traits::ProfileSource;
use super::vocabulary::{EN_GB, EN_US, Vocabulary};
use crate::domain::{BloodGroup, Coordinate, Profile, Sex};

/// Oldest age a generated person can have
pub const MAX_AGE_YEARS: u32 = 115;

/// Locale governing names, addresses and identifier formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
}

impl Locale {
    fn vocabulary(&self) -> &'static Vocabulary {
        match self {
            Self::EnUs => &EN_US,
            Self::EnGb => &EN_GB,
        }
    }
}

/// Random profile generator
///
/// Birthdates fall uniformly within [`MAX_AGE_YEARS`] before the reference
/// date; blood group, sex and location are uniform over their domains.
/// Seeding with [`ProfileGenerator::seeded`] makes the output reproducible.
pub struct ProfileGenerator<R = StdRng> {
    rng: R,
    today: NaiveDate,
    locale: Locale,
}

impl ProfileGenerator<StdRng> {
    /// Deterministic generator for a fixed seed
    pub fn seeded(seed: u64, today: NaiveDate) -> Self {
        Self::new(StdRng::seed_from_u64(seed), today)
    }

    /// Generator seeded from operating system entropy
    pub fn from_entropy(today: NaiveDate) -> Result<Self, SourceError> {
        Ok(Self::new(StdRng::from_rng(OsRng)?, today))
    }
}

impl<R: Rng> ProfileGenerator<R> {
    pub fn new(rng: R, today: NaiveDate) -> Self {
        Self {
            rng,
            today,
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Reference date birthdates are drawn relative to
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn pick(&mut self, items: &'static [&'static str]) -> &'static str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn birthdate(&mut self) -> Result<NaiveDate, SourceError> {
        let today = self.today;
        let out_of_range = move || SourceError::DateOutOfRange(today);
        let earliest = self
            .today
            .checked_sub_months(Months::new(12 * MAX_AGE_YEARS))
            .ok_or_else(out_of_range)?;
        let span = (self.today - earliest).num_days().unsigned_abs();
        let offset = self.rng.gen_range(0..=span);

        self.today
            .checked_sub_days(Days::new(offset))
            .ok_or_else(out_of_range)
    }

    fn coordinate(&mut self) -> Coordinate {
        // six decimal places, about 10cm of precision
        let round = |value: f64| (value * 1e6).round() / 1e6;
        Coordinate::new(
            round(self.rng.gen_range(-90.0..=90.0)),
            round(self.rng.gen_range(-180.0..=180.0)),
        )
    }

    fn national_id(&mut self) -> String {
        match self.locale {
            Locale::EnUs => {
                let mut area = self.rng.gen_range(1..=899);
                if area == 666 {
                    area = 665;
                }
                let group = self.rng.gen_range(1..=99);
                let serial = self.rng.gen_range(1..=9999);
                format!("{area:03}-{group:02}-{serial:04}")
            }
            Locale::EnGb => {
                const PREFIX: &[u8] = b"ABCEGHJKLMNPRSTWXYZ";
                const SUFFIX: &[u8] = b"ABCD";
                let first = PREFIX[self.rng.gen_range(0..PREFIX.len())] as char;
                let second = PREFIX[self.rng.gen_range(0..PREFIX.len())] as char;
                let number = self.rng.gen_range(0..1_000_000);
                let suffix = SUFFIX[self.rng.gen_range(0..SUFFIX.len())] as char;
                format!("{first}{second}{number:06}{suffix}")
            }
        }
    }

    fn address(&mut self) -> String {
        let vocabulary = self.locale.vocabulary();
        let number = self.rng.gen_range(1..=9999);
        let street = self.pick(vocabulary.last_names);
        let suffix = self.pick(vocabulary.street_suffixes);
        let city = self.pick(vocabulary.cities);
        let region = self.pick(vocabulary.regions);

        match self.locale {
            Locale::EnUs => {
                let zip = self.rng.gen_range(501..=99950);
                format!("{number} {street} {suffix}\n{city}, {region} {zip:05}")
            }
            Locale::EnGb => {
                let district = self.rng.gen_range(1..=99);
                let sector = self.rng.gen_range(0..=9);
                let unit: String = (0..2)
                    .map(|_| self.rng.gen_range(b'A'..=b'Z') as char)
                    .collect();
                format!("{number} {street} {suffix}\n{city}\n{region}{district} {sector}{unit}")
            }
        }
    }

    fn company(&mut self) -> String {
        let vocabulary = self.locale.vocabulary();
        if self.rng.gen_bool(0.5) {
            let name = self.pick(vocabulary.last_names);
            let suffix = self.pick(vocabulary.company_suffixes);
            format!("{name} {suffix}")
        } else {
            let first = self.pick(vocabulary.last_names);
            let second = self.pick(vocabulary.last_names);
            let third = self.pick(vocabulary.last_names);
            format!("{first}, {second} and {third}")
        }
    }

    fn websites(&mut self) -> Vec<String> {
        let vocabulary = self.locale.vocabulary();
        let count = self.rng.gen_range(1..=4);
        (0..count)
            .map(|_| {
                let domain = self.pick(vocabulary.last_names).to_lowercase();
                let tld = self.pick(vocabulary.tlds);
                format!("https://www.{domain}.{tld}/")
            })
            .collect()
    }
}

impl<R: Rng> ProfileSource for ProfileGenerator<R> {
    fn generate_profile(&mut self) -> Result<Profile, SourceError> {
        let vocabulary = self.locale.vocabulary();

        let sex = if self.rng.gen_bool(0.5) {
            Sex::Male
        } else {
            Sex::Female
        };
        let first = match sex {
            Sex::Male => self.pick(vocabulary.male_first_names),
            Sex::Female => self.pick(vocabulary.female_first_names),
        };
        let last = self.pick(vocabulary.last_names);

        let mut username = format!("{}{}", first.to_lowercase(), last.to_lowercase());
        if self.rng.gen_bool(0.5) {
            username.push_str(&format!("{:02}", self.rng.gen_range(0..100)));
        }
        let domain = self.pick(vocabulary.free_email_domains);
        let mail = format!("{username}@{domain}");

        let blood_group = BloodGroup::ALL[self.rng.gen_range(0..BloodGroup::ALL.len())];

        Ok(Profile {
            job: self.pick(vocabulary.jobs).to_string(),
            company: self.company(),
            ssn: self.national_id(),
            residence: self.address(),
            current_location: self.coordinate(),
            blood_group,
            website: self.websites(),
            username,
            name: format!("{first} {last}"),
            sex,
            address: self.address(),
            mail,
            birthdate: self.birthdate()?,
        })
    }
}
