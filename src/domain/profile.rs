use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use super::blood_group::BloodGroup;
use super::coordinate::Coordinate;
use super::error::DomainError;
use super::fields::ProfileFields;

/// Recorded sex of a synthetic person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            other => Err(DomainError::InvalidSex(other.to_string())),
        }
    }
}

/// Named-field profile record
///
/// Fields are fixed at compile time. Only `blood_group`, `birthdate` and
/// `current_location` take part in aggregation; the rest complete the
/// demographic schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub job: String,
    pub company: String,
    pub ssn: String,
    pub residence: String,
    pub current_location: Coordinate,
    pub blood_group: BloodGroup,
    pub website: Vec<String>,
    pub username: String,
    pub name: String,
    pub sex: Sex,
    pub address: String,
    pub mail: String,
    pub birthdate: NaiveDate,
}

impl ProfileFields for Profile {
    fn blood_group(&self) -> Result<BloodGroup, DomainError> {
        Ok(self.blood_group)
    }

    fn birthdate(&self) -> Result<NaiveDate, DomainError> {
        Ok(self.birthdate)
    }

    fn current_location(&self) -> Result<Coordinate, DomainError> {
        Ok(self.current_location)
    }
}

#[cfg(test)]
pub(crate) fn sample_profile(
    name: &str,
    blood_group: BloodGroup,
    birthdate: NaiveDate,
    current_location: Coordinate,
) -> Profile {
    Profile {
        job: "Surveyor".to_string(),
        company: "Acme Ltd".to_string(),
        ssn: "123-45-6789".to_string(),
        residence: "1 Main Street\nSpringfield, IL 62701".to_string(),
        current_location,
        blood_group,
        website: vec!["https://www.example.com/".to_string()],
        username: name.to_lowercase().replace(' ', ""),
        name: name.to_string(),
        sex: Sex::Female,
        address: "2 Side Road\nSpringfield, IL 62702".to_string(),
        mail: "someone@example.com".to_string(),
        birthdate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accessors_return_named_fields() {
        let profile = sample_profile(
            "Ada Byron",
            BloodGroup::BNegative,
            date(1815, 12, 10),
            Coordinate::new(51.5, -0.12),
        );

        assert_eq!(profile.blood_group().unwrap(), BloodGroup::BNegative);
        assert_eq!(ProfileFields::birthdate(&profile).unwrap(), date(1815, 12, 10));
        assert_eq!(
            ProfileFields::current_location(&profile).unwrap(),
            Coordinate::new(51.5, -0.12)
        );
    }

    #[test]
    fn accessors_work_through_references() {
        let profile = sample_profile(
            "Ada Byron",
            BloodGroup::OPositive,
            date(1990, 1, 1),
            Coordinate::default(),
        );
        let by_ref = &profile;

        assert_eq!(by_ref.blood_group().unwrap(), BloodGroup::OPositive);
    }

    #[test]
    fn sex_round_trips_through_text() {
        assert_eq!("M".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(Sex::Female.to_string(), "F");
        assert_eq!(
            "X".parse::<Sex>(),
            Err(DomainError::InvalidSex("X".to_string()))
        );
    }

    #[test]
    fn profile_can_be_cloned() {
        let profile = sample_profile(
            "Ada Byron",
            BloodGroup::AbPositive,
            date(1990, 1, 1),
            Coordinate::new(1.0, 2.0),
        );
        assert_eq!(profile.clone(), profile);
    }
}
