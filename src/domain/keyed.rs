use std::collections::HashMap;

use chrono::NaiveDate;

use super::blood_group::BloodGroup;
use super::coordinate::Coordinate;
use super::error::DomainError;
use super::fields::ProfileFields;
use super::profile::Profile;

/// Runtime string keys used by the keyed-mapping representation
pub mod keys {
    pub const JOB: &str = "job";
    pub const COMPANY: &str = "company";
    pub const SSN: &str = "ssn";
    pub const RESIDENCE: &str = "residence";
    pub const CURRENT_LOCATION: &str = "current_location";
    pub const BLOOD_GROUP: &str = "blood_group";
    pub const WEBSITE: &str = "website";
    pub const USERNAME: &str = "username";
    pub const NAME: &str = "name";
    pub const SEX: &str = "sex";
    pub const ADDRESS: &str = "address";
    pub const MAIL: &str = "mail";
    pub const BIRTHDATE: &str = "birthdate";
}

/// Dynamically typed value stored under a profile key
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Location(Coordinate),
    List(Vec<String>),
}

/// Keyed-mapping profile: every field lives under a runtime string key
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyedProfile {
    fields: HashMap<String, FieldValue>,
}

impl KeyedProfile {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.fields.insert(key.into(), value)
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: FieldValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    fn require(&self, key: &str) -> Result<&FieldValue, DomainError> {
        self.get(key)
            .ok_or_else(|| DomainError::MissingField(key.to_string()))
    }

    fn mismatch(key: &str, expected: &'static str) -> DomainError {
        DomainError::FieldTypeMismatch {
            field: key.to_string(),
            expected,
        }
    }

    /// Read a text field by key
    pub fn text(&self, key: &str) -> Result<&str, DomainError> {
        match self.require(key)? {
            FieldValue::Text(value) => Ok(value),
            _ => Err(Self::mismatch(key, "text")),
        }
    }

    /// Read a date field by key
    pub fn date(&self, key: &str) -> Result<NaiveDate, DomainError> {
        match self.require(key)? {
            FieldValue::Date(value) => Ok(*value),
            _ => Err(Self::mismatch(key, "date")),
        }
    }

    /// Read a location field by key
    pub fn location(&self, key: &str) -> Result<Coordinate, DomainError> {
        match self.require(key)? {
            FieldValue::Location(value) => Ok(*value),
            _ => Err(Self::mismatch(key, "location")),
        }
    }

    /// Read a list field by key
    pub fn list(&self, key: &str) -> Result<&[String], DomainError> {
        match self.require(key)? {
            FieldValue::List(values) => Ok(values),
            _ => Err(Self::mismatch(key, "list")),
        }
    }
}

impl ProfileFields for KeyedProfile {
    fn blood_group(&self) -> Result<BloodGroup, DomainError> {
        self.text(keys::BLOOD_GROUP)?.parse()
    }

    fn birthdate(&self) -> Result<NaiveDate, DomainError> {
        self.date(keys::BIRTHDATE)
    }

    fn current_location(&self) -> Result<Coordinate, DomainError> {
        self.location(keys::CURRENT_LOCATION)
    }
}

impl From<Profile> for KeyedProfile {
    fn from(profile: Profile) -> Self {
        Self::new()
            .with(keys::JOB, FieldValue::Text(profile.job))
            .with(keys::COMPANY, FieldValue::Text(profile.company))
            .with(keys::SSN, FieldValue::Text(profile.ssn))
            .with(keys::RESIDENCE, FieldValue::Text(profile.residence))
            .with(
                keys::CURRENT_LOCATION,
                FieldValue::Location(profile.current_location),
            )
            .with(
                keys::BLOOD_GROUP,
                FieldValue::Text(profile.blood_group.to_string()),
            )
            .with(keys::WEBSITE, FieldValue::List(profile.website))
            .with(keys::USERNAME, FieldValue::Text(profile.username))
            .with(keys::NAME, FieldValue::Text(profile.name))
            .with(keys::SEX, FieldValue::Text(profile.sex.to_string()))
            .with(keys::ADDRESS, FieldValue::Text(profile.address))
            .with(keys::MAIL, FieldValue::Text(profile.mail))
            .with(keys::BIRTHDATE, FieldValue::Date(profile.birthdate))
    }
}

impl TryFrom<KeyedProfile> for Profile {
    type Error = DomainError;

    fn try_from(keyed: KeyedProfile) -> Result<Self, Self::Error> {
        Ok(Profile {
            job: keyed.text(keys::JOB)?.to_string(),
            company: keyed.text(keys::COMPANY)?.to_string(),
            ssn: keyed.text(keys::SSN)?.to_string(),
            residence: keyed.text(keys::RESIDENCE)?.to_string(),
            current_location: keyed.current_location()?,
            blood_group: keyed.blood_group()?,
            website: keyed.list(keys::WEBSITE)?.to_vec(),
            username: keyed.text(keys::USERNAME)?.to_string(),
            name: keyed.text(keys::NAME)?.to_string(),
            sex: keyed.text(keys::SEX)?.parse()?,
            address: keyed.text(keys::ADDRESS)?.to_string(),
            mail: keyed.text(keys::MAIL)?.to_string(),
            birthdate: keyed.birthdate()?,
        })
    }
}
