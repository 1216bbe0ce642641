use chrono::NaiveDate;

use super::blood_group::BloodGroup;
use super::coordinate::Coordinate;
use super::error::DomainError;

/// Field-accessor capability shared by every profile representation
///
/// The aggregator reads profiles only through this trait, so one pass
/// serves both named-field records and keyed mappings.
pub trait ProfileFields {
    /// Blood group of the person
    fn blood_group(&self) -> Result<BloodGroup, DomainError>;

    /// Calendar date of birth
    fn birthdate(&self) -> Result<NaiveDate, DomainError>;

    /// Current latitude/longitude
    fn current_location(&self) -> Result<Coordinate, DomainError>;
}

impl<T: ProfileFields + ?Sized> ProfileFields for &T {
    fn blood_group(&self) -> Result<BloodGroup, DomainError> {
        (**self).blood_group()
    }

    fn birthdate(&self) -> Result<NaiveDate, DomainError> {
        (**self).birthdate()
    }

    fn current_location(&self) -> Result<Coordinate, DomainError> {
        (**self).current_location()
    }
}
