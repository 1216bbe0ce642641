pub mod blood_group;
pub mod coordinate;
pub mod error;
pub mod fields;
pub mod keyed;
pub mod profile;
pub mod summary;

// Re-export commonly used types
pub use blood_group::BloodGroup;
pub use coordinate::Coordinate;
pub use error::DomainError;
pub use fields::ProfileFields;
pub use keyed::{FieldValue, KeyedProfile, keys};
pub use profile::{Profile, Sex};
pub use summary::{BloodTypeCount, OldestPerson, Summary};
