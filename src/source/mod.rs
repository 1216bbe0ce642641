pub mod error;
pub mod fixture;
pub mod generator;
pub mod traits;
mod vocabulary;

// Re-export commonly used types
pub use error::SourceError;
pub use fixture::FixtureSource;
pub use generator::{Locale, MAX_AGE_YEARS, ProfileGenerator};
pub use traits::{ProfileSource, generate_keyed_profiles, generate_profiles};
