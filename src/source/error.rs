use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while producing synthetic profiles
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to seed random source: {0}")]
    Entropy(#[from] rand::Error),

    #[error("Profile source exhausted after {generated} profiles")]
    Exhausted { generated: usize },

    #[error("Birthdate range out of bounds for reference date {0}")]
    DateOutOfRange(NaiveDate),
}
