pub mod aggregator;
pub mod error;

// Re-export commonly used types
pub use aggregator::{DAYS_PER_YEAR, age_in_days, aggregate, days_to_years};
pub use error::EngineError;
