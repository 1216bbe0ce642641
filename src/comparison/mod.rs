pub mod config;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use config::{ComparisonConfig, DEFAULT_PROFILE_COUNT, Representation};
pub use error::ComparisonError;
pub use runner::{
    ComparisonReport, calc_data_using_keyed, calc_data_using_named, run_comparison,
    run_comparison_at, summarize_keyed, summarize_named,
};
