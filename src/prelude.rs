//! Prelude module for convenient imports
//!
//! Import everything you need with: `use census::prelude::*;`

// Domain types
pub use crate::domain::{
    BloodGroup, BloodTypeCount, Coordinate, DomainError, FieldValue, KeyedProfile, OldestPerson,
    Profile, ProfileFields, Sex, Summary, keys,
};

// Source types
pub use crate::source::{
    FixtureSource, Locale, ProfileGenerator, ProfileSource, SourceError, generate_keyed_profiles,
    generate_profiles,
};

// Engine types
pub use crate::engine::{EngineError, aggregate};

// Timing types
pub use crate::timing::{ScopedTimer, Timed, measure, timed};

// Comparison types
pub use crate::comparison::{
    ComparisonConfig, ComparisonError, ComparisonReport, Representation, calc_data_using_keyed,
    calc_data_using_named, run_comparison, run_comparison_at,
};

// IO types
pub use crate::io::{IoError, ReportRow, write_report};

// App types
pub use crate::app::{AppError, CliApp, Writers};
