pub mod timer;

// Re-export commonly used types
pub use timer::{ScopedTimer, Timed, format_run_time, measure, timed};
