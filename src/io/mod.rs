pub mod error;
pub mod report;

// Re-export commonly used types
pub use error::IoError;
pub use report::{ReportRow, write_report};
