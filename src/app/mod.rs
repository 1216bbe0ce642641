pub mod cli;
pub mod error;

// Re-export commonly used types
pub use cli::{CliApp, CliRunner, Writers};
pub use error::AppError;
