use std::io;
use thiserror::Error;

use crate::comparison::ComparisonError;
use crate::io::IoError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Report error: {0}")]
    Report(#[from] IoError),

    #[error("Comparison error: {0}")]
    Comparison(#[from] ComparisonError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
