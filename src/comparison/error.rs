use thiserror::Error;

use crate::engine::EngineError;
use crate::source::SourceError;

/// Errors from one timed generate-then-aggregate run
#[derive(Error, Debug)]
pub enum ComparisonError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}
