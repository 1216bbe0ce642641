use thiserror::Error;

/// Domain-level errors raised when a profile field cannot be read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Field {field} is not a {expected}")]
    FieldTypeMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("Invalid blood group: {0}")]
    InvalidBloodGroup(String),

    #[error("Invalid sex: {0}")]
    InvalidSex(String),
}
