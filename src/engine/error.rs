use thiserror::Error;

use crate::domain::DomainError;

/// Engine-level errors for profile aggregation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Division by zero: cannot aggregate an empty profile collection")]
    DivisionByZero,

    #[error("Field error: {0}")]
    Field(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            EngineError::DivisionByZero.to_string(),
            "Division by zero: cannot aggregate an empty profile collection"
        );
        assert_eq!(
            EngineError::Field(DomainError::MissingField("sex".to_string())).to_string(),
            "Field error: Missing field: sex"
        );
    }

    #[test]
    fn domain_error_conversion() {
        let domain_err = DomainError::InvalidBloodGroup("Q".to_string());
        let engine_err = EngineError::from(domain_err);

        match engine_err {
            EngineError::Field(DomainError::InvalidBloodGroup(value)) => assert_eq!(value, "Q"),
            _ => panic!("Expected Field error variant"),
        }
    }
}
