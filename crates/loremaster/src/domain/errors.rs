//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn missing_field<T: AsRef<str>>(field: T) -> Self {
        Self::Validation(format!("missing required field: {}", field.as_ref()))
    }
}
