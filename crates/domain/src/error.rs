//! Domain error types

use thiserror::Error;

/// Validation errors that abort a test before any request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The definition has no `method` field.
    #[error("No method field")]
    MissingMethod,

    /// The `method` field is not one of the supported verbs.
    #[error("Unknown Method: {0}")]
    UnknownMethod(String),

    /// The `operator` field is not one of the supported operators.
    #[error("Unknown Operator: {0}")]
    UnknownOperator(String),

    /// The definition has no `url` field.
    #[error("No url field")]
    MissingUrl,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
