//! Application error types

use thiserror::Error;

use crate::ports::{DefinitionError, ReportError, TransportError};

/// Run-level errors. Per-test failures are outcomes, never errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The definitions could not be loaded.
    #[error(transparent)]
    Definitions(#[from] DefinitionError),

    /// The transport could not be set up.
    #[error("failed to initialize HTTP transport: {0}")]
    Transport(#[from] TransportError),

    /// The report could not be written.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages_pass_through() {
        let error: ApplicationError =
            DefinitionError::NotFound(PathBuf::from("parameters.json")).into();
        assert_eq!(error.to_string(), "Definitions file not found: parameters.json");

        let error: ApplicationError = TransportError::Other("no tls".to_string()).into();
        assert_eq!(error.to_string(), "failed to initialize HTTP transport: no tls");
    }
}
