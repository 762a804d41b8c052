//! Definition repository port
//!
//! Defines the interface for reading test definitions.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use apicheck_domain::TestDefinition;

use super::FileSystemError;

/// Errors that can occur while loading definitions.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    /// The definitions file does not exist.
    #[error("Definitions file not found: {0}")]
    NotFound(PathBuf),

    /// Reading the file failed.
    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),

    /// The file is not a list of test definitions.
    #[error("Invalid definitions in {path}: {message}")]
    Invalid {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// Repository trait for test definitions.
#[async_trait]
pub trait DefinitionRepository: Send + Sync {
    /// Loads the ordered list of definitions stored at `path`.
    ///
    /// # Errors
    /// Returns `DefinitionError::NotFound` if the file doesn't exist and
    /// `DefinitionError::Invalid` if it doesn't parse.
    async fn load(&self, path: &Path) -> Result<Vec<TestDefinition>, DefinitionError>;
}
