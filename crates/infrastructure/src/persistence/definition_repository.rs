//! File-based definition repository implementation.
//!
//! A definitions file holds an ordered array of test definitions:
//! ```text
//! [
//!   { "title": "get user", "method": "get", "url": "http://localhost/users/1",
//!     "expect": { "id": 1 } }
//! ]
//! ```
//! Files ending in `.yaml` or `.yml` hold the same sequence in YAML. Only a
//! file that is not a sequence is rejected; a malformed entry is kept and
//! aborts when its turn comes.

use std::path::Path;

use apicheck_application::ports::{DefinitionError, DefinitionRepository, FileSystem};
use apicheck_domain::TestDefinition;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::serialization::DefinitionFormat;

/// Definition repository reading through a [`FileSystem`].
#[derive(Debug, Clone)]
pub struct FileDefinitionRepository<F> {
    fs: F,
}

impl<F: FileSystem> FileDefinitionRepository<F> {
    /// Creates a new file-based definition repository.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }
}

#[async_trait]
impl<F: FileSystem> DefinitionRepository for FileDefinitionRepository<F> {
    async fn load(&self, path: &Path) -> Result<Vec<TestDefinition>, DefinitionError> {
        if !self.fs.exists(path).await {
            return Err(DefinitionError::NotFound(path.to_path_buf()));
        }

        let content = self.fs.read_file_string(path).await?;
        let format = DefinitionFormat::from_path(path);
        debug!(path = %path.display(), ?format, bytes = content.len(), "parsing definitions");

        let entries: Vec<Value> = format
            .parse(&content)
            .map_err(|e| DefinitionError::Invalid {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(entries.into_iter().map(TestDefinition::from_entry).collect())
    }
}
