//! Load definitions use case.

use std::path::Path;

use apicheck_domain::TestDefinition;
use tracing::{debug, info};

use crate::ports::{DefinitionError, DefinitionRepository};

/// Use case for reading the definitions of a run.
pub struct LoadDefinitions<R: DefinitionRepository> {
    repository: R,
}

impl<R: DefinitionRepository> LoadDefinitions<R> {
    /// Creates a new `LoadDefinitions` use case.
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Loads the definitions stored at `path`, preserving their order.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or malformed.
    pub async fn execute(&self, path: &Path) -> Result<Vec<TestDefinition>, DefinitionError> {
        debug!(path = %path.display(), "loading definitions");
        let definitions = self.repository.load(path).await?;
        info!(path = %path.display(), count = definitions.len(), "definitions loaded");
        Ok(definitions)
    }
}
