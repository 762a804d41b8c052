//! Serialization for definition files and report output.
//!
//! - Definition files are JSON, or YAML when the extension says so
//! - Report payloads are printed as sorted, 2-space indented JSON

mod json;
mod yaml;

use std::path::Path;

pub use json::{SerializationError, from_json, to_json_stable};
pub use yaml::from_yaml;

/// On-disk format of a definitions file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    /// JSON array.
    Json,
    /// YAML sequence.
    Yaml,
}

impl DefinitionFormat {
    /// Picks the format from the file extension; anything but `.yaml` or
    /// `.yml` is read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    /// Parses `content` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if the content does not parse into `T`.
    pub fn parse<T: serde::de::DeserializeOwned>(
        self,
        content: &str,
    ) -> Result<T, SerializationError> {
        match self {
            Self::Json => from_json(content),
            Self::Yaml => from_yaml(content),
        }
    }
}
