//! File-backed persistence adapters.

mod definition_repository;
mod file_system;

pub use definition_repository::FileDefinitionRepository;
pub use file_system::TokioFileSystem;
