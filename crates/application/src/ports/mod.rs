//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod definition_repository;
mod file_system;
mod http_transport;
mod reporter;

pub use clock::Clock;
pub use definition_repository::{DefinitionError, DefinitionRepository};
pub use file_system::{FileSystem, FileSystemError};
pub use http_transport::{HttpTransport, TransportError};
pub use reporter::{ReportError, Reporter};
