//! apicheck Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod http;
pub mod persistence;
pub mod reporting;
pub mod serialization;

pub use adapters::{DEFAULT_USER_AGENT, ReqwestTransport, SystemClock};
pub use http::{BasicAuth, BuiltBody, TransportOptions, build_body};
pub use persistence::{FileDefinitionRepository, TokioFileSystem};
pub use reporting::ConsoleReporter;
pub use serialization::{
    DefinitionFormat, SerializationError, from_json, from_yaml, to_json_stable,
};
