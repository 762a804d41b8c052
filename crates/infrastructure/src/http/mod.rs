//! HTTP infrastructure utilities.
//!
//! This module provides:
//! - Transport options parsing
//! - Payload encoding for request bodies

mod body_builder;
mod options;

pub use body_builder::{BuiltBody, build_body};
pub use options::{BasicAuth, TransportOptions};
