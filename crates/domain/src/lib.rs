//! apicheck Domain - Core business types
//!
//! This crate defines the domain model for the apicheck request assertion
//! runner. All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod request;
pub mod response;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use request::{HttpMethod, TransportCall};
pub use response::{ResponseSpec, ResponseType};
pub use testing::{
    Comparable, ComparisonOperator, Mismatch, Outcome, OutcomeKind, RunSummary, Scalar, Success,
    TestDefinition, ValidatedTest,
};
