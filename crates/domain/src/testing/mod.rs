//! Test definitions and their evaluation.
//!
//! A definition is validated once, turned into a positional transport call,
//! and its response payload is judged against the expectation.

mod definition;
mod normalize;
mod operator;
mod outcome;
mod summary;

pub use definition::{TestDefinition, ValidatedTest};
pub use normalize::{Comparable, Scalar};
pub use operator::ComparisonOperator;
pub use outcome::{Mismatch, Outcome, OutcomeKind, Success};
pub use summary::RunSummary;
