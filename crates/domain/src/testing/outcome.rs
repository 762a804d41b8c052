//! Result of evaluating one test definition.

use serde_json::Value;

use super::operator::ComparisonOperator;
use crate::error::DomainError;

/// How a single test concluded.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The request succeeded and the expectation (if any) held.
    Succeeded(Success),
    /// The request succeeded but the expectation did not hold.
    Failed(Mismatch),
    /// The definition was invalid; no request was sent.
    Aborted(DomainError),
    /// The transport failed.
    RequestError {
        /// Human-readable transport error.
        message: String,
    },
}

/// Successful conclusions.
#[derive(Debug, Clone, PartialEq)]
pub enum Success {
    /// The comparison held.
    Matched {
        /// Operator applied.
        operator: ComparisonOperator,
        /// Normalized expected value.
        expected: String,
    },
    /// No expectation was given; any response passes.
    Unverified {
        /// Response payload, for visual inspection.
        response: Value,
    },
}

/// A comparison that did not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Operator applied.
    pub operator: ComparisonOperator,
    /// Normalized expected value.
    pub expected: String,
    /// Normalized actual value.
    pub actual: String,
}

/// Coarse outcome category, used for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// Comparison held.
    Matched,
    /// Passed without an expectation.
    Unverified,
    /// Comparison did not hold.
    Failed,
    /// Invalid definition.
    Aborted,
    /// Transport failure.
    RequestError,
}

impl Outcome {
    /// Status code of the evaluation: `0` when the test ran to a conclusion
    /// (including a failed comparison), `1` when it was aborted or the
    /// request failed.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Succeeded(_) | Self::Failed(_) => 0,
            Self::Aborted(_) | Self::RequestError { .. } => 1,
        }
    }

    /// Returns true if the test passed.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Returns the outcome category.
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Succeeded(Success::Matched { .. }) => OutcomeKind::Matched,
            Self::Succeeded(Success::Unverified { .. }) => OutcomeKind::Unverified,
            Self::Failed(_) => OutcomeKind::Failed,
            Self::Aborted(_) => OutcomeKind::Aborted,
            Self::RequestError { .. } => OutcomeKind::RequestError,
        }
    }

    /// Creates a request error outcome.
    #[must_use]
    pub fn request_error(message: impl Into<String>) -> Self {
        Self::RequestError {
            message: message.into(),
        }
    }
}
