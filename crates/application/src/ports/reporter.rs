//! Reporter port

use apicheck_domain::{Outcome, RunSummary, TestDefinition};

/// Error raised when the report cannot be written.
#[derive(Debug, thiserror::Error)]
#[error("failed to write report: {0}")]
pub struct ReportError(#[from] pub std::io::Error);

/// Receives the human-readable report of a run.
pub trait Reporter: Send {
    /// Called before test number `sequence` (1-based) is evaluated.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn begin(&mut self, sequence: usize, definition: &TestDefinition) -> Result<(), ReportError>;

    /// Called with the outcome of test number `sequence`.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn conclude(&mut self, sequence: usize, outcome: &Outcome) -> Result<(), ReportError>;

    /// Called once after the last test.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written.
    fn summarize(&mut self, summary: &RunSummary) -> Result<(), ReportError>;
}
