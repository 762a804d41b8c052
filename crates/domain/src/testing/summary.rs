//! Aggregate counts for a run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::outcome::{Outcome, OutcomeKind};

/// Results from running a sequence of tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of tests evaluated.
    pub total: usize,
    /// Tests whose comparison held.
    pub matched: usize,
    /// Tests that passed without an expectation.
    pub unverified: usize,
    /// Tests whose comparison did not hold.
    pub failed: usize,
    /// Tests aborted by validation.
    pub aborted: usize,
    /// Tests whose request failed.
    pub request_errors: usize,
    /// Sum of per-test exit codes.
    pub exit_codes: usize,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    /// Creates an empty summary starting at `started_at`.
    #[must_use]
    pub const fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            total: 0,
            matched: 0,
            unverified: 0,
            failed: 0,
            aborted: 0,
            request_errors: 0,
            exit_codes: 0,
            started_at,
            finished_at: started_at,
        }
    }

    /// Counts one outcome.
    pub fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        self.exit_codes += usize::from(outcome.exit_code());
        match outcome.kind() {
            OutcomeKind::Matched => self.matched += 1,
            OutcomeKind::Unverified => self.unverified += 1,
            OutcomeKind::Failed => self.failed += 1,
            OutcomeKind::Aborted => self.aborted += 1,
            OutcomeKind::RequestError => self.request_errors += 1,
        }
    }

    /// Marks the run finished.
    pub fn finish(&mut self, finished_at: DateTime<Utc>) {
        self.finished_at = finished_at;
    }

    /// Number of passing tests.
    #[must_use]
    pub const fn passed(&self) -> usize {
        self.matched + self.unverified
    }

    /// Check if all tests passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.passed() == self.total
    }

    /// Elapsed wall time in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}
