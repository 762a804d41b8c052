//! Clock port for run timestamps

use chrono::{DateTime, Utc};

/// Port for getting the current time.
///
/// Run summaries are stamped through this trait so tests can pin time.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}
