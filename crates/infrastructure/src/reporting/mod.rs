//! Human-readable run reports.

mod console_reporter;

pub use console_reporter::ConsoleReporter;
