//! Console reporter writing to a stdout/stderr pair.

use std::io::{self, Stderr, Stdout, Write};

use apicheck_application::ports::{ReportError, Reporter};
use apicheck_domain::{Mismatch, Outcome, RunSummary, Success, TestDefinition};
use serde_json::Value;

use crate::serialization::to_json_stable;

const RULE: &str = "**************************************************";

/// Reporter printing each test as it runs.
///
/// Progress and successes go to `out`; warnings, failures, aborts and
/// request errors go to `err`.
pub struct ConsoleReporter<O, E> {
    out: O,
    err: E,
}

impl ConsoleReporter<Stdout, Stderr> {
    /// Creates a reporter on the process's standard streams.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    /// Creates a reporter on the given streams.
    pub const fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Returns the underlying streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn success(&mut self, success: &Success) -> io::Result<()> {
        match success {
            Success::Matched { operator, .. } => {
                writeln!(self.out, "Test Succeeded!\n")?;
                writeln!(
                    self.out,
                    "Response was [{operator}] {} \"expect\" test.",
                    operator.preposition()
                )
            }
            Success::Unverified { response } => {
                writeln!(self.err, "[WARN] No \"expect\" test.\n")?;
                writeln!(self.out, "Test Succeeded!\n")?;
                writeln!(self.out, "Response :")?;
                write_value(&mut self.out, response)
            }
        }
    }

    fn mismatch(&mut self, mismatch: &Mismatch) -> io::Result<()> {
        let Mismatch {
            operator,
            expected,
            actual,
        } = mismatch;
        writeln!(self.err, "Test failed!")?;
        writeln!(
            self.err,
            "\nExpected response to be [{operator}] {} :",
            operator.preposition()
        )?;
        writeln!(self.err, "{expected}")?;
        writeln!(self.err, "\nGot :")?;
        writeln!(self.err, "{actual}")
    }
}

/// Prints a payload as indented JSON; strings print bare.
fn write_value<W: Write>(writer: &mut W, value: &Value) -> io::Result<()> {
    if let Value::String(text) = value {
        return writeln!(writer, "{text}");
    }
    let pretty = to_json_stable(value).map_err(io::Error::other)?;
    write!(writer, "{pretty}")
}

impl<O: Write + Send, E: Write + Send> Reporter for ConsoleReporter<O, E> {
    fn begin(&mut self, sequence: usize, definition: &TestDefinition) -> Result<(), ReportError> {
        writeln!(self.out, "\n\n\t{RULE}")?;
        match &definition.title {
            Some(title) => writeln!(self.out, "\nTEST #{sequence} - {title}")?,
            None => writeln!(self.out, "\nTEST #{sequence}")?,
        }
        if let Some(line) = definition.request_line() {
            writeln!(self.out, "{line}")?;
        }
        if let Some(body) = &definition.body {
            write_value(&mut self.out, body)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn conclude(&mut self, _sequence: usize, outcome: &Outcome) -> Result<(), ReportError> {
        match outcome {
            Outcome::Succeeded(success) => self.success(success)?,
            Outcome::Failed(mismatch) => self.mismatch(mismatch)?,
            Outcome::Aborted(reason) => {
                writeln!(self.err, "Test aborted!")?;
                writeln!(self.err, "\n{reason}")?;
            }
            Outcome::RequestError { message } => {
                writeln!(self.err, "Test failed!")?;
                writeln!(self.err, "{message}")?;
            }
        }
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    fn summarize(&mut self, summary: &RunSummary) -> Result<(), ReportError> {
        writeln!(
            self.out,
            "\n{} tests: {} matched, {} unverified, {} failed, {} aborted, {} request errors ({} ms)",
            summary.total,
            summary.matched,
            summary.unverified,
            summary.failed,
            summary.aborted,
            summary.request_errors,
            summary.duration_ms()
        )?;
        self.out.flush()?;
        Ok(())
    }
}
