//! Run suite use case.

use std::sync::Arc;

use apicheck_domain::{RunSummary, TestDefinition};
use tracing::info;

use super::EvaluateTest;
use crate::ports::{Clock, HttpTransport, ReportError, Reporter};

/// Use case running an ordered sequence of definitions.
///
/// Tests run one at a time, each fully awaited before the next starts. A
/// failing, aborted or erroring test never stops the run.
pub struct RunSuite<T: HttpTransport, C: Clock> {
    evaluator: EvaluateTest<T>,
    clock: Arc<C>,
}

impl<T: HttpTransport, C: Clock> RunSuite<T, C> {
    /// Creates a new `RunSuite` use case.
    pub fn new(evaluator: EvaluateTest<T>, clock: Arc<C>) -> Self {
        Self { evaluator, clock }
    }

    /// Evaluates every definition in order, reporting each one.
    ///
    /// Tests are numbered from 1.
    ///
    /// # Errors
    ///
    /// Returns an error only if the reporter cannot write.
    pub async fn execute<R>(
        &self,
        definitions: &[TestDefinition],
        reporter: &mut R,
    ) -> Result<RunSummary, ReportError>
    where
        R: Reporter + ?Sized,
    {
        info!(tests = definitions.len(), "starting run");
        let mut summary = RunSummary::new(self.clock.now());
        let mut sequence = 1;

        for definition in definitions {
            reporter.begin(sequence, definition)?;
            let outcome = self.evaluator.execute(definition).await;
            reporter.conclude(sequence, &outcome)?;
            summary.record(&outcome);
            sequence += 1;
        }

        summary.finish(self.clock.now());
        info!(
            total = summary.total,
            passed = summary.passed(),
            duration_ms = summary.duration_ms(),
            "run finished"
        );
        reporter.summarize(&summary)?;

        Ok(summary)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use apicheck_domain::{Outcome, OutcomeKind};
    use chrono::{DateTime, TimeDelta, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::ports::TransportError;
    use crate::use_cases::evaluate_test::tests::RecordingTransport;

    /// Clock advancing one second per reading.
    struct TickingClock {
        ticks: Mutex<i64>,
    }

    impl TickingClock {
        fn new() -> Self {
            Self {
                ticks: Mutex::new(0),
            }
        }
    }

    impl Clock for TickingClock {
        fn now(&self) -> DateTime<Utc> {
            let mut ticks = self.ticks.lock().expect("Lock poisoned");
            let now = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(*ticks);
            *ticks += 1;
            now
        }
    }

    #[derive(Debug, PartialEq)]
    enum Event {
        Begin(usize, Option<String>),
        Conclude(usize, OutcomeKind),
        Summary(usize),
    }

    #[derive(Default)]
    struct RecordingReporter {
        events: Vec<Event>,
    }

    impl Reporter for RecordingReporter {
        fn begin(&mut self, sequence: usize, definition: &TestDefinition) -> Result<(), ReportError> {
            self.events
                .push(Event::Begin(sequence, definition.title.clone()));
            Ok(())
        }

        fn conclude(&mut self, sequence: usize, outcome: &Outcome) -> Result<(), ReportError> {
            self.events.push(Event::Conclude(sequence, outcome.kind()));
            Ok(())
        }

        fn summarize(&mut self, summary: &RunSummary) -> Result<(), ReportError> {
            self.events.push(Event::Summary(summary.total));
            Ok(())
        }
    }

    struct BrokenReporter;

    impl Reporter for BrokenReporter {
        fn begin(&mut self, _: usize, _: &TestDefinition) -> Result<(), ReportError> {
            Err(ReportError(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "closed",
            )))
        }

        fn conclude(&mut self, _: usize, _: &Outcome) -> Result<(), ReportError> {
            Ok(())
        }

        fn summarize(&mut self, _: &RunSummary) -> Result<(), ReportError> {
            Ok(())
        }
    }

    fn suite(transport: RecordingTransport) -> (RunSuite<RecordingTransport, TickingClock>, Arc<RecordingTransport>) {
        let transport = Arc::new(transport);
        let evaluator = EvaluateTest::new(Arc::clone(&transport));
        (RunSuite::new(evaluator, Arc::new(TickingClock::new())), transport)
    }

    #[tokio::test]
    async fn test_runs_every_test_in_order() {
        let (use_case, transport) = suite(
            RecordingTransport::new()
                .fail(TransportError::Other("timeout".to_string()))
                .respond(json!({"id": 2}))
                .respond(json!("done")),
        );
        let definitions = vec![
            TestDefinition::new("get", "http://x/1").with_title("first"),
            TestDefinition::new("bogus", "http://x/skipped").with_title("second"),
            TestDefinition::new("get", "http://x/3")
                .with_title("third")
                .with_expect(json!({"id": 1})),
            TestDefinition::new("get", "http://x/4"),
        ];
        let mut reporter = RecordingReporter::default();

        let summary = use_case.execute(&definitions, &mut reporter).await.unwrap();

        assert_eq!(
            reporter.events,
            vec![
                Event::Begin(1, Some("first".to_string())),
                Event::Conclude(1, OutcomeKind::RequestError),
                Event::Begin(2, Some("second".to_string())),
                Event::Conclude(2, OutcomeKind::Aborted),
                Event::Begin(3, Some("third".to_string())),
                Event::Conclude(3, OutcomeKind::Failed),
                Event::Begin(4, None),
                Event::Conclude(4, OutcomeKind::Unverified),
                Event::Summary(4),
            ]
        );

        let urls: Vec<_> = transport.calls().into_iter().map(|c| c.url).collect();
        assert_eq!(urls, vec!["http://x/1", "http://x/3", "http://x/4"]);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.request_errors, 1);
        assert_eq!(summary.aborted, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.unverified, 1);
        assert_eq!(summary.exit_codes, 2);
        assert!(!summary.all_passed());
        assert_eq!(summary.duration_ms(), 1000);
    }

    #[tokio::test]
    async fn test_empty_run() {
        let (use_case, transport) = suite(RecordingTransport::new());
        let mut reporter = RecordingReporter::default();

        let summary = use_case.execute(&[], &mut reporter).await.unwrap();

        assert_eq!(reporter.events, vec![Event::Summary(0)]);
        assert!(summary.all_passed());
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_report_failure_stops_run() {
        let (use_case, transport) = suite(RecordingTransport::new().respond(json!(1)));
        let definitions = vec![TestDefinition::new("get", "http://x")];

        let result = use_case.execute(&definitions, &mut BrokenReporter).await;

        assert!(result.is_err());
        assert!(transport.calls().is_empty());
    }
}
