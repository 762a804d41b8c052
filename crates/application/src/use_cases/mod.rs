//! Application use cases (business logic orchestration).

mod load_definitions;
mod run_suite;

pub use evaluate_test::EvaluateTest;
pub use load_definitions::LoadDefinitions;
pub use run_suite::RunSuite;
