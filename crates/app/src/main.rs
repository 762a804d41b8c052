//! apicheck - Main Entry Point
//!
//! Loads the definitions file, runs every test in order against the
//! network and prints a report. Exits with status 1 if any test did not
//! pass.

mod cli;
mod logger;

use std::process::ExitCode;
use std::sync::Arc;

use apicheck_application::{ApplicationResult, EvaluateTest, LoadDefinitions, RunSuite};
use apicheck_domain::RunSummary;
use apicheck_infrastructure::{
    ConsoleReporter, FileDefinitionRepository, ReqwestTransport, SystemClock, TokioFileSystem,
};
use clap::Parser;
use tracing::error;

use crate::cli::Cli;

async fn run(cli: &Cli) -> ApplicationResult<RunSummary> {
    let definitions = LoadDefinitions::new(FileDefinitionRepository::new(TokioFileSystem::new()))
        .execute(&cli.file)
        .await?;

    let transport = Arc::new(ReqwestTransport::with_user_agent(&cli.user_agent)?);
    let suite = RunSuite::new(EvaluateTest::new(transport), Arc::new(SystemClock::new()));

    let mut reporter = ConsoleReporter::stdio();
    Ok(suite.execute(&definitions, &mut reporter).await?)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logging(cli.verbose, cli.no_color);

    match run(&cli).await {
        Ok(summary) if summary.all_passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            error!(%err, "run failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
