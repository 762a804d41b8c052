//! Command-line arguments.

use std::path::PathBuf;

use apicheck_infrastructure::DEFAULT_USER_AGENT;
use clap::Parser;

/// Runs HTTP request assertions read from a definitions file.
#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Runs HTTP request assertions read from a definitions file and reports each outcome."
)]
pub struct Cli {
    /// Definitions file (JSON array, or YAML for .yaml/.yml)
    #[arg(value_name = "FILE", env = "APICHECK_FILE", default_value = "parameters.json")]
    pub file: PathBuf,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// User-Agent header sent with every request
    #[arg(long = "user-agent", env = "APICHECK_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}
