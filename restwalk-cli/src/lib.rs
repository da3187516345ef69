//! Command-line interface for the restwalk route planner.
#![forbid(unsafe_code)]

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;
use plan::{PlanArgs, run_plan};

const ARG_ORIGIN: &str = "origin";
const ARG_DESTINATION: &str = "destination";
const ARG_REST_INTERVAL_KM: &str = "rest-interval-km";
const ARG_REGION: &str = "region";
const ARG_MODEL: &str = "model";
const ARG_BASE_URL: &str = "base-url";
const ARG_API_KEY: &str = "api-key";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ARG_OUTPUT: &str = "output";
const ENV_ORIGIN: &str = "RESTWALK_CMDS_PLAN_ORIGIN";
const ENV_DESTINATION: &str = "RESTWALK_CMDS_PLAN_DESTINATION";

/// Run the restwalk CLI with the current process arguments and environment.
///
/// `--help` and `--version` print to stdout and exit the process with
/// status 0.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if is_informational(&err) => err.exit(),
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

/// Whether clap stopped parsing to print help or version text.
fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

#[derive(Debug, Parser)]
#[command(
    name = "restwalk",
    about = "Plan walking routes with regular rest stops",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan walking routes between two places and print the map view.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
