//! Command-line interface for Courier's delivery sequencing.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod solve;

pub use error::CliError;

use solve::SolveArgs;

const ARG_SOLVE_REQUEST: &str = "request-path";
const ARG_SOLVE_AVERAGE_SPEED: &str = "average-speed-kmh";
const ARG_SOLVE_EARTH_RADIUS: &str = "earth-radius-km";
const ARG_SOLVE_OUTPUT: &str = "output";
const ENV_SOLVE_REQUEST: &str = "COURIER_CMDS_SOLVE_REQUEST_PATH";

/// Environment variable holding the log filter directives.
pub const ENV_LOG: &str = "COURIER_LOG";

/// Run the Courier CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration, request
/// loading, sequencing or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => solve::run_solve(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "courier",
    about = "Sequence single-vehicle delivery rounds",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order the destinations of a delivery round and report its cost.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
