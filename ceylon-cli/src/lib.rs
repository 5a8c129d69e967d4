//! Command-line interface for querying a Ceylon Explorer catalogue.
//!
//! Each subcommand loads a JSON catalogue, places the user at the supplied
//! coordinate and prints a pretty JSON report to stdout.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod bearing;
mod error;
mod nearby;
mod nearest;
mod origin;
mod report;

pub use error::CliError;

use bearing::{BearingArgs, run_bearing};
use nearby::{NearbyArgs, run_nearby};
use nearest::{NearestArgs, run_nearest};

pub(crate) const ENV_PREFIX: &str = "CEYLON";

pub(crate) const CMD_NEARBY: &str = "nearby";
pub(crate) const CMD_NEAREST: &str = "nearest";
pub(crate) const CMD_BEARING: &str = "bearing";

pub(crate) const ARG_CATALOGUE: &str = "catalogue";
pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LON: &str = "lon";
pub(crate) const ARG_RADIUS: &str = "radius";
pub(crate) const ARG_CATEGORY: &str = "category";
pub(crate) const ARG_TO: &str = "to";

/// Search radius used by `nearby` when none is configured.
pub(crate) const DEFAULT_RADIUS_M: f64 = 10_000.0;

/// Run the Ceylon CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments are invalid, the catalogue cannot
/// be loaded, or the report cannot be written to stdout.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Nearby(args) => run_nearby(args, &mut stdout),
        Command::Nearest(args) => run_nearest(args, &mut stdout),
        Command::Bearing(args) => run_bearing(args, &mut stdout),
    }
}

/// Name of the environment variable ortho-config reads for `field` of
/// `command`, e.g. `CEYLON_CMDS_NEARBY_CATALOGUE`.
pub(crate) fn env_var(command: &str, field: &str) -> String {
    format!(
        "{ENV_PREFIX}_CMDS_{}_{}",
        command.to_uppercase(),
        field.to_uppercase().replace('-', "_")
    )
}

#[derive(Debug, Parser)]
#[command(
    name = "ceylon",
    about = "Find heritage sites and wildlife spots near a location in Sri Lanka",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List points of interest within a radius, nearest first.
    Nearby(NearbyArgs),
    /// Report the single closest point of interest.
    Nearest(NearestArgs),
    /// Report the distance and compass bearing to one point of interest.
    Bearing(BearingArgs),
}

#[cfg(test)]
mod tests;
