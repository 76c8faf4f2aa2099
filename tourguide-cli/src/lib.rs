//! Command-line interface for the Tourguide destination locator.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod catalogue;
mod error;
mod list;
mod nearest;
mod show;

pub use error::CliError;

use list::{ListArgs, run_list};
use nearest::{NearestArgs, run_nearest};
use show::{ShowArgs, run_show};

pub(crate) const ARG_LATITUDE: &str = "lat";
pub(crate) const ARG_LONGITUDE: &str = "lng";
pub(crate) const ARG_CATALOGUE: &str = "catalogue";
pub(crate) const ARG_DATABASE: &str = "database";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_ID: &str = "id";
pub(crate) const ENV_NEAREST_LATITUDE: &str = "TOURGUIDE_CMDS_NEAREST_LAT";
pub(crate) const ENV_NEAREST_LONGITUDE: &str = "TOURGUIDE_CMDS_NEAREST_LNG";
pub(crate) const ENV_NEAREST_CATALOGUE: &str = "TOURGUIDE_CMDS_NEAREST_CATALOGUE";
pub(crate) const ENV_LIST_CATALOGUE: &str = "TOURGUIDE_CMDS_LIST_CATALOGUE";
pub(crate) const ENV_SHOW_ID: &str = "TOURGUIDE_CMDS_SHOW_ID";
pub(crate) const ENV_SHOW_CATALOGUE: &str = "TOURGUIDE_CMDS_SHOW_CATALOGUE";

/// Run the Tourguide CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Nearest(args) => run_nearest(args),
        Command::List(args) => run_list(args),
        Command::Show(args) => run_show(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tourguide",
    about = "Explore the destination catalogue of the Turkestan region",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the destination nearest to a position.
    Nearest(NearestArgs),
    /// List destinations in a catalogue.
    List(ListArgs),
    /// Print a single destination by identifier.
    Show(ShowArgs),
}

#[cfg(test)]
mod tests;
