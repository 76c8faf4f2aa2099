//! Show command implementation for the Tourguide CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tourguide_core::DestinationId;

use crate::catalogue::{CatalogueLoader, CatalogueSource, FileCatalogueLoader};
use crate::{ARG_CATALOGUE, ARG_DATABASE, ARG_ID, CliError, ENV_SHOW_CATALOGUE, ENV_SHOW_ID};

/// CLI arguments for the `show` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "show",
    long_about = "Print one destination from a catalogue as JSON, including \
                 its detailed information and audio guide. Identifiers made \
                 only of digits are matched as numeric keys.",
    about = "Print a single destination by identifier"
)]
#[ortho_config(prefix = "TOURGUIDE")]
pub(crate) struct ShowArgs {
    /// Identifier of the destination to print.
    #[arg(long = ARG_ID, value_name = "id")]
    #[serde(default)]
    pub(crate) id: Option<DestinationId>,
    /// Path to a JSON array of destination rows.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Path to a SQLite database with a `destinations` table.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
}

impl ShowArgs {
    pub(crate) fn into_config(self) -> Result<ShowConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ShowConfig::try_from(merged)
    }
}

/// Resolved `show` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShowConfig {
    /// Destination to print.
    pub(crate) id: DestinationId,
    /// Catalogue to read.
    pub(crate) source: CatalogueSource,
}

impl TryFrom<ShowArgs> for ShowConfig {
    type Error = CliError;

    fn try_from(args: ShowArgs) -> Result<Self, Self::Error> {
        let id = match args.id {
            // Environment values arrive as strings even when they are numeric.
            Some(DestinationId::Text(raw)) => {
                let Ok(id) = raw.parse();
                id
            }
            Some(id) => id,
            None => {
                return Err(CliError::MissingArgument {
                    field: ARG_ID,
                    env: ENV_SHOW_ID,
                });
            }
        };
        let source =
            CatalogueSource::from_options(args.catalogue, args.database, ENV_SHOW_CATALOGUE)?;
        Ok(Self { id, source })
    }
}

pub(super) fn run_show(args: ShowArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_show_with(args, &FileCatalogueLoader, &mut stdout)
}

pub(super) fn run_show_with(
    args: ShowArgs,
    loader: &dyn CatalogueLoader,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let store = loader.load(&config.source)?;
    let destination =
        store
            .destination(&config.id)
            .ok_or_else(|| CliError::UnknownDestination {
                id: config.id.clone(),
                path: config.source.path().to_path_buf(),
            })?;

    let payload =
        serde_json::to_string_pretty(&destination).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ShowConfig, CliError> {
    let merged = ShowArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ShowConfig::try_from(merged)
}
