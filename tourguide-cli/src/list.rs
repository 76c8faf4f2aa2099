//! List command implementation for the Tourguide CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tourguide_core::{Destination, DestinationFilter, featured};

use crate::catalogue::{CatalogueLoader, CatalogueSource, FileCatalogueLoader};
use crate::{ARG_CATALOGUE, ARG_DATABASE, CliError, ENV_LIST_CATALOGUE};

/// CLI arguments for the `list` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "list",
    long_about = "Print destinations from a catalogue as JSON, ordered by \
                 identifier. Listings can be narrowed by district and by a \
                 fragment of the destination name, or cut to the featured \
                 destinations shown on the landing page.",
    about = "List destinations in a catalogue"
)]
#[ortho_config(prefix = "TOURGUIDE")]
pub(crate) struct ListArgs {
    /// Path to a JSON array of destination rows.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Path to a SQLite database with a `destinations` table.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Only list destinations in this district.
    #[arg(long, value_name = "name")]
    #[serde(default)]
    pub(crate) district: Option<String>,
    /// Only list destinations whose name contains this text.
    #[arg(long, value_name = "text")]
    #[serde(default)]
    pub(crate) search: Option<String>,
    /// Only list the featured destinations.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "bool")]
    #[serde(default)]
    pub(crate) featured: Option<bool>,
}

impl ListArgs {
    pub(crate) fn into_config(self) -> Result<ListConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ListConfig::try_from(merged)
    }
}

/// Resolved `list` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListConfig {
    /// Catalogue to read.
    pub(crate) source: CatalogueSource,
    /// Criteria applied to every destination.
    pub(crate) filter: DestinationFilter,
    /// Cut the filtered listing to the featured prefix.
    pub(crate) featured_only: bool,
}

impl TryFrom<ListArgs> for ListConfig {
    type Error = CliError;

    fn try_from(args: ListArgs) -> Result<Self, Self::Error> {
        let source =
            CatalogueSource::from_options(args.catalogue, args.database, ENV_LIST_CATALOGUE)?;
        let filter = DestinationFilter {
            district: args.district,
            name_contains: args.search,
        };
        Ok(Self {
            source,
            filter,
            featured_only: args.featured.unwrap_or(false),
        })
    }
}

pub(super) fn run_list(args: ListArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_list_with(args, &FileCatalogueLoader, &mut stdout)
}

pub(super) fn run_list_with(
    args: ListArgs,
    loader: &dyn CatalogueLoader,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let store = loader.load(&config.source)?;
    let destinations: Vec<Destination> = store.destinations().collect();
    let matching: Vec<Destination> = config
        .filter
        .apply(&destinations)
        .into_iter()
        .cloned()
        .collect();
    let listed = if config.featured_only {
        featured(&matching)
    } else {
        matching.as_slice()
    };

    let payload = serde_json::to_string_pretty(listed).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ListConfig, CliError> {
    let merged = ListArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ListConfig::try_from(merged)
}
