//! Nearest command implementation for the Tourguide CLI.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tourguide_core::{Coordinate, LocateResult, locate_nearest};

use crate::catalogue::{CatalogueLoader, CatalogueSource, FileCatalogueLoader};
use crate::{
    ARG_CATALOGUE, ARG_DATABASE, ARG_FORMAT, ARG_LATITUDE, ARG_LONGITUDE, CliError,
    ENV_NEAREST_CATALOGUE, ENV_NEAREST_LATITUDE, ENV_NEAREST_LONGITUDE,
};

/// Message shown when no destination could be placed.
pub(crate) const NO_RESULT_MESSAGE: &str = "could not determine nearest location";

/// How the nearest command renders its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// A single human-readable line.
    #[default]
    Text,
    /// The result as JSON (`null` when nothing was found).
    Json,
}

/// CLI arguments for the `nearest` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "nearest",
    long_about = "Find the destination closest to a position. Each \
                 destination is placed using the @lat,lng segment of its \
                 map link; destinations without one are ignored. The \
                 catalogue is read from a JSON export or a SQLite database.",
    about = "Find the destination nearest to a position"
)]
#[ortho_config(prefix = "TOURGUIDE")]
pub(crate) struct NearestArgs {
    /// Latitude of the visitor in decimal degrees.
    #[arg(
        long = ARG_LATITUDE,
        value_name = "degrees",
        allow_negative_numbers = true,
        value_parser = parse_degrees
    )]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the visitor in decimal degrees.
    #[arg(
        long = ARG_LONGITUDE,
        value_name = "degrees",
        allow_negative_numbers = true,
        value_parser = parse_degrees
    )]
    #[serde(default)]
    pub(crate) lng: Option<f64>,
    /// Path to a JSON array of destination rows.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Path to a SQLite database with a `destinations` table.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

/// Parse a coordinate component, rejecting NaN and infinities.
fn parse_degrees(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("{raw:?} is not a number: {err}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{raw:?} is not a finite number of degrees"))
    }
}

impl NearestArgs {
    pub(crate) fn into_config(self) -> Result<NearestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearestConfig::try_from(merged)
    }
}

/// Resolved `nearest` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearestConfig {
    /// Position the search starts from.
    pub(crate) visitor: Coordinate,
    /// Catalogue to search.
    pub(crate) source: CatalogueSource,
    /// Rendering of the result.
    pub(crate) format: OutputFormat,
}

impl TryFrom<NearestArgs> for NearestConfig {
    type Error = CliError;

    fn try_from(args: NearestArgs) -> Result<Self, Self::Error> {
        let latitude = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_LATITUDE,
            env: ENV_NEAREST_LATITUDE,
        })?;
        let longitude = args.lng.ok_or(CliError::MissingArgument {
            field: ARG_LONGITUDE,
            env: ENV_NEAREST_LONGITUDE,
        })?;
        let source =
            CatalogueSource::from_options(args.catalogue, args.database, ENV_NEAREST_CATALOGUE)?;

        Ok(Self {
            visitor: Coordinate::new(latitude, longitude),
            source,
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(super) fn run_nearest(args: NearestArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_nearest_with(args, &FileCatalogueLoader, &mut stdout)
}

pub(super) fn run_nearest_with(
    args: NearestArgs,
    loader: &dyn CatalogueLoader,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let result = execute_nearest(&config, loader)?;
    write_nearest(writer, config.format, &result)
}

fn execute_nearest(
    config: &NearestConfig,
    loader: &dyn CatalogueLoader,
) -> Result<LocateResult, CliError> {
    let store = loader.load(&config.source)?;
    let destinations: Vec<_> = store.destinations().collect();
    info!(
        "searching {} destinations from {} for the one nearest {}",
        destinations.len(),
        config.source.path(),
        config.visitor
    );
    Ok(locate_nearest(config.visitor, &destinations))
}

fn write_nearest(
    writer: &mut dyn Write,
    format: OutputFormat,
    result: &LocateResult,
) -> Result<(), CliError> {
    let payload = match (format, result) {
        (OutputFormat::Text, Some(nearest)) => nearest.to_string(),
        (OutputFormat::Text, None) => NO_RESULT_MESSAGE.to_owned(),
        (OutputFormat::Json, _) => {
            serde_json::to_string_pretty(result).map_err(CliError::SerialiseOutput)?
        }
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<NearestConfig, CliError> {
    let merged = NearestArgs::merge_from_layers(layers).map_err(CliError::from)?;
    NearestConfig::try_from(merged)
}
