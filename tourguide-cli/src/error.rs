//! Error types emitted by the Tourguide CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Tourguide CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// Two mutually exclusive options were both supplied.
    #[error("--{first} and --{second} cannot be used together")]
    ConflictingSources {
        first: &'static str,
        second: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        feature: &'static str,
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the JSON catalogue failed.
    #[error("failed to open destination catalogue at {path:?}: {source}")]
    OpenCatalogue {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The JSON catalogue could not be decoded.
    #[error("failed to parse destination catalogue JSON at {path:?}: {source}")]
    ParseCatalogue {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Opening the SQLite catalogue failed.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to read destinations from {path:?}: {source}")]
    OpenDatabase {
        path: Utf8PathBuf,
        #[source]
        source: tourguide_core::SqliteDestinationStoreError,
    },
    /// No destination in the catalogue carries the requested identifier.
    #[error("no destination with id {id} in {path:?}")]
    UnknownDestination {
        id: tourguide_core::DestinationId,
        path: Utf8PathBuf,
    },
    /// Serialising command output failed.
    #[error("failed to serialise command output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write command output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
