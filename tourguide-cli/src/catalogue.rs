//! Resolving and loading destination catalogues for CLI commands.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::debug;
use std::io::{self, BufReader};
use tourguide_core::{Destination, DestinationStore, MemoryDestinationStore};

use crate::{ARG_CATALOGUE, ARG_DATABASE, CliError};

/// Where a command reads its destination snapshot from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogueSource {
    /// JSON array of exported destination rows.
    Json(Utf8PathBuf),
    /// SQLite database containing a `destinations` table.
    Sqlite(Utf8PathBuf),
}

impl CatalogueSource {
    /// Pick exactly one source from the merged options.
    pub(crate) fn from_options(
        catalogue: Option<Utf8PathBuf>,
        database: Option<Utf8PathBuf>,
        env_hint: &'static str,
    ) -> Result<Self, CliError> {
        match (catalogue, database) {
            (Some(_), Some(_)) => Err(CliError::ConflictingSources {
                first: ARG_CATALOGUE,
                second: ARG_DATABASE,
            }),
            (Some(path), None) => Ok(Self::Json(path)),
            (None, Some(path)) => Ok(Self::Sqlite(path)),
            (None, None) => Err(CliError::MissingArgument {
                field: ARG_CATALOGUE,
                env: env_hint,
            }),
        }
    }

    /// Path of the backing file.
    pub(crate) fn path(&self) -> &Utf8Path {
        match self {
            Self::Json(path) | Self::Sqlite(path) => path,
        }
    }

    const fn field(&self) -> &'static str {
        match self {
            Self::Json(_) => ARG_CATALOGUE,
            Self::Sqlite(_) => ARG_DATABASE,
        }
    }

    /// Ensure the backing file exists and is a regular file.
    pub(crate) fn validate(&self) -> Result<(), CliError> {
        let path = self.path();
        let field = self.field();
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Loads the destination store named by a [`CatalogueSource`].
pub(crate) trait CatalogueLoader {
    fn load(&self, source: &CatalogueSource) -> Result<Box<dyn DestinationStore>, CliError>;
}

/// Loader reading real files from disk.
pub(crate) struct FileCatalogueLoader;

impl CatalogueLoader for FileCatalogueLoader {
    fn load(&self, source: &CatalogueSource) -> Result<Box<dyn DestinationStore>, CliError> {
        source.validate()?;
        match source {
            CatalogueSource::Json(path) => {
                let destinations = load_json_catalogue(path)?;
                debug!("loaded {} destinations from {path}", destinations.len());
                Ok(Box::new(MemoryDestinationStore::new(destinations)))
            }
            #[cfg(feature = "store-sqlite")]
            CatalogueSource::Sqlite(path) => {
                let store = tourguide_core::SqliteDestinationStore::open(path.as_std_path())
                    .map_err(|source| CliError::OpenDatabase {
                        path: path.clone(),
                        source,
                    })?;
                Ok(Box::new(store))
            }
            #[cfg(not(feature = "store-sqlite"))]
            CatalogueSource::Sqlite(_) => Err(CliError::MissingFeature {
                feature: "store-sqlite",
                action: "reading a SQLite catalogue",
            }),
        }
    }
}

/// Reads a JSON array of destination rows from disk.
pub(crate) fn load_json_catalogue(path: &Utf8Path) -> Result<Vec<Destination>, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenCatalogue {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalogue {
        path: path.to_path_buf(),
        source,
    })
}

fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}
