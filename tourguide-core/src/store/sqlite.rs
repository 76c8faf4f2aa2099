//! SQLite-backed store reading an exported `destinations` table.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use log::warn;
use rusqlite::{Connection, OpenFlags, Row};
use thiserror::Error;

use crate::{Destination, DestinationId};

use super::{DestinationStore, MemoryDestinationStore};

const SELECT_DESTINATIONS: &str = "SELECT id, name, description, image, google_maps_url, \
     district, detailed_info, audio_file FROM destinations ORDER BY id";

/// Error raised when reading a destination catalogue from SQLite.
#[derive(Debug, Error)]
pub enum SqliteDestinationStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A row carried an identifier that cannot be a catalogue key.
    #[error("destination id {id} is outside the supported range")]
    IdOutOfRange {
        /// Identifier read from SQLite.
        id: i64,
    },
    /// Generic SQLite error when reading destination rows.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

/// Read-only destination store loaded from a SQLite database.
///
/// The whole table is read once on [`open`](Self::open); later queries are
/// served from memory.
pub struct SqliteDestinationStore {
    snapshot: MemoryDestinationStore,
}

impl fmt::Debug for SqliteDestinationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteDestinationStore")
            .field("entries", &self.snapshot.len())
            .finish_non_exhaustive()
    }
}

impl SqliteDestinationStore {
    /// Open the database at `database_path` and load its `destinations` table.
    pub fn open<P>(database_path: P) -> Result<Self, SqliteDestinationStoreError>
    where
        P: AsRef<Path>,
    {
        let database_path = database_path.as_ref();
        let connection =
            Connection::open_with_flags(database_path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
                |source| SqliteDestinationStoreError::OpenDatabase {
                    path: database_path.to_path_buf(),
                    source,
                },
            )?;

        let destinations = load_destinations(&connection)?;
        if destinations.is_empty() {
            warn!(
                "destination table in {} is empty",
                database_path.display()
            );
        }

        Ok(Self {
            snapshot: MemoryDestinationStore::new(destinations),
        })
    }
}

impl DestinationStore for SqliteDestinationStore {
    fn destinations(&self) -> Box<dyn Iterator<Item = Destination> + Send + '_> {
        self.snapshot.destinations()
    }

    fn destination(&self, id: &DestinationId) -> Option<Destination> {
        self.snapshot.destination(id)
    }
}

fn load_destinations(
    connection: &Connection,
) -> Result<Vec<Destination>, SqliteDestinationStoreError> {
    let mut statement = connection.prepare(SELECT_DESTINATIONS)?;
    let mut rows = statement.query([])?;
    let mut destinations = Vec::new();

    while let Some(row) = rows.next()? {
        destinations.push(destination_from_row(row)?);
    }

    Ok(destinations)
}

fn destination_from_row(row: &Row<'_>) -> Result<Destination, SqliteDestinationStoreError> {
    let raw_id: i64 = row.get(0)?;
    let id = u64::try_from(raw_id)
        .map_err(|_| SqliteDestinationStoreError::IdOutOfRange { id: raw_id })?;

    Ok(Destination {
        id: DestinationId::Numeric(id),
        name: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        image: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        map_link: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        district: row.get(5)?,
        detailed_info: row.get(6)?,
        audio_file: row.get(7)?,
    })
}
