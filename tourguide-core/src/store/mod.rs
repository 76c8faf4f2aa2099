//! Data access traits for destination catalogues.
//!
//! The `DestinationStore` trait defines a read-only interface over a snapshot
//! of [`Destination`] records. The locator itself never talks to a store;
//! callers fetch the snapshot and hand it to
//! [`locate_nearest`](crate::locate_nearest).

use crate::{Destination, DestinationId};

mod memory;
#[cfg(feature = "store-sqlite")]
mod sqlite;

pub use memory::MemoryDestinationStore;
#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteDestinationStore, SqliteDestinationStoreError};

/// Read-only access to a catalogue of destinations.
///
/// # Examples
///
/// ```rust
/// use tourguide_core::{Destination, DestinationStore, MemoryDestinationStore};
///
/// let store = MemoryDestinationStore::new(vec![
///     Destination::new(2_u64, "Sauran", "https://maps.example.com/place/Sauran"),
///     Destination::new(1_u64, "Turkestan", "https://maps.example.com/@43.297,68.252"),
/// ]);
///
/// let names: Vec<_> = store.destinations().map(|d| d.name).collect();
/// assert_eq!(names, ["Turkestan", "Sauran"]);
/// assert!(store.destination(&2_u64.into()).is_some());
/// ```
pub trait DestinationStore {
    /// Return every destination ordered by identifier.
    fn destinations(&self) -> Box<dyn Iterator<Item = Destination> + Send + '_>;

    /// Return the destination with the given identifier, if present.
    fn destination(&self, id: &DestinationId) -> Option<Destination> {
        self.destinations().find(|destination| &destination.id == id)
    }
}
