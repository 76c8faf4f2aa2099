//! In-memory `DestinationStore` over an owned snapshot.

use crate::{Destination, DestinationId};

use super::DestinationStore;

/// Destination store holding a snapshot in memory.
///
/// Records are sorted by identifier on construction so iteration order
/// matches the ordering of the site's catalogue queries.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestinationStore {
    destinations: Vec<Destination>,
}

impl MemoryDestinationStore {
    /// Create a store from a collection of destinations.
    pub fn new<I>(destinations: I) -> Self
    where
        I: IntoIterator<Item = Destination>,
    {
        let mut destinations: Vec<_> = destinations.into_iter().collect();
        destinations.sort_by(|left, right| left.id.cmp(&right.id));
        Self { destinations }
    }

    /// Number of destinations in the snapshot.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Borrow the sorted snapshot.
    #[must_use]
    pub fn as_slice(&self) -> &[Destination] {
        &self.destinations
    }
}

impl DestinationStore for MemoryDestinationStore {
    fn destinations(&self) -> Box<dyn Iterator<Item = Destination> + Send + '_> {
        Box::new(self.destinations.iter().cloned())
    }

    fn destination(&self, id: &DestinationId) -> Option<Destination> {
        self.destinations
            .binary_search_by(|destination| destination.id.cmp(id))
            .ok()
            .and_then(|position| self.destinations.get(position))
            .cloned()
    }
}

impl FromIterator<Destination> for MemoryDestinationStore {
    fn from_iter<T: IntoIterator<Item = Destination>>(iter: T) -> Self {
        Self::new(iter)
    }
}
