//! Facade crate for the Tourguide destination locator.
//!
//! This crate re-exports the core domain types and exposes the optional
//! SQLite-backed store behind a feature flag.
//!
//! ```
//! use tourguide::{Coordinate, Destination, locate_nearest};
//!
//! let catalogue = [Destination::new(
//!     1_u64,
//!     "Mausoleum of Khoja Ahmed Yasawi",
//!     "https://www.google.com/maps/place/@43.2975,68.2529,17z",
//! )];
//! let nearest = locate_nearest(Coordinate::new(43.30, 68.25), &catalogue);
//! assert_eq!(nearest.map(|found| found.name), Some(catalogue[0].name.clone()));
//! ```

#![forbid(unsafe_code)]

pub use tourguide_core::{
    Coordinate, Destination, DestinationFilter, DestinationId, DestinationStore, EARTH_RADIUS_KM,
    FEATURED_LIMIT, LocateResult, MemoryDestinationStore, NearestDestination,
    extract_coordinate, featured, haversine_km, locate_nearest,
};

#[cfg(feature = "store-sqlite")]
pub use tourguide_core::{SqliteDestinationStore, SqliteDestinationStoreError};
