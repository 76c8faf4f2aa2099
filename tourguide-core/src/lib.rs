//! Core domain types for the Tourguide destination locator.
//!
//! The crate models tourist destinations whose map links may embed a
//! coordinate, and answers "which destination is closest to me?" with a pure
//! linear scan. Destination catalogues are read through the
//! [`DestinationStore`] trait and narrowed with [`DestinationFilter`].
//!
//! # Examples
//!
//! ```
//! use tourguide_core::{Coordinate, Destination, locate_nearest};
//!
//! let mausoleum = Destination::new(
//!     1_u64,
//!     "Mausoleum of Khoja Ahmed Yasawi",
//!     "https://www.google.com/maps/place/@43.2975,68.2529,17z",
//! );
//! let user = Coordinate::new(43.30, 68.25);
//!
//! let nearest = locate_nearest(user, [&mausoleum]).expect("link embeds a coordinate");
//! assert_eq!(nearest.id, mausoleum.id);
//! assert!(nearest.distance_km < 1.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalogue;
mod coordinate;
mod destination;
pub mod distance;
mod locate;
pub mod map_link;
pub mod store;

pub use catalogue::{DestinationFilter, FEATURED_LIMIT, featured};
pub use coordinate::Coordinate;
pub use destination::{Destination, DestinationId};
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use locate::{LocateResult, NearestDestination, locate_nearest};
pub use map_link::extract_coordinate;
pub use store::{DestinationStore, MemoryDestinationStore};

#[cfg(feature = "store-sqlite")]
pub use store::{SqliteDestinationStore, SqliteDestinationStoreError};
