//! Nearest-destination search.

use std::fmt;

use log::debug;

use crate::{Coordinate, Destination, DestinationId, haversine_km};

/// The destination closest to the user and how far away it is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearestDestination {
    /// Identifier of the winning destination.
    pub id: DestinationId,
    /// Display name of the winning destination.
    pub name: String,
    /// Great-circle distance from the user in kilometres.
    pub distance_km: f64,
}

/// Outcome of [`locate_nearest`]; `None` when no destination could be placed.
pub type LocateResult = Option<NearestDestination>;

impl fmt::Display for NearestDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.0} km from you)", self.name, self.distance_km)
    }
}

/// Find the destination whose embedded coordinate is closest to `user`.
///
/// Destinations whose map link carries no `@lat,lng` segment are skipped.
/// When several destinations share the minimum distance the first one in
/// iteration order wins. The function is pure and never fails; an empty or
/// entirely unplaceable input yields `None`.
///
/// # Examples
/// ```
/// use tourguide_core::{Coordinate, Destination, DestinationId, locate_nearest};
///
/// let destinations = [
///     Destination::new(1_u64, "Turkestan", "https://maps.example.com/@43.297,68.252"),
///     Destination::new(2_u64, "Shymkent", "https://maps.example.com/@42.3417,69.5901"),
///     Destination::new(3_u64, "Sauran", "https://maps.example.com/place/Sauran"),
/// ];
///
/// let nearest = locate_nearest(Coordinate::new(42.30, 69.60), &destinations);
/// assert_eq!(nearest.map(|found| found.id), Some(DestinationId::Numeric(2)));
///
/// assert_eq!(locate_nearest(Coordinate::new(0.0, 0.0), &[]), None);
/// ```
#[must_use]
pub fn locate_nearest<'a, I>(user: Coordinate, destinations: I) -> LocateResult
where
    I: IntoIterator<Item = &'a Destination>,
{
    let mut best: Option<(&Destination, f64)> = None;

    for destination in destinations {
        let Some(position) = destination.coordinate() else {
            debug!(
                "skipping destination {} without an embedded coordinate",
                destination.id
            );
            continue;
        };
        let distance_km = haversine_km(user, position);
        // Strict comparison keeps the earliest destination on ties.
        if best.is_none_or(|(_, best_km)| distance_km < best_km) {
            best = Some((destination, distance_km));
        }
    }

    let nearest = best.map(|(destination, distance_km)| NearestDestination {
        id: destination.id.clone(),
        name: destination.name.clone(),
        distance_km,
    });
    match &nearest {
        Some(found) => debug!("nearest destination to {user} is {found}"),
        None => debug!("no destination near {user} could be located"),
    }
    nearest
}
