//! Great-circle distance on a spherical Earth.

use crate::Coordinate;

/// Mean Earth radius used by [`haversine_km`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Surface distance between two coordinates in kilometres.
///
/// Uses the Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`]. The
/// result is non-negative and symmetric in its arguments. Inputs outside the
/// valid latitude/longitude ranges are not rejected; they flow through the
/// trigonometry unchanged.
///
/// # Examples
/// ```
/// use tourguide_core::{Coordinate, haversine_km};
///
/// let turkestan = Coordinate::new(43.2975, 68.2529);
/// let almaty = Coordinate::new(43.2220, 76.8512);
///
/// let km = haversine_km(turkestan, almaty);
/// assert!((770.0..=800.0).contains(&km));
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the Haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    // Rounding can push the term fractionally above one near antipodes.
    let half_chord = ((delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2))
    .min(1.0);
    let central_angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());

    EARTH_RADIUS_KM * central_angle
}
