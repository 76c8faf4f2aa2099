//! Best-effort coordinate extraction from map links.
//!
//! Map services commonly embed the viewport centre in a place URL as an
//! `@<lat>,<lng>` segment, for example
//! `https://www.google.com/maps/place/Turkestan/@43.2975,68.2529,14z`.
//! Links without that segment are normal input, so extraction returns
//! [`Option`] rather than an error and is total over every string.
//!
//! Extracted values are not range-checked: `@123.0,456.0` yields a
//! [`Coordinate`] with latitude `123.0`. Callers that need valid WGS84
//! positions can test [`Coordinate::is_within_bounds`].

use std::sync::LazyLock;

use regex::Regex;

use crate::Coordinate;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and is exercised by unit tests"
)]
static AT_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(-?[0-9]+\.?[0-9]*),(-?[0-9]+\.?[0-9]*)").expect("valid map link pattern")
});

/// Extract the first `@<lat>,<lng>` pair embedded in `link`.
///
/// Only the first occurrence is considered. `None` is returned when the
/// segment is absent or when either number does not parse to a finite value.
///
/// # Examples
/// ```
/// use tourguide_core::{Coordinate, extract_coordinate};
///
/// let link = "https://maps.example.com/place/@43.297,68.252,15z";
/// assert_eq!(extract_coordinate(link), Some(Coordinate::new(43.297, 68.252)));
///
/// assert_eq!(extract_coordinate("https://maps.example.com/place/Turkestan"), None);
/// ```
#[must_use]
pub fn extract_coordinate(link: &str) -> Option<Coordinate> {
    let captures = AT_SEGMENT.captures(link)?;
    let latitude = parse_component(captures.get(1)?.as_str())?;
    let longitude = parse_component(captures.get(2)?.as_str())?;
    Some(Coordinate::new(latitude, longitude))
}

fn parse_component(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}
