use std::fmt;

use geo::{Coord, Point};

/// A WGS84 position in decimal degrees.
///
/// Values are not range-checked on construction; use
/// [`Coordinate::is_within_bounds`] when a caller needs that guarantee.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tourguide_core::Coordinate;
///
/// let turkestan = Coordinate::new(43.2975, 68.2529);
/// let coord: Coord<f64> = turkestan.into();
///
/// assert_eq!(coord.x, 68.2529);
/// assert_eq!(coord.y, 43.2975);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees, nominally within `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in degrees, nominally within `[-180, 180]`.
    pub longitude: f64,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Report whether both components lie within their valid ranges.
    ///
    /// # Examples
    /// ```
    /// use tourguide_core::Coordinate;
    ///
    /// assert!(Coordinate::new(43.2975, 68.2529).is_within_bounds());
    /// assert!(!Coordinate::new(91.0, 0.0).is_within_bounds());
    /// ```
    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Self {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Self(value.into())
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(value: Point<f64>) -> Self {
        value.0.into()
    }
}
