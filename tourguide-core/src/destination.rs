use std::{convert::Infallible, fmt, str::FromStr};

use crate::{Coordinate, map_link::extract_coordinate};

/// Identifier of a [`Destination`].
///
/// Catalogues exported from the site backend use integer keys, while
/// hand-written catalogues often use slugs. Both forms are accepted; numeric
/// identifiers order before textual ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum DestinationId {
    /// Integer primary key.
    Numeric(u64),
    /// Free-form string key such as a slug.
    Text(String),
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Parses user-supplied keys: all-digit input becomes [`DestinationId::Numeric`],
/// anything else is kept as text.
impl FromStr for DestinationId {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Ok(trimmed
            .parse::<u64>()
            .map_or_else(|_| Self::Text(trimmed.to_owned()), Self::Numeric))
    }
}

impl From<u64> for DestinationId {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

impl From<String> for DestinationId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for DestinationId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A place promoted by the site.
///
/// Only `id`, `name` and `map_link` matter to the locator; the remaining
/// fields are carried for listings. On the wire the map link is named
/// `google_maps_url` to match the exported catalogue rows.
///
/// # Examples
/// ```
/// use tourguide_core::{Coordinate, Destination};
///
/// let otrar = Destination::new(2_u64, "Otrar", "https://maps.example.com/@42.8529,68.3005,15z")
///     .with_district("Otyrar");
///
/// assert_eq!(otrar.coordinate(), Some(Coordinate::new(42.8529, 68.3005)));
/// assert_eq!(otrar.district.as_deref(), Some("Otyrar"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination {
    /// Unique identifier.
    pub id: DestinationId,
    /// Display name.
    pub name: String,
    /// Short marketing description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Image URL shown on destination cards.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: String,
    /// Map-service link that may embed an `@lat,lng` segment.
    #[cfg_attr(feature = "serde", serde(rename = "google_maps_url"))]
    pub map_link: String,
    /// Administrative district, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub district: Option<String>,
    /// Long-form information shown on the details page.
    #[cfg_attr(feature = "serde", serde(default))]
    pub detailed_info: Option<String>,
    /// URL of an audio guide recording.
    #[cfg_attr(feature = "serde", serde(default))]
    pub audio_file: Option<String>,
}

impl Destination {
    /// Construct a destination with empty display fields.
    pub fn new(
        id: impl Into<DestinationId>,
        name: impl Into<String>,
        map_link: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            image: String::new(),
            map_link: map_link.into(),
            district: None,
            detailed_info: None,
            audio_file: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the district.
    #[must_use]
    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    /// Coordinate embedded in the map link, if any.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        extract_coordinate(&self.map_link)
    }
}
