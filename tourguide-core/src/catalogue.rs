//! Client-side narrowing of a destination catalogue.
//!
//! The landing page shows only the first [`FEATURED_LIMIT`] destinations,
//! and listings can be narrowed by district or by a fragment of the name.
//! All helpers keep the caller's ordering.

use crate::Destination;

/// Number of destinations shown before a listing is expanded.
pub const FEATURED_LIMIT: usize = 4;

/// Leading slice of `destinations` shown on the landing page.
///
/// # Examples
/// ```
/// use tourguide_core::{Destination, FEATURED_LIMIT, featured};
///
/// let all: Vec<_> = (1..=6_u64)
///     .map(|id| Destination::new(id, format!("stop {id}"), ""))
///     .collect();
/// assert_eq!(featured(&all).len(), FEATURED_LIMIT);
/// assert_eq!(featured(&all[..2]).len(), 2);
/// ```
#[must_use]
pub fn featured(destinations: &[Destination]) -> &[Destination] {
    destinations
        .get(..FEATURED_LIMIT)
        .unwrap_or(destinations)
}

/// Criteria for narrowing a destination listing.
///
/// Both criteria compare case-insensitively. An unset criterion matches
/// every destination, so the default filter keeps everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationFilter {
    /// Keep destinations in this district.
    pub district: Option<String>,
    /// Keep destinations whose name contains this fragment.
    pub name_contains: Option<String>,
}

impl DestinationFilter {
    /// Restrict the filter to a district.
    #[must_use]
    pub fn in_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    /// Restrict the filter to names containing `fragment`.
    #[must_use]
    pub fn name_contains(mut self, fragment: impl Into<String>) -> Self {
        self.name_contains = Some(fragment.into());
        self
    }

    /// Whether `destination` satisfies every configured criterion.
    #[must_use]
    pub fn matches(&self, destination: &Destination) -> bool {
        let district_matches = self.district.as_deref().is_none_or(|wanted| {
            destination
                .district
                .as_deref()
                .is_some_and(|district| district.trim().to_lowercase() == wanted.trim().to_lowercase())
        });
        let name_matches = self.name_contains.as_deref().is_none_or(|fragment| {
            destination
                .name
                .to_lowercase()
                .contains(&fragment.trim().to_lowercase())
        });
        district_matches && name_matches
    }

    /// Keep the destinations that match, preserving their order.
    pub fn apply<'a, I>(&self, destinations: I) -> Vec<&'a Destination>
    where
        I: IntoIterator<Item = &'a Destination>,
    {
        destinations
            .into_iter()
            .filter(|destination| self.matches(destination))
            .collect()
    }
}
