//! Resolves the place an entry belongs to.

use super::lifecycle::new_id;
use super::model::Place;
use tracing::{debug, info};

/// Outcome of [`resolve`]: the place to tag the entry with, and the place
/// collection including any place created along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub place_id: Option<String>,
    pub places: Vec<Place>,
}

impl Resolution {
    /// Whether resolution appended a new place to the collection.
    pub fn created_place(&self, before: &[Place]) -> bool {
        self.places.len() > before.len()
    }
}

/// Finds or creates the place for an entry.
///
/// An `explicit_place_id` wins and leaves `places` unchanged. Otherwise, when
/// both `location_text` and `country_text` are non-empty, the first place
/// whose `name` equals the location and whose `admin_area` equals the country
/// (case-sensitive) is used. If none matches, a new place is appended with
/// zeroed coordinates and counters. With neither an explicit id nor both
/// texts, the entry stays unplaced.
///
/// # Examples
///
/// ```
/// use travelog::journal_core::resolver::resolve;
/// use travelog::seed;
///
/// let places = seed::places();
/// let resolution = resolve(&places, Some("Paris"), Some("Île-de-France"), None);
/// assert_eq!(resolution.place_id.as_deref(), Some("1"));
/// assert_eq!(resolution.places.len(), places.len());
/// ```
pub fn resolve(
    places: &[Place],
    location_text: Option<&str>,
    country_text: Option<&str>,
    explicit_place_id: Option<&str>,
) -> Resolution {
    if let Some(place_id) = explicit_place_id {
        return Resolution {
            place_id: Some(place_id.to_string()),
            places: places.to_vec(),
        };
    }

    let location = location_text.map(str::trim).filter(|s| !s.is_empty());
    let country = country_text.map(str::trim).filter(|s| !s.is_empty());
    let (Some(location), Some(country)) = (location, country) else {
        debug!("No place reference and incomplete location text; entry stays unplaced");
        return Resolution {
            place_id: None,
            places: places.to_vec(),
        };
    };

    if let Some(existing) = places
        .iter()
        .find(|place| place.name == location && place.admin_area == country)
    {
        debug!("Resolved '{}, {}' to place {}", location, country, existing.id);
        return Resolution {
            place_id: Some(existing.id.clone()),
            places: places.to_vec(),
        };
    }

    let place = Place {
        id: new_id(),
        name: location.to_string(),
        country_code: country.to_string(),
        admin_area: country.to_string(),
        locality: location.to_string(),
        lat: 0.0,
        lon: 0.0,
        thumbnail_url: None,
        entry_count: 0,
        draft_count: 0,
    };
    info!("Created place {} for '{}, {}'", place.id, location, country);

    let place_id = place.id.clone();
    let mut places = places.to_vec();
    places.push(place);
    Resolution {
        place_id: Some(place_id),
        places,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_explicit_place_wins_over_text() {
        let places = seed::places();

        let resolution = resolve(&places, Some("Rome"), Some("Italy"), Some("2"));

        assert_eq!(resolution.place_id.as_deref(), Some("2"));
        assert_eq!(resolution.places, places);
    }

    #[test]
    fn test_unknown_location_creates_place() {
        let places = seed::places();

        let resolution = resolve(&places, Some("Rome"), Some("Italy"), None);

        assert!(resolution.created_place(&places));
        let rome = resolution.places.last().unwrap();
        assert_eq!(resolution.place_id.as_deref(), Some(rome.id.as_str()));
        assert_eq!(rome.name, "Rome");
        assert_eq!(rome.locality, "Rome");
        assert_eq!(rome.country_code, "Italy");
        assert_eq!(rome.admin_area, "Italy");
        assert_eq!((rome.lat, rome.lon), (0.0, 0.0));
        assert_eq!((rome.entry_count, rome.draft_count), (0, 0));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let places = seed::places();

        let resolution = resolve(&places, Some("paris"), Some("Île-de-France"), None);

        assert_ne!(resolution.place_id.as_deref(), Some("1"));
        assert!(resolution.created_place(&places));
    }

    #[test]
    fn test_match_requires_admin_area_not_country_name() {
        // Seed entries carry "France" as country, but the place's admin area is the region.
        let places = seed::places();

        let resolution = resolve(&places, Some("Paris"), Some("France"), None);

        assert!(resolution.created_place(&places));
    }

    #[test]
    fn test_incomplete_text_leaves_entry_unplaced() {
        let places = seed::places();

        for (location, country) in [
            (Some("Rome"), None),
            (None, Some("Italy")),
            (Some("   "), Some("Italy")),
            (None, None),
        ] {
            let resolution = resolve(&places, location, country, None);
            assert!(resolution.place_id.is_none());
            assert_eq!(resolution.places, places);
        }
    }
}
