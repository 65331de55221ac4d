// src/services/place_service.rs
// DOCUMENTATION: Projection of upstream place records
// PURPOSE: Reduce upstream payloads to the relay's public PlaceSummary shape

use crate::models::{PhotoSummary, PlaceSummary};
use crate::services::google_places_client::GooglePlace;

/// Place projection service
/// DOCUMENTATION: Stateless; one mapping is shared by Nearby Search and
/// Text Search so optional upstream fields are handled uniformly.
pub struct PlaceService;

impl PlaceService {
    /// Project one upstream record into a PlaceSummary.
    ///
    /// Defaults when the upstream omits a field: rating 0, rating count 0,
    /// price level 1, empty types. An upstream price level of 0 (free
    /// places) is floored to 1 as well, so clients always see a level of
    /// at least 1. The photo list is truncated to its first entry. A place
    /// without geometry keeps no location rather than failing the whole
    /// response.
    pub fn to_summary(place: GooglePlace) -> PlaceSummary {
        let location = place.geometry.and_then(|g| g.location);
        let open_now = place.opening_hours.and_then(|h| h.open_now);

        // Nearby results carry the short vicinity string; text search
        // results usually only carry formatted_address.
        let address = place
            .vicinity
            .or(place.formatted_address)
            .unwrap_or_default();

        let photos = place
            .photos
            .into_iter()
            .take(1)
            .map(|photo| PhotoSummary {
                reference: photo.photo_reference,
                width: photo.width,
                height: photo.height,
            })
            .collect();

        PlaceSummary {
            id: place.place_id,
            name: place.name,
            address,
            location,
            rating: place.rating.unwrap_or(0.0),
            user_ratings_total: place.user_ratings_total.unwrap_or(0),
            price_level: place.price_level.map_or(1, |level| level.max(1)),
            open_now,
            types: place.types,
            photos,
        }
    }

    /// Project a whole result set
    pub fn summarize(results: Vec<GooglePlace>) -> Vec<PlaceSummary> {
        results.into_iter().map(Self::to_summary).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use crate::services::google_places_client::{
        GoogleGeometry, GoogleOpeningHours, GooglePhoto,
    };

    fn sparse_place() -> GooglePlace {
        GooglePlace {
            place_id: "p1".to_string(),
            name: "Sparse Cafe".to_string(),
            vicinity: None,
            formatted_address: None,
            geometry: None,
            rating: None,
            user_ratings_total: None,
            price_level: None,
            opening_hours: None,
            types: Vec::new(),
            photos: Vec::new(),
        }
    }

    #[test]
    fn defaults_applied_for_missing_fields() {
        let summary = PlaceService::to_summary(sparse_place());

        assert_eq!(summary.rating, 0.0);
        assert_eq!(summary.user_ratings_total, 0);
        assert_eq!(summary.price_level, 1);
        assert_eq!(summary.address, "");
        assert!(summary.location.is_none());
        assert!(summary.open_now.is_none());
        assert!(summary.types.is_empty());
        assert!(summary.photos.is_empty());
    }

    #[test]
    fn price_level_of_zero_floors_to_one() {
        let mut place = sparse_place();
        place.price_level = Some(0);
        assert_eq!(PlaceService::to_summary(place).price_level, 1);

        let mut place = sparse_place();
        place.price_level = Some(2);
        assert_eq!(PlaceService::to_summary(place).price_level, 2);
    }

    #[test]
    fn photo_list_truncated_to_first_entry() {
        let mut place = sparse_place();
        place.photos = vec![
            GooglePhoto {
                photo_reference: "first".to_string(),
                width: Some(640),
                height: Some(480),
            },
            GooglePhoto {
                photo_reference: "second".to_string(),
                width: None,
                height: None,
            },
            GooglePhoto {
                photo_reference: "third".to_string(),
                width: None,
                height: None,
            },
        ];

        let summary = PlaceService::to_summary(place);
        assert_eq!(summary.photos.len(), 1);
        assert_eq!(summary.photos[0].reference, "first");
        assert_eq!(summary.photos[0].width, Some(640));
    }

    #[test]
    fn vicinity_preferred_over_formatted_address() {
        let mut place = sparse_place();
        place.vicinity = Some("Calle Mayor".to_string());
        place.formatted_address = Some("Calle Mayor 1, Madrid".to_string());

        let summary = PlaceService::to_summary(place);
        assert_eq!(summary.address, "Calle Mayor");
    }

    #[test]
    fn populated_fields_carry_through() {
        let mut place = sparse_place();
        place.geometry = Some(GoogleGeometry {
            location: Some(Location {
                lat: 40.4168,
                lng: -3.7038,
            }),
        });
        place.rating = Some(4.5);
        place.user_ratings_total = Some(120);
        place.price_level = Some(3);
        place.opening_hours = Some(GoogleOpeningHours {
            open_now: Some(true),
        });
        place.types = vec!["restaurant".to_string(), "food".to_string()];

        let summary = PlaceService::to_summary(place);
        assert_eq!(summary.rating, 4.5);
        assert_eq!(summary.user_ratings_total, 120);
        assert_eq!(summary.price_level, 3);
        assert_eq!(summary.open_now, Some(true));
        assert_eq!(summary.location.map(|l| l.lat), Some(40.4168));
        assert_eq!(summary.types.len(), 2);
    }
}
