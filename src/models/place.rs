// src/models/place.rs
// DOCUMENTATION: Public API data structures
// PURPOSE: Request bodies and response projections exposed by the relay

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default search radius in meters when the client omits one
pub const DEFAULT_RADIUS_METERS: u32 = 5000;

/// Default photo width in pixels when the client omits maxWidth
pub const DEFAULT_PHOTO_MAX_WIDTH: u32 = 400;

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Location as received from clients, with both coordinates optional so
/// partial input can be rejected with a validation error instead of a
/// deserialization failure.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LocationInput {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl LocationInput {
    /// Returns the concrete location when both coordinates are present.
    pub fn resolve(&self) -> Option<Location> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Location { lat, lng }),
            _ => None,
        }
    }
}

/// Body of POST /api/places/nearby
#[derive(Debug, Deserialize)]
pub struct NearbySearchRequest {
    pub location: Option<LocationInput>,
    pub radius: Option<u32>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub keyword: Option<String>,
}

/// Body of POST /api/places/search
#[derive(Debug, Deserialize)]
pub struct TextSearchRequest {
    pub query: Option<String>,
    pub location: Option<LocationInput>,
    pub radius: Option<u32>,
}

/// Query string of GET /api/places/photo/{photoReference}
#[derive(Debug, Deserialize)]
pub struct PhotoQuery {
    #[serde(rename = "maxWidth")]
    pub max_width: Option<u32>,
}

/// Reduced projection of an upstream place record
/// DOCUMENTATION: The relay returns only this subset to clients; defaults
/// are applied where the upstream omits a field (rating 0, count 0,
/// price level 1). At most one photo entry survives the projection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub rating: f64,
    pub user_ratings_total: i64,
    pub price_level: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    pub types: Vec<String>,
    pub photos: Vec<PhotoSummary>,
}

/// Single photo reference carried inside a PlaceSummary
#[derive(Debug, Clone, Serialize)]
pub struct PhotoSummary {
    pub reference: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// Envelope for the two search operations
#[derive(Debug, Serialize)]
pub struct PlacesResponse {
    pub success: bool,
    pub places: Vec<PlaceSummary>,
    pub count: usize,
}

impl PlacesResponse {
    pub fn new(places: Vec<PlaceSummary>) -> Self {
        let count = places.len();
        PlacesResponse {
            success: true,
            places,
            count,
        }
    }
}

/// Envelope for Place Details; `place` is the upstream result object
/// passed through unmodified.
#[derive(Debug, Serialize)]
pub struct PlaceDetailResponse {
    pub success: bool,
    pub place: Value,
}

/// Envelope for the Photo URL operation
#[derive(Debug, Serialize)]
pub struct PhotoUrlResponse {
    pub success: bool,
    pub url: String,
}
