// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for the four relay operations
// PURPOSE: Validate input shape, call the upstream client, return projections

use actix_web::{web, HttpResponse, Responder};

use crate::errors::RelayError;
use crate::models::{
    NearbySearchRequest, PhotoQuery, PhotoUrlResponse, PlaceDetailResponse, PlacesResponse,
    TextSearchRequest, DEFAULT_RADIUS_METERS,
};
use crate::services::{GooglePlacesClient, PlaceService};

/// POST /api/places/nearby
/// Search for places around a location; results are projected to
/// PlaceSummary. Upstream non-2xx failures keep their status and body.
pub async fn nearby_search(
    client: web::Data<GooglePlacesClient>,
    req: web::Json<NearbySearchRequest>,
) -> Result<impl Responder, RelayError> {
    let body = req.into_inner();

    let location = body.location.and_then(|l| l.resolve()).ok_or_else(|| {
        RelayError::Validation("Invalid location data. Please provide lat and lng.".to_string())
    })?;

    // A radius of 0 is meaningless upstream; treat it like an absent one.
    let radius = body
        .radius
        .filter(|r| *r > 0)
        .unwrap_or(DEFAULT_RADIUS_METERS);

    let results = client
        .nearby_search(
            location,
            radius,
            body.place_type.as_deref(),
            body.keyword.as_deref(),
        )
        .await
        .map_err(|err| match err {
            upstream @ RelayError::Upstream { .. } => upstream,
            other => other.degraded("Failed to fetch nearby places"),
        })?;

    Ok(HttpResponse::Ok().json(PlacesResponse::new(PlaceService::summarize(results))))
}

/// GET /api/places/details/{place_id}
/// Raw passthrough of the upstream details object. Unlike Nearby Search,
/// upstream failures are reported as a generic 500 here.
pub async fn place_details(
    client: web::Data<GooglePlacesClient>,
    path: web::Path<String>,
) -> Result<impl Responder, RelayError> {
    let place_id = path.into_inner();
    if place_id.trim().is_empty() {
        return Err(RelayError::Validation("Place Id is required".to_string()));
    }

    let place = client
        .place_details(&place_id)
        .await
        .map_err(|err| err.degraded("Failed to fetch place details"))?;

    Ok(HttpResponse::Ok().json(PlaceDetailResponse {
        success: true,
        place,
    }))
}

/// GET /api/places/photo/{photo_reference}?maxWidth=
/// Assembles and returns a photo URL; no upstream call is made. The URL
/// embeds the API key, a known property of this contract.
pub async fn photo_url(
    client: web::Data<GooglePlacesClient>,
    path: web::Path<String>,
    query: web::Query<PhotoQuery>,
) -> Result<impl Responder, RelayError> {
    let reference = path.into_inner();
    if reference.trim().is_empty() {
        return Err(RelayError::Validation(
            "Photo reference is required".to_string(),
        ));
    }

    let url = client.photo_url(&reference, query.max_width);

    Ok(HttpResponse::Ok().json(PhotoUrlResponse { success: true, url }))
}

/// POST /api/places/search
/// Free-text search; results go through the same PlaceSummary projection
/// as Nearby Search. A location, when given, must carry both coordinates.
pub async fn text_search(
    client: web::Data<GooglePlacesClient>,
    req: web::Json<TextSearchRequest>,
) -> Result<impl Responder, RelayError> {
    let body = req.into_inner();

    let query = body
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| RelayError::Validation("Search query is required".to_string()))?;

    let location = match body.location {
        Some(input) => Some(input.resolve().ok_or_else(|| {
            RelayError::Validation(
                "Invalid location data. Please provide lat and lng.".to_string(),
            )
        })?),
        None => None,
    };

    let radius = body
        .radius
        .filter(|r| *r > 0)
        .unwrap_or(DEFAULT_RADIUS_METERS);

    let results = client
        .text_search(query, location, radius)
        .await
        .map_err(|err| err.degraded("Failed to search places"))?;

    Ok(HttpResponse::Ok().json(PlacesResponse::new(PlaceService::summarize(results))))
}

/// JSON extractor configuration mapping body deserialization failures to
/// the relay's `{error}` validation shape instead of actix's default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| RelayError::Validation(err.to_string()).into())
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/places")
            .route("/nearby", web::post().to(nearby_search))
            .route("/details/{place_id}", web::get().to(place_details))
            .route("/photo/{photo_reference}", web::get().to(photo_url))
            .route("/search", web::post().to(text_search)),
    );
}
