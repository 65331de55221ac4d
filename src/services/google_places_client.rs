// src/services/google_places_client.rs
// DOCUMENTATION: Google Places API client
// PURPOSE: Handle communication with the upstream places-lookup API

use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::RelayError;
use crate::models::{Location, DEFAULT_PHOTO_MAX_WIDTH};

/// Fields requested from the details endpoint. The raw result object is
/// passed through to clients, so this set bounds what they can see.
const DETAILS_FIELDS: &str =
    "name,rating,formatted_phone_number,opening_hours,website,price_level,reviews";

/// Google Places API client
/// DOCUMENTATION: Holds the API key and base URL; one instance is shared
/// across all requests. The base URL is overridable so tests can point
/// the client at a stub server.
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Envelope of the nearby-search and text-search responses
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    results: Vec<GooglePlace>,
}

/// Envelope of the place-details response
#[derive(Debug, Deserialize)]
struct DetailsEnvelope {
    #[serde(default)]
    result: Value,
}

/// Individual place from the upstream search endpoints
/// DOCUMENTATION: Every field the upstream may omit is optional, so a
/// sparse record deserializes cleanly instead of failing the request.
#[derive(Debug, Clone, Deserialize)]
pub struct GooglePlace {
    pub place_id: String,
    pub name: String,
    pub vicinity: Option<String>,
    pub formatted_address: Option<String>,
    pub geometry: Option<GoogleGeometry>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<i64>,
    pub price_level: Option<i64>,
    pub opening_hours: Option<GoogleOpeningHours>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub photos: Vec<GooglePhoto>,
}

/// Geographic location from the upstream
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleGeometry {
    pub location: Option<Location>,
}

/// Opening hours metadata
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleOpeningHours {
    pub open_now: Option<bool>,
}

/// Photo reference from the upstream
#[derive(Debug, Clone, Deserialize)]
pub struct GooglePhoto {
    pub photo_reference: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl GooglePlacesClient {
    /// Create a new client against the production upstream
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(
            api_key,
            "https://maps.googleapis.com/maps/api/place".to_string(),
        )
    }

    /// Create a client against an arbitrary base URL (stub servers in tests)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Search for places near a geographic point
    ///
    /// # Arguments
    /// * `location` - Center point
    /// * `radius` - Search radius in meters
    /// * `place_type` - Optional type filter (e.g., "restaurant")
    /// * `keyword` - Optional keyword filter
    pub async fn nearby_search(
        &self,
        location: Location,
        radius: u32,
        place_type: Option<&str>,
        keyword: Option<&str>,
    ) -> Result<Vec<GooglePlace>, RelayError> {
        let url = format!("{}/nearbysearch/json", self.base_url);

        let mut params = HashMap::new();
        params.insert("location", format!("{},{}", location.lat, location.lng));
        params.insert("radius", radius.to_string());
        params.insert("key", self.api_key.clone());

        if let Some(pt) = place_type {
            params.insert("type", pt.to_string());
        }

        if let Some(kw) = keyword {
            params.insert("keyword", kw.to_string());
        }

        log::debug!(
            "nearby search: lat={}, lng={}, radius={}",
            location.lat,
            location.lng,
            radius
        );

        let envelope: SearchEnvelope = self.fetch_json(&url, &params).await?;
        Ok(envelope.results)
    }

    /// Free-text search for places, optionally biased around a location
    pub async fn text_search(
        &self,
        query: &str,
        location: Option<Location>,
        radius: u32,
    ) -> Result<Vec<GooglePlace>, RelayError> {
        let url = format!("{}/textsearch/json", self.base_url);

        let mut params = HashMap::new();
        params.insert("query", query.to_string());
        params.insert("key", self.api_key.clone());

        if let Some(loc) = location {
            params.insert("location", format!("{},{}", loc.lat, loc.lng));
            params.insert("radius", radius.to_string());
        }

        log::debug!("text search: query={:?}", query);

        let envelope: SearchEnvelope = self.fetch_json(&url, &params).await?;
        Ok(envelope.results)
    }

    /// Fetch the raw details object for a place
    /// DOCUMENTATION: Returns the upstream `result` value unmodified;
    /// the requested field set bounds its contents.
    pub async fn place_details(&self, place_id: &str) -> Result<Value, RelayError> {
        let url = format!("{}/details/json", self.base_url);

        let mut params = HashMap::new();
        params.insert("place_id", place_id.to_string());
        params.insert("fields", DETAILS_FIELDS.to_string());
        params.insert("key", self.api_key.clone());

        log::debug!("details lookup: place_id={}", place_id);

        let envelope: DetailsEnvelope = self.fetch_json(&url, &params).await?;
        Ok(envelope.result)
    }

    /// Assemble a photo URL from a photo reference
    ///
    /// No request is made; the string embeds the API key and is returned
    /// to the caller as-is.
    pub fn photo_url(&self, photo_reference: &str, max_width: Option<u32>) -> String {
        let width = max_width.unwrap_or(DEFAULT_PHOTO_MAX_WIDTH);
        format!(
            "{}/photo?maxwidth={}&photoreference={}&key={}",
            self.base_url, width, photo_reference, self.api_key
        )
    }

    /// Issue a GET and decode the JSON body.
    ///
    /// Non-2xx responses become `RelayError::Upstream` carrying the status
    /// and body; transport and decode failures become `RelayError::Internal`.
    /// Errors are logged without the request URL so the key never reaches
    /// the logs.
    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &HashMap<&str, String>,
    ) -> Result<T, RelayError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                log::error!("upstream request failed: {}", e);
                RelayError::Internal(format!("upstream request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("upstream error {}: {}", status, body);
            let details =
                serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body));
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                details,
            });
        }

        response.json::<T>().await.map_err(|e| {
            let e = e.without_url();
            log::error!("failed to parse upstream response: {}", e);
            RelayError::Internal(format!("malformed upstream payload: {}", e))
        })
    }
}
