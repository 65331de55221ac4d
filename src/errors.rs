// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for the relay

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::{json, Value};
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure is converted to one of these at the
/// operation boundary; none escape as unhandled panics.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Missing or malformed required input. Always 400.
    #[error("{0}")]
    Validation(String),

    /// The upstream API responded with a non-2xx status.
    /// Status and body are propagated to the caller (Nearby Search only;
    /// other operations degrade this to `Internal`).
    #[error("upstream responded with status {status}")]
    Upstream { status: u16, details: Value },

    /// Any other failure: network error, malformed upstream payload,
    /// unexpected condition. Mapped to 500 with a generic message that
    /// never leaks the API key or internals.
    #[error("{0}")]
    Internal(String),

    /// Admission control ceiling exceeded.
    #[error("Too many requests, please try again later.")]
    RateLimited,
}

impl RelayError {
    /// Collapse everything except validation failures into a generic 500.
    ///
    /// Place Details and Text Search intentionally do not propagate the
    /// upstream status the way Nearby Search does; this mirrors the
    /// documented non-uniformity of the original contract.
    pub fn degraded(self, message: &str) -> RelayError {
        match self {
            RelayError::Validation(_) => self,
            _ => RelayError::Internal(message.to_string()),
        }
    }
}

/// Convert RelayError to HTTP response
/// DOCUMENTATION: Maps error types to status codes and `{error, details?}`
/// JSON bodies.
impl ResponseError for RelayError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            RelayError::Upstream { details, .. } => json!({
                "error": "Failed to fetch places from Google",
                "details": details,
            }),
            other => json!({ "error": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}
