//! JSON payload shapes returned by the HTTP API.

use serde::Serialize;

pub mod reservations;
pub mod restaurants;

/// Opaque error payload for boundary and infrastructure failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl ErrorResponse {
    pub fn bad_request(details: impl Into<String>) -> Self {
        Self {
            error: "Bad request".to_string(),
            details: details.into(),
        }
    }

    pub fn server_error(details: impl Into<String>) -> Self {
        Self {
            error: "Server error".to_string(),
            details: details.into(),
        }
    }
}
