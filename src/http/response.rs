//! Response bodies and error mapping.
//!
//! # Responsibilities
//! - Success bodies: bare JSON array of flights, health status object
//! - Error envelope `{"error": true, "message": ...}` for every search failure
//! - Map `SearchError` to its HTTP status

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::flights::SearchError;

/// JSON body of every failed search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: bool,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    /// RFC 3339 / ISO-8601 instant in UTC.
    pub timestamp: String,
}

impl HealthStatus {
    pub fn healthy(service: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorEnvelope::new(self.to_string()))).into_response()
    }
}
