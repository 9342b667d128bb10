//! Failure taxonomy of a flight search.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that can end a flight search.
///
/// The `Display` text is the client-facing message of the error envelope.
#[derive(Debug, Error)]
pub enum SearchError {
    /// `origin` or `date` missing after normalization.
    #[error("Missing origin or date parameters.")]
    MissingParameters,

    /// A required provider secret is absent.
    #[error("{0} not configured in .env file.")]
    NotConfigured(&'static str),

    /// The provider answered with a non-2xx status.
    #[error("API Error {status}: {reason}")]
    Upstream { status: u16, reason: String },

    /// Network failure, timeout, or undecodable provider body.
    #[error("Server Error: {0}")]
    Internal(String),
}

impl SearchError {
    /// HTTP status reported to the client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::MissingParameters => StatusCode::BAD_REQUEST,
            SearchError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SearchError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            SearchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::MissingParameters => "validation",
            SearchError::NotConfigured(_) => "config",
            SearchError::Upstream { .. } => "upstream",
            SearchError::Internal(_) => "internal",
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        let cause = if err.is_timeout() {
            format!("provider request timed out ({})", err)
        } else {
            err.to_string()
        };
        SearchError::Internal(cause)
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Internal(format!("invalid provider response: {}", err))
    }
}

pub type SearchResult<T> = Result<T, SearchError>;
