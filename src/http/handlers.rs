//! Endpoint handlers.

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::flights::SearchParams;
use crate::http::response::HealthStatus;
use crate::http::server::AppState;
use crate::observability::metrics;

/// `GET /health`: always 200, independent of provider configuration.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    metrics::record_request("health", 200);
    Json(HealthStatus::healthy(&state.service_name))
}

/// `GET /api/flights?origin=&destination=&date=`
///
/// Repeated keys keep their first value instead of being rejected.
pub async fn search_flights(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Response {
    let params = SearchParams::from_query(raw.as_deref().unwrap_or_default());

    match state.search.search_params(params).await {
        Ok(flights) => {
            metrics::record_request("flights", 200);
            Json(flights).into_response()
        }
        Err(e) => {
            metrics::record_request("flights", e.status_code().as_u16());
            tracing::debug!(kind = e.kind(), message = %e, "Flight search failed");
            e.into_response()
        }
    }
}

/// Any unrouted path.
pub async fn not_found() -> (StatusCode, &'static str) {
    metrics::record_request("unknown", 404);
    (StatusCode::NOT_FOUND, "Not Found")
}
