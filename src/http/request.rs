//! Request identification and tracing spans.
//!
//! # Responsibilities
//! - Generate a UUID `x-request-id` when the client did not send one
//! - Echo the ID back on the response
//! - Attach the ID to the per-request tracing span

use axum::{body::Body, http::Request, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Span for one inbound request, tagged with its request ID.
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    )
}

/// Wrap `router` with request-ID generation, propagation and tracing.
///
/// Layer order matters: the ID is set before the trace span is created.
pub fn with_request_tracing<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

