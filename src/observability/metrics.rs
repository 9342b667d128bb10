//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by endpoint, status
//! - `provider_requests_total` (counter): provider calls by outcome
//! - `provider_request_duration_seconds` (histogram): provider latency
//!
//! Without an installed recorder the macros are no-ops, so tests and
//! deployments with metrics disabled pay nothing.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics endpoint"),
    }
}

/// Count one request served by the gateway.
pub fn record_request(endpoint: &'static str, status: u16) {
    metrics::counter!(
        "gateway_requests_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);
}

/// Count one provider call and record its latency.
pub fn record_provider_call(outcome: &'static str, started: Instant) {
    metrics::counter!("provider_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("provider_request_duration_seconds", "outcome" => outcome)
        .record(started.elapsed().as_secs_f64());
}
