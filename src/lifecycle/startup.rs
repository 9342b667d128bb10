//! Startup reporting.
//!
//! Logs where the gateway listens and which endpoints it serves, and whether
//! the provider credentials were found. The API key itself is never logged.

use std::net::SocketAddr;

use crate::config::{GatewayConfig, ProviderCredentials};

/// Example URLs of the two routed endpoints for a bound address.
pub fn endpoint_urls(addr: SocketAddr) -> (String, String) {
    let base = format!("http://localhost:{}", addr.port());
    (
        format!("{}/health", base),
        format!("{}/api/flights?origin=JFK&destination=LAX&date=2023-12-25", base),
    )
}

/// Emit the startup banner.
pub fn log_startup(config: &GatewayConfig, credentials: &ProviderCredentials, addr: SocketAddr) {
    let (health, flights) = endpoint_urls(addr);

    tracing::info!(
        service = %config.service.name,
        port = addr.port(),
        api_key_configured = credentials.api_key().is_some(),
        provider_configured = credentials.is_configured(),
        api_host = credentials.api_host().unwrap_or("<not configured>"),
        provider_timeout_secs = config.provider.timeout_secs,
        "Flight gateway starting"
    );
    tracing::info!(url = %health, "Health endpoint");
    tracing::info!(url = %flights, "Flights endpoint");
    if !credentials.is_configured() {
        tracing::warn!("Provider credentials incomplete; flight searches will fail until RAPIDAPI_KEY and RAPIDAPI_HOST are set");
    }
    tracing::info!("Press Ctrl+C to stop the server");
}
