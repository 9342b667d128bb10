//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, CORS)
//! - Bind server to listener
//! - Stop accepting and drain on shutdown

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::{GatewayConfig, ProviderCredentials};
use crate::flights::FlightSearch;
use crate::http::{cors, handlers, request};
use crate::lifecycle::shutdown;

/// Application state injected into handlers.
///
/// Everything here is read-only for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub search: FlightSearch,
    pub service_name: Arc<str>,
}

/// HTTP server for the flight gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and secrets.
    pub fn new(config: GatewayConfig, credentials: ProviderCredentials) -> Result<Self, reqwest::Error> {
        let search = FlightSearch::new(&config.provider, Arc::new(credentials))?;

        let state = AppState {
            search,
            service_name: Arc::from(config.service.name.as_str()),
        };

        let router = Self::build_router(state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        let router = Router::new()
            .route("/health", get(handlers::health))
            .route("/api/flights", get(handlers::search_flights))
            .fallback(handlers::not_found)
            .with_state(state);

        request::with_request_tracing(cors::with_cors(router))
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown_rx` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
