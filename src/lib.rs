//! Flight search gateway library.
//!
//! Accepts flight-search requests, forwards them to the flight-data
//! provider, and reshapes the provider's departures into a flat,
//! frontend-friendly schema.

pub mod config;
pub mod flights;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::{GatewayConfig, ProviderCredentials};
pub use flights::{FlightSearch, NormalizedFlight, SearchError, SearchQuery};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
