//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! gateway.toml (optional)          .env (optional)
//!     → loader.rs (parse)              → secrets.rs (dotenv entries,
//!     → validation.rs (semantic)          process env fallback)
//!     → GatewayConfig                  → ProviderCredentials
//!               ╲                      ╱
//!                shared via Arc to handlers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults to allow running without a file
//! - Secrets are kept apart from the TOML so the file can be committed

pub mod loader;
pub mod schema;
pub mod secrets;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{GatewayConfig, ListenerConfig, ObservabilityConfig, ProviderConfig, ServiceConfig};
pub use secrets::ProviderCredentials;
