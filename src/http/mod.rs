//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup)
//!     → request.rs (request ID, trace span)
//!     → cors.rs (OPTIONS short-circuit, CORS headers on the way out)
//!     → handlers.rs (/health, /api/flights, 404 fallback)
//!     → response.rs (JSON bodies, error envelope)
//!     → Send to client
//! ```

pub mod cors;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::{ErrorEnvelope, HealthStatus};
pub use server::{AppState, HttpServer};
