//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers + orchestrator produce:
//!     → logging.rs (structured log events, request spans)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - Secrets are never written to logs

pub mod logging;
pub mod metrics;
