//! Flight search pipeline.
//!
//! # Data Flow
//! ```text
//! query string
//!     → types.rs (SearchParams → SearchQuery, validation)
//!     → search.rs (provider request, single attempt)
//!     → transform.rs (departures → NormalizedFlight, destination filter)
//!         → duration.rs (elapsed time per flight)
//! ```

pub mod duration;
pub mod error;
pub mod search;
pub mod transform;
pub mod types;

pub use duration::{compute_duration, FALLBACK_DURATION};
pub use error::{SearchError, SearchResult};
pub use search::FlightSearch;
pub use transform::transform;
pub use types::{FlightEndpoint, NormalizedFlight, SearchParams, SearchQuery};
