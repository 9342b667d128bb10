//! Flight search orchestration.
//!
//! # Flow
//! ```text
//! SearchParams
//!     → validate (SearchQuery::from_params)      400 on failure, no I/O
//!     → authorize (ProviderCredentials)          500 when a secret is missing
//!     → build provider URL + auth headers
//!     → single GET, fixed timeout                502 on non-2xx, 500 otherwise
//!     → transform(payload, destination)
//! ```
//!
//! Exactly one provider call per search. There is no retry and no caching.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use url::Url;

use crate::config::{ProviderConfig, ProviderCredentials};
use crate::flights::error::{SearchError, SearchResult};
use crate::flights::transform::transform;
use crate::flights::types::{NormalizedFlight, SearchParams, SearchQuery};
use crate::observability::metrics;

pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Drives one search against the departures-by-airport endpoint.
#[derive(Clone)]
pub struct FlightSearch {
    client: reqwest::Client,
    credentials: Arc<ProviderCredentials>,
    scheme: String,
    timeout: Duration,
}

impl FlightSearch {
    /// Create the orchestrator. The HTTP client is built once and reused.
    pub fn new(
        config: &ProviderConfig,
        credentials: Arc<ProviderCredentials>,
    ) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let mut builder = reqwest::Client::builder().timeout(timeout);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            credentials,
            scheme: config.scheme.clone(),
            timeout,
        })
    }

    /// Validate raw parameters, then search.
    pub async fn search_params(&self, params: SearchParams) -> SearchResult<Vec<NormalizedFlight>> {
        let query = SearchQuery::from_params(params)?;
        self.search(&query).await
    }

    /// Fetch the day's departures from `query.origin` and normalize them.
    pub async fn search(&self, query: &SearchQuery) -> SearchResult<Vec<NormalizedFlight>> {
        let api_key = self
            .credentials
            .api_key()
            .ok_or(SearchError::NotConfigured("API key"))?;
        let api_host = self
            .credentials
            .api_host()
            .ok_or(SearchError::NotConfigured("API host"))?;

        let url = self.provider_url(api_host, query)?;

        tracing::debug!(
            origin = %query.origin,
            date = %query.date,
            destination = ?query.destination,
            url = %url,
            "Requesting provider departures"
        );

        let started = Instant::now();
        let payload = match self.fetch(url, api_key, api_host).await {
            Ok(payload) => {
                metrics::record_provider_call("success", started);
                payload
            }
            Err(e) => {
                metrics::record_provider_call(e.kind(), started);
                match &e {
                    SearchError::Upstream { status, .. } => {
                        tracing::warn!(origin = %query.origin, status, "Provider rejected request");
                    }
                    _ => {
                        tracing::error!(origin = %query.origin, error = %e, "Provider call failed");
                    }
                }
                return Err(e);
            }
        };

        let flights = transform(&payload, query.destination.as_deref());

        tracing::info!(
            origin = %query.origin,
            date = %query.date,
            destination = ?query.destination,
            flights = flights.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Flight search complete"
        );

        Ok(flights)
    }

    /// `<scheme>://<host>/flights/airports/iata/<origin>/<date>T00:00/<date>T23:59?withLeg=true`
    pub fn provider_url(&self, host: &str, query: &SearchQuery) -> SearchResult<Url> {
        let mut url = Url::parse(&format!("{}://{}/", self.scheme, host))
            .map_err(|e| SearchError::Internal(format!("invalid provider host '{}': {}", host, e)))?;

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                SearchError::Internal(format!("provider host '{}' cannot be a base URL", host))
            })?;
            segments
                .pop_if_empty()
                .extend(["flights", "airports", "iata"])
                .push(&query.origin)
                .push(&query.window_start())
                .push(&query.window_end());
        }
        url.query_pairs_mut().append_pair("withLeg", "true");

        Ok(url)
    }

    async fn fetch(&self, url: Url, api_key: &str, api_host: &str) -> SearchResult<Value> {
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, api_key)
            .header(API_HOST_HEADER, api_host)
            .send()
            .await
            .map_err(|e| self.describe(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.describe(e))?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn describe(&self, err: reqwest::Error) -> SearchError {
        if err.is_timeout() {
            SearchError::Internal(format!(
                "provider did not respond within {} seconds",
                self.timeout.as_secs()
            ))
        } else {
            err.into()
        }
    }
}

impl std::fmt::Debug for FlightSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlightSearch")
            .field("scheme", &self.scheme)
            .field("timeout_secs", &self.timeout.as_secs())
            .field("credentials", &self.credentials)
            .finish()
    }
}
