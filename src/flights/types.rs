//! Request and response types for flight search.

use serde::{Deserialize, Serialize};

use crate::flights::error::SearchError;

/// Raw query-string parameters of `GET /api/flights`.
///
/// Every field is optional so a missing parameter surfaces as a validation
/// error from [`SearchQuery::from_params`].
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
}

impl SearchParams {
    /// Parse a raw `application/x-www-form-urlencoded` query string.
    ///
    /// A repeated key keeps its first non-empty value. Empty values and
    /// unknown keys are ignored, so parsing never fails.
    pub fn from_query(raw: &str) -> Self {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            let slot = match &*key {
                "origin" => &mut params.origin,
                "destination" => &mut params.destination,
                "date" => &mut params.date,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }
}

/// A normalized, validated flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Departure airport IATA code, upper-cased.
    pub origin: String,
    /// Optional arrival airport filter, upper-cased.
    pub destination: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
}

impl SearchQuery {
    /// Normalize raw parameters and check the mandatory fields.
    ///
    /// This runs before any network activity.
    pub fn from_params(params: SearchParams) -> Result<Self, SearchError> {
        let origin = normalize_code(params.origin);
        let destination = normalize_code(params.destination);
        let date = params.date.unwrap_or_default().trim().to_string();

        if origin.is_empty() || date.is_empty() {
            return Err(SearchError::MissingParameters);
        }

        Ok(Self {
            origin,
            destination: Some(destination).filter(|d| !d.is_empty()),
            date,
        })
    }

    /// Start of the provider's local-time window for `date`.
    pub fn window_start(&self) -> String {
        format!("{}T00:00", self.date)
    }

    /// End of the provider's local-time window for `date`.
    pub fn window_end(&self) -> String {
        format!("{}T23:59", self.date)
    }
}

fn normalize_code(value: Option<String>) -> String {
    value.unwrap_or_default().trim().to_ascii_uppercase()
}

/// Airport and local time of one end of a flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightEndpoint {
    pub airport: String,
    pub time: String,
}

/// A provider departure reshaped for the client application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFlight {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    /// Elapsed time formatted as `"<H>h <M>m"`.
    pub duration: String,
    /// Always 0: the provider's leg data is not used to count connections.
    pub stops: u32,
    pub status: String,
}
