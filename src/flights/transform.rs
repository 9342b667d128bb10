//! Reshapes the provider's departures payload into [`NormalizedFlight`]s.
//!
//! The payload is untrusted and often partial, so it is kept as a loose
//! `serde_json::Value` tree. All reads go through [`text_at`], which is the
//! single place where a missing or mistyped field becomes its default.

use serde_json::Value;

use crate::flights::duration::compute_duration;
use crate::flights::types::{FlightEndpoint, NormalizedFlight};

pub const DEFAULT_AIRLINE: &str = "unknown Airline";
pub const DEFAULT_STATUS: &str = "Scheduled";

const NUMBER: &[&str] = &["number"];
const AIRLINE_NAME: &[&str] = &["airline", "name"];
const STATUS: &[&str] = &["status"];
const DEPARTURE_IATA: &[&str] = &["departure", "airport", "iata"];
const DEPARTURE_LOCAL: &[&str] = &["departure", "scheduledTime", "local"];
const ARRIVAL_IATA: &[&str] = &["arrival", "airport", "iata"];
const ARRIVAL_LOCAL: &[&str] = &["arrival", "scheduledTime", "local"];

/// Walk `path` through nested objects. Any missing step yields `None`.
fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |node, key| node.get(*key))
}

/// The string at `path`, or `default` when absent or not a string.
fn text_at(value: &Value, path: &[&str], default: &str) -> String {
    lookup(value, path)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Transform a provider payload, keeping only flights that land at
/// `destination` when a non-empty filter is given.
///
/// Output order follows the payload's `departures` order.
pub fn transform(payload: &Value, destination: Option<&str>) -> Vec<NormalizedFlight> {
    let filter = destination
        .map(|d| d.trim().to_ascii_uppercase())
        .filter(|d| !d.is_empty());

    let departures = payload
        .get("departures")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    departures
        .iter()
        .filter(|record| match &filter {
            Some(code) => text_at(record, ARRIVAL_IATA, "").to_ascii_uppercase() == *code,
            None => true,
        })
        .map(normalize_record)
        .collect()
}

/// Map one provider departure record to the output schema.
pub fn normalize_record(record: &Value) -> NormalizedFlight {
    let number = text_at(record, NUMBER, "");
    let departure_time = text_at(record, DEPARTURE_LOCAL, "");
    let arrival_time = text_at(record, ARRIVAL_LOCAL, "");

    NormalizedFlight {
        id: number.clone(),
        airline: text_at(record, AIRLINE_NAME, DEFAULT_AIRLINE),
        flight_number: number,
        duration: compute_duration(&departure_time, &arrival_time),
        departure: FlightEndpoint {
            airport: text_at(record, DEPARTURE_IATA, ""),
            time: departure_time,
        },
        arrival: FlightEndpoint {
            airport: text_at(record, ARRIVAL_IATA, ""),
            time: arrival_time,
        },
        stops: 0,
        status: text_at(record, STATUS, DEFAULT_STATUS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flights::duration::FALLBACK_DURATION;
    use serde_json::json;

    fn departure(number: &str, to: &str) -> Value {
        json!({
            "number": number,
            "status": "Expected",
            "airline": { "name": "Lufthansa" },
            "departure": {
                "airport": { "iata": "FRA" },
                "scheduledTime": { "local": "2023-12-25 08:00+01:00" }
            },
            "arrival": {
                "airport": { "iata": to },
                "scheduledTime": { "local": "2023-12-25 09:10+01:00" }
            }
        })
    }

    #[test]
    fn full_record_is_mapped() {
        let flights = transform(&json!({ "departures": [departure("LH 400", "MUC")] }), None);

        assert_eq!(
            flights,
            vec![NormalizedFlight {
                id: "LH 400".into(),
                airline: "Lufthansa".into(),
                flight_number: "LH 400".into(),
                departure: FlightEndpoint {
                    airport: "FRA".into(),
                    time: "2023-12-25 08:00+01:00".into()
                },
                arrival: FlightEndpoint {
                    airport: "MUC".into(),
                    time: "2023-12-25 09:10+01:00".into()
                },
                duration: "1h 10m".into(),
                stops: 0,
                status: "Expected".into(),
            }]
        );
    }

    #[test]
    fn missing_departures_is_empty() {
        assert!(transform(&json!({}), None).is_empty());
        assert!(transform(&json!({ "departures": "nope" }), None).is_empty());
        assert!(transform(&Value::Null, Some("LAX")).is_empty());
    }

    #[test]
    fn empty_record_gets_defaults() {
        let flight = normalize_record(&json!({}));
        assert_eq!(flight.id, "");
        assert_eq!(flight.airline, DEFAULT_AIRLINE);
        assert_eq!(flight.status, DEFAULT_STATUS);
        assert_eq!(flight.departure, FlightEndpoint::default());
        assert_eq!(flight.arrival, FlightEndpoint::default());
        assert_eq!(flight.duration, FALLBACK_DURATION);
        assert_eq!(flight.stops, 0);
    }

    #[test]
    fn mistyped_fields_default() {
        let flight = normalize_record(&json!({
            "number": 17,
            "airline": null,
            "status": null,
            "departure": "FRA",
            "arrival": { "airport": [] }
        }));
        assert_eq!(flight.flight_number, "");
        assert_eq!(flight.airline, DEFAULT_AIRLINE);
        assert_eq!(flight.status, DEFAULT_STATUS);
        assert_eq!(flight.departure.airport, "");
        assert_eq!(flight.arrival.airport, "");
    }

    #[test]
    fn destination_filter_keeps_order() {
        let payload = json!({
            "departures": [
                departure("LH 1", "MUC"),
                departure("LH 2", "JFK"),
                departure("LH 3", "muc"),
                departure("LH 4", "MUC"),
            ]
        });

        let numbers: Vec<_> = transform(&payload, Some("muc"))
            .into_iter()
            .map(|f| f.flight_number)
            .collect();
        assert_eq!(numbers, vec!["LH 1", "LH 3", "LH 4"]);

        let all: Vec<_> = transform(&payload, None)
            .into_iter()
            .map(|f| f.flight_number)
            .collect();
        assert_eq!(all, vec!["LH 1", "LH 2", "LH 3", "LH 4"]);
    }

    #[test]
    fn blank_filter_is_ignored() {
        let payload = json!({ "departures": [departure("LH 1", "MUC"), json!({})] });
        assert_eq!(transform(&payload, Some("  ")).len(), 2);
    }

    #[test]
    fn records_without_arrival_are_dropped_by_filter() {
        let payload = json!({ "departures": [json!({ "number": "XX 1" })] });
        assert!(transform(&payload, Some("LAX")).is_empty());
    }
}
