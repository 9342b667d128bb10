//! Elapsed flight time between two provider timestamps.
//!
//! Parsing is explicit: [`elapsed`] returns a [`DurationError`] when either
//! timestamp is unusable, and [`compute_duration`] turns that into the fixed
//! fallback. A single bad timestamp never fails a search.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Returned by [`compute_duration`] when the elapsed time cannot be computed.
pub const FALLBACK_DURATION: &str = "2h 30m";

const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("unparseable timestamp '{0}'")]
    Unparseable(String),

    #[error("cannot compare a timestamp with an offset to one without")]
    MixedOffsets,

    #[error("arrival precedes departure by {0} seconds")]
    Negative(i64),
}

/// A parsed timestamp, with or without a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timestamp {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

fn parse_timestamp(raw: &str) -> Result<Timestamp, DurationError> {
    let trimmed = raw.trim();
    let input = match trimmed.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => trimmed.to_string(),
    };

    for fmt in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&input, fmt) {
            return Ok(Timestamp::Zoned(dt));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&input, fmt) {
            return Ok(Timestamp::Naive(dt));
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(&input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(Timestamp::Naive(midnight));
    }

    Err(DurationError::Unparseable(raw.to_string()))
}

/// Seconds from `departure` to `arrival`.
pub fn elapsed(departure: &str, arrival: &str) -> Result<i64, DurationError> {
    let dep = parse_timestamp(departure)?;
    let arr = parse_timestamp(arrival)?;

    let seconds = match (dep, arr) {
        (Timestamp::Zoned(d), Timestamp::Zoned(a)) => (a - d).num_seconds(),
        (Timestamp::Naive(d), Timestamp::Naive(a)) => (a - d).num_seconds(),
        _ => return Err(DurationError::MixedOffsets),
    };

    if seconds < 0 {
        return Err(DurationError::Negative(-seconds));
    }
    Ok(seconds)
}

/// Format a non-negative number of seconds as `"<H>h <M>m"`.
///
/// Hours are not wrapped into days.
pub fn format_elapsed(seconds: i64) -> String {
    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

/// Human-readable elapsed time between two timestamps, or [`FALLBACK_DURATION`].
pub fn compute_duration(departure: &str, arrival: &str) -> String {
    match elapsed(departure, arrival) {
        Ok(seconds) => format_elapsed(seconds),
        Err(e) => {
            tracing::trace!(departure, arrival, error = %e, "Using fallback duration");
            FALLBACK_DURATION.to_string()
        }
    }
}
