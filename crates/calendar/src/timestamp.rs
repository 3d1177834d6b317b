//! ISO-8601 timestamp parsing.
//!
//! Timestamps are reduced to their local wall-clock reading: the offset (or
//! `Z`) is validated but not applied, so `2025-03-05T09:30:00+01:00` is
//! 09:30 on March 5 regardless of the machine's zone.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::error::CalendarError;

/// Minute-precision date-time with a numeric offset (`2025-03-05T09:30+01:00`).
const MINUTE_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";

/// Offset-less ISO-8601 date-times, with seconds (optionally fractional) or
/// minute precision.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses an ISO-8601 timestamp into its wall-clock date-time.
///
/// Accepts RFC 3339 strings with a `Z` suffix or a numeric offset, the same
/// with seconds omitted, and offset-less date-times, which are read as
/// wall-clock time directly.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidTimestamp`] for anything else.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, CalendarError> {
    let trimmed = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }

    let with_offset = match trimmed.strip_suffix(['Z', 'z']) {
        Some(utc) => format!("{utc}+00:00"),
        None => trimmed.to_string(),
    };
    if let Ok(dt) = DateTime::parse_from_str(&with_offset, MINUTE_OFFSET_FORMAT) {
        return Ok(dt.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| CalendarError::InvalidTimestamp {
            input: input.to_string(),
        })
}

/// Returns the calendar date (day key) of a timestamp.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidTimestamp`] if the timestamp is malformed.
pub fn day_key(input: &str) -> Result<NaiveDate, CalendarError> {
    parse_timestamp(input).map(|dt| dt.date())
}

/// Returns the calendar year of a timestamp, or `None` if it is malformed.
pub fn year_of(input: &str) -> Option<i32> {
    parse_timestamp(input).ok().map(|dt| dt.year())
}
