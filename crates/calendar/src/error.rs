//! Error types for the whereabouts-calendar crate.

/// Error type for all fallible operations in the whereabouts-calendar crate.
///
/// Every parser in this crate reports malformed input through this enum
/// instead of panicking, so callers can decide whether a failure skips a
/// single record or aborts the run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a string is not an ISO-8601 date-time.
    #[error("invalid timestamp: {input:?}")]
    InvalidTimestamp {
        /// The string that failed to parse.
        input: String,
    },

    /// Returned when a `"lat°, lng°"` string cannot be split into two numbers.
    #[error("invalid coordinate: {input:?} (expected \"<lat>°, <lng>°\")")]
    InvalidCoordinate {
        /// The string that failed to parse.
        input: String,
    },

    /// Returned when a latitude/longitude pair is non-finite or out of range.
    #[error("coordinate out of range: ({lat}, {lng})")]
    CoordinateOutOfRange {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },

    /// Returned when a working-hours window is not of the form `HH:MM-HH:MM`.
    #[error("invalid working hours: {input:?} (expected \"HH:MM-HH:MM\")")]
    InvalidWorkingHours {
        /// The string that failed to parse.
        input: String,
    },

    /// Returned when a weekday name is not recognised.
    #[error("unknown weekday: {name:?}")]
    UnknownWeekday {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when a calendar year cannot be represented.
    #[error("invalid year: {year}")]
    InvalidYear {
        /// The year that was provided.
        year: i32,
    },
}
