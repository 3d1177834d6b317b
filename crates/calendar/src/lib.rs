//! # whereabouts-calendar
//!
//! Pure date, time and distance helpers used to classify working days.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["ISO-8601 string"] -->|"parse_timestamp()"| B["NaiveDateTime (wall clock)"]
//!     B -->|".date()"| C["day key (NaiveDate)"]
//!     B -->|".time()"| D["WorkingHours::contains()"]
//!     C -->|".weekday()"| E["WorkingDays::contains()"]
//!     F["\"lat°, lng°\""] -->|"parse_lat_lng()"| G["Coordinate"]
//!     G -->|".distance_to()"| H["meters"]
//!     I["year + WorkingDays"] -->|"expected_working_days()"| J["BTreeSet of NaiveDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use whereabouts_calendar::{WorkingDays, WorkingHours, expected_working_days, parse_lat_lng};
//!
//! let office = parse_lat_lng("52.520008°, 13.404954°").unwrap();
//! let home = parse_lat_lng("52.516275°, 13.377704°").unwrap();
//! let meters = office.distance_to(&home);
//!
//! let hours: WorkingHours = "9:00-18:00".parse().unwrap();
//! let days = WorkingDays::default(); // Monday..=Friday
//! let expected = expected_working_days(2025, &days).unwrap();
//! assert_eq!(expected.len(), 261);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `timestamp` | ISO-8601 parsing, day keys, year extraction |
//! | `geo` | Haversine distance and coordinate parsing |
//! | `hours` | Working-hours window |
//! | `weekday` | Working-weekday set |
//! | `sequence` | Enumeration of expected working days in a year |
//! | `error` | Error types |

mod error;
mod geo;
mod hours;
mod sequence;
mod timestamp;
mod weekday;

pub use error::CalendarError;
pub use geo::{Coordinate, EARTH_RADIUS_M, haversine_distance, parse_lat_lng};
pub use hours::{WorkingHours, is_within_working_hours};
pub use sequence::expected_working_days;
pub use timestamp::{day_key, parse_timestamp, year_of};
pub use weekday::{WorkingDays, is_working_day, weekday_name};
