//! # whereabouts-io
//!
//! Read a location-history (Timeline) export into typed segments.
//! Bridges the provider's JSON document into the plain data model consumed
//! by the day classifier.

mod error;
mod reader;
mod timeline;

pub use error::IoError;
pub use reader::{parse_timeline, read_timeline};
pub use timeline::{PlaceLocation, Segment, TopCandidate, Visit};
