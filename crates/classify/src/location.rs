//! Location resolution and matching.

use tracing::trace;
use whereabouts_calendar::{Coordinate, parse_lat_lng};
use whereabouts_io::TopCandidate;

use crate::config::{CoordinateMatcher, LocationMode, TagMatcher};

/// Location of a visit, resolved once per segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// A parsed coordinate.
    Coordinate(Coordinate),
    /// A provider semantic label.
    SemanticTag(String),
}

/// A known place a visit can match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    Office,
    Home,
}

/// Outcome of matching one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationMatch {
    /// The matched place, if any. Office takes priority over home.
    pub place: Option<Place>,
    /// Distance in meters to the nearer of office and home.
    ///
    /// Only available in coordinate mode.
    pub nearest_m: Option<f64>,
}

impl CoordinateMatcher {
    /// Matches a coordinate against the office and home positions.
    pub fn match_coordinate(&self, at: &Coordinate) -> LocationMatch {
        let office_m = at.distance_to(&self.office());
        let home_m = at.distance_to(&self.home());

        let place = if office_m <= self.radius_m() {
            Some(Place::Office)
        } else if home_m <= self.radius_m() {
            Some(Place::Home)
        } else {
            None
        };

        LocationMatch {
            place,
            nearest_m: Some(office_m.min(home_m)),
        }
    }
}

impl TagMatcher {
    /// Matches a semantic label against the work and home tag sets.
    pub fn match_tag(&self, tag: &str) -> LocationMatch {
        let place = if self.work().contains(tag) {
            Some(Place::Office)
        } else if self.home().contains(tag) {
            Some(Place::Home)
        } else {
            None
        };
        LocationMatch {
            place,
            nearest_m: None,
        }
    }
}

impl LocationMode {
    /// Extracts the location this mode works with from a visit candidate.
    ///
    /// Returns `None` when the candidate has no usable location: a missing or
    /// unparseable coordinate in coordinate mode, or a missing label in tag
    /// mode.
    pub fn resolve(&self, candidate: &TopCandidate) -> Option<Location> {
        match self {
            LocationMode::Coordinates(_) => {
                let raw = candidate.lat_lng()?;
                match parse_lat_lng(raw) {
                    Ok(c) => Some(Location::Coordinate(c)),
                    Err(e) => {
                        trace!(error = %e, "skipping unparseable coordinate");
                        None
                    }
                }
            }
            LocationMode::Tags(_) => candidate
                .semantic_type()
                .map(|tag| Location::SemanticTag(tag.to_string())),
        }
    }

    /// Matches a resolved location.
    ///
    /// A location of the other mode's kind matches nothing.
    pub fn match_location(&self, location: &Location) -> LocationMatch {
        match (self, location) {
            (LocationMode::Coordinates(m), Location::Coordinate(c)) => m.match_coordinate(c),
            (LocationMode::Tags(m), Location::SemanticTag(tag)) => m.match_tag(tag),
            _ => LocationMatch {
                place: None,
                nearest_m: None,
            },
        }
    }
}
