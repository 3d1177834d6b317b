//! Timeline export data model.
//!
//! Mirrors the on-device export: a `semanticSegments` array whose entries
//! carry `startTime`/`endTime` and, for place visits, a `visit` object with a
//! `topCandidate`. Other segment kinds (`activity`, `timelinePath`, ...) and
//! unknown fields are accepted and ignored.

use serde::Deserialize;

/// Top-level export document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TimelineExport {
    #[serde(default)]
    pub(crate) semantic_segments: Option<Vec<Segment>>,
}

/// One observation unit of the export.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// ISO-8601 start of the segment.
    #[serde(default)]
    pub start_time: Option<String>,
    /// ISO-8601 end of the segment.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Present only for place-visit segments.
    #[serde(default)]
    pub visit: Option<Visit>,
}

/// Place-visit payload of a segment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    /// The provider's best guess for the visited place.
    #[serde(default)]
    pub top_candidate: Option<TopCandidate>,
}

/// Best-candidate place of a visit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCandidate {
    /// Provider place identifier.
    #[serde(default)]
    pub place_id: Option<String>,
    /// Semantic label such as `HOME`, `WORK` or `INFERRED_HOME`.
    #[serde(default)]
    pub semantic_type: Option<String>,
    /// Position of the place.
    #[serde(default)]
    pub place_location: Option<PlaceLocation>,
}

/// Position of a candidate place.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceLocation {
    /// Coordinate pair formatted as `"52.5200°, 13.4049°"`.
    #[serde(default)]
    pub lat_lng: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl Segment {
    /// Creates a place-visit segment starting at `start_time`.
    pub fn place_visit(start_time: impl Into<String>, candidate: TopCandidate) -> Self {
        Self {
            start_time: Some(start_time.into()),
            end_time: None,
            visit: Some(Visit {
                top_candidate: Some(candidate),
            }),
        }
    }

    /// Returns the start timestamp, treating an empty string as absent.
    pub fn start_time(&self) -> Option<&str> {
        non_empty(&self.start_time)
    }

    /// Returns the end timestamp, treating an empty string as absent.
    pub fn end_time(&self) -> Option<&str> {
        non_empty(&self.end_time)
    }

    /// Returns `true` if this segment is a place visit.
    pub fn is_visit(&self) -> bool {
        self.visit.is_some()
    }

    /// Returns the top candidate of the visit, if any.
    pub fn top_candidate(&self) -> Option<&TopCandidate> {
        self.visit.as_ref()?.top_candidate.as_ref()
    }
}

impl TopCandidate {
    /// Creates a candidate located at a `"lat°, lng°"` string.
    pub fn at_lat_lng(lat_lng: impl Into<String>) -> Self {
        Self {
            place_location: Some(PlaceLocation {
                lat_lng: Some(lat_lng.into()),
            }),
            ..Self::default()
        }
    }

    /// Creates a candidate carrying only a semantic label.
    pub fn tagged(semantic_type: impl Into<String>) -> Self {
        Self {
            semantic_type: Some(semantic_type.into()),
            ..Self::default()
        }
    }

    /// Returns the coordinate string, treating an empty string as absent.
    pub fn lat_lng(&self) -> Option<&str> {
        non_empty(&self.place_location.as_ref()?.lat_lng)
    }

    /// Returns the semantic label, treating an empty string as absent.
    pub fn semantic_type(&self) -> Option<&str> {
        non_empty(&self.semantic_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_visit_segment() {
        let json = r#"{
            "startTime": "2025-03-05T09:15:00.000+01:00",
            "endTime": "2025-03-05T17:40:00.000+01:00",
            "visit": {
                "hierarchyLevel": 0,
                "probability": 0.9,
                "topCandidate": {
                    "placeId": "ChIJ123",
                    "semanticType": "INFERRED_WORK",
                    "probability": 0.8,
                    "placeLocation": { "latLng": "52.5200080°, 13.4049540°" }
                }
            }
        }"#;
        let seg: Segment = serde_json::from_str(json).unwrap();
        assert!(seg.is_visit());
        assert_eq!(seg.start_time(), Some("2025-03-05T09:15:00.000+01:00"));
        assert_eq!(seg.end_time(), Some("2025-03-05T17:40:00.000+01:00"));
        let candidate = seg.top_candidate().unwrap();
        assert_eq!(candidate.place_id.as_deref(), Some("ChIJ123"));
        assert_eq!(candidate.semantic_type(), Some("INFERRED_WORK"));
        assert_eq!(candidate.lat_lng(), Some("52.5200080°, 13.4049540°"));
    }

    #[test]
    fn deserialize_activity_segment() {
        let json = r#"{
            "startTime": "2025-03-05T08:30:00.000+01:00",
            "endTime": "2025-03-05T09:10:00.000+01:00",
            "activity": { "distanceMeters": 5120.0 }
        }"#;
        let seg: Segment = serde_json::from_str(json).unwrap();
        assert!(!seg.is_visit());
        assert!(seg.top_candidate().is_none());
    }

    #[test]
    fn empty_strings_are_absent() {
        let json = r#"{
            "startTime": "",
            "visit": { "topCandidate": { "semanticType": "", "placeLocation": { "latLng": "" } } }
        }"#;
        let seg: Segment = serde_json::from_str(json).unwrap();
        assert_eq!(seg.start_time(), None);
        let candidate = seg.top_candidate().unwrap();
        assert_eq!(candidate.semantic_type(), None);
        assert_eq!(candidate.lat_lng(), None);
    }

    #[test]
    fn visit_without_candidate() {
        let seg: Segment =
            serde_json::from_str(r#"{ "startTime": "2025-01-01T10:00:00Z", "visit": {} }"#)
                .unwrap();
        assert!(seg.is_visit());
        assert!(seg.top_candidate().is_none());
    }

    #[test]
    fn constructors() {
        let seg = Segment::place_visit("2025-01-01T10:00:00Z", TopCandidate::at_lat_lng("1°, 2°"));
        assert_eq!(seg.top_candidate().unwrap().lat_lng(), Some("1°, 2°"));
        assert_eq!(seg.top_candidate().unwrap().semantic_type(), None);

        let seg = Segment::place_visit("2025-01-01T10:00:00Z", TopCandidate::tagged("HOME"));
        assert_eq!(seg.top_candidate().unwrap().semantic_type(), Some("HOME"));
        assert_eq!(seg.top_candidate().unwrap().lat_lng(), None);
    }
}
