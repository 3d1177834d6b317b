//! JSON output for classification results.

use crate::error::ClassifyError;
use crate::result::Classification;

/// Serialize a classification to pretty-printed JSON.
///
/// Dates are written as `YYYY-MM-DD` in ascending order. Tier keys are
/// lowercase (`local`, `regional`, `national`, `international`); the
/// `elsewhere_breakdown` key is absent in tag mode.
///
/// # Errors
///
/// Returns [`ClassifyError::Serialization`] if serialization fails.
pub fn to_json(result: &Classification) -> Result<String, ClassifyError> {
    serde_json::to_string_pretty(result).map_err(|e| ClassifyError::Serialization {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;
    use crate::config::{ClassifyConfig, CoordinateMatcher, LocationMode, TagMatcher};
    use whereabouts_calendar::Coordinate;
    use whereabouts_io::{Segment, TopCandidate};

    fn coordinate_mode() -> LocationMode {
        LocationMode::Coordinates(CoordinateMatcher::new(
            Coordinate::new(52.520008, 13.404954).unwrap(),
            Coordinate::new(52.516275, 13.377704).unwrap(),
            100.0,
        ))
    }

    #[test]
    fn test_to_json_coordinate_mode() {
        let segments = [
            Segment::place_visit(
                "2025-03-05T10:00:00Z",
                TopCandidate::at_lat_lng("52.520008°, 13.404954°"),
            ),
            Segment::place_visit(
                "2025-03-04T10:00:00Z",
                TopCandidate::at_lat_lng("53.551086°, 9.993682°"),
            ),
        ];
        let config = ClassifyConfig::new(coordinate_mode()).with_year(Some(2025));
        let result = classify(&segments, &config).unwrap();
        let json = to_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["year"], 2025);
        assert_eq!(value["evidence"], "working-hour-visits");
        assert_eq!(value["office"], serde_json::json!(["2025-03-05"]));
        assert_eq!(value["home"], serde_json::json!([]));
        assert_eq!(value["elsewhere"], serde_json::json!(["2025-03-04"]));
        assert_eq!(
            value["elsewhere_breakdown"]["national"],
            serde_json::json!(["2025-03-04"])
        );
        assert_eq!(value["elsewhere_breakdown"]["local"], serde_json::json!([]));
        assert_eq!(value["missing"].as_array().unwrap().len(), 259);
        assert_eq!(value["stats"]["segments_processed"], 2);
        assert_eq!(value["stats"]["expected_working_days"], 261);
    }

    #[test]
    fn test_to_json_tag_mode_omits_breakdown() {
        let config = ClassifyConfig::new(LocationMode::Tags(TagMatcher::default()));
        let result = classify(&[], &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();

        assert!(value.get("elsewhere_breakdown").is_none());
        assert_eq!(value["evidence"], "any-visit");
        assert!(value["year"].is_null());
        assert!(value["stats"]["expected_working_days"].is_null());
    }

    #[test]
    fn test_dates_are_sorted() {
        let segments = [
            Segment::place_visit("2025-06-10T10:00:00Z", TopCandidate::tagged("HOME")),
            Segment::place_visit("2025-01-07T10:00:00Z", TopCandidate::tagged("HOME")),
            Segment::place_visit("2025-03-12T10:00:00Z", TopCandidate::tagged("HOME")),
        ];
        let config = ClassifyConfig::new(LocationMode::Tags(TagMatcher::default()));
        let result = classify(&segments, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();
        assert_eq!(
            value["home"],
            serde_json::json!(["2025-01-07", "2025-03-12", "2025-06-10"])
        );
    }
}
