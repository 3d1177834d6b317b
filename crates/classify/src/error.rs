//! Classification error types.

/// Errors that can occur before or after classification.
///
/// Segment-level problems are never errors; only an unusable configuration
/// or a failure to serialize the result is.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// The matching radius is negative or not finite.
    #[error("radius must be a finite, non-negative number of meters, got {radius_m}")]
    InvalidRadius { radius_m: f64 },

    /// No weekday is configured as a working day.
    #[error("at least one working day must be configured")]
    NoWorkingDays,

    /// Tag mode was configured without any work or home tags.
    #[error("tag mode needs at least one work or home tag")]
    NoTags,

    /// The analysis year cannot be enumerated.
    #[error("invalid year: {year}")]
    InvalidYear { year: i32 },

    /// A calendar helper failed.
    #[error("calendar error: {reason}")]
    Calendar { reason: String },

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl From<whereabouts_calendar::CalendarError> for ClassifyError {
    fn from(e: whereabouts_calendar::CalendarError) -> Self {
        match e {
            whereabouts_calendar::CalendarError::InvalidYear { year } => {
                ClassifyError::InvalidYear { year }
            }
            other => ClassifyError::Calendar {
                reason: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whereabouts_calendar::CalendarError;

    #[test]
    fn test_invalid_radius_display() {
        let err = ClassifyError::InvalidRadius { radius_m: -5.0 };
        let msg = format!("{}", err);
        assert!(msg.contains("finite, non-negative"));
        assert!(msg.contains("-5"));
    }

    #[test]
    fn test_no_working_days_display() {
        let msg = ClassifyError::NoWorkingDays.to_string();
        assert_eq!(msg, "at least one working day must be configured");
    }

    #[test]
    fn test_no_tags_display() {
        let msg = ClassifyError::NoTags.to_string();
        assert_eq!(msg, "tag mode needs at least one work or home tag");
    }

    #[test]
    fn test_serialization_display() {
        let err = ClassifyError::Serialization {
            reason: "key must be a string".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("serialization error"));
        assert!(msg.contains("key must be a string"));
    }

    #[test]
    fn test_from_calendar_invalid_year() {
        let err: ClassifyError = CalendarError::InvalidYear { year: 300_000 }.into();
        assert!(matches!(err, ClassifyError::InvalidYear { year: 300_000 }));
    }

    #[test]
    fn test_from_calendar_other() {
        let err: ClassifyError = CalendarError::InvalidWorkingHours {
            input: "9-5".to_string(),
        }
        .into();
        assert!(matches!(err, ClassifyError::Calendar { .. }));
        assert!(err.to_string().contains("invalid working hours"));
    }

    #[test]
    fn test_error_bounds() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<ClassifyError>();
    }
}
