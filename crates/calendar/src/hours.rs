//! Working-hours window.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;

use crate::error::CalendarError;
use crate::timestamp::parse_timestamp;

/// A daily time window, inclusive at both ends.
///
/// Parsed from `"HH:MM-HH:MM"`; hours may have one or two digits
/// (`"9:00-18:00"`). A window whose start is after its end contains no
/// instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    start: NaiveTime,
    end: NaiveTime,
}

impl WorkingHours {
    /// Creates a window from its bounds.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Returns the first instant of the window.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Returns the last instant of the window.
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Returns `true` if `time` lies in `[start, end]`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time"),
            end: NaiveTime::from_hms_opt(18, 0, 0).expect("18:00 is a valid time"),
        }
    }
}

impl FromStr for WorkingHours {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidWorkingHours {
            input: s.to_string(),
        };
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start = parse_hh_mm(start).ok_or_else(invalid)?;
        let end = parse_hh_mm(end).ok_or_else(invalid)?;
        Ok(Self { start, end })
    }
}

impl fmt::Display for WorkingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

fn parse_hh_mm(s: &str) -> Option<NaiveTime> {
    let (hour, minute) = s.trim().split_once(':')?;
    let hour: u32 = hour.trim().parse().ok()?;
    let minute: u32 = minute.trim().parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Returns `true` if the wall-clock time of `timestamp` lies within `window`.
///
/// A malformed timestamp or window string yields `false`.
pub fn is_within_working_hours(timestamp: &str, window: &str) -> bool {
    let Ok(hours) = window.parse::<WorkingHours>() else {
        return false;
    };
    parse_timestamp(timestamp)
        .map(|dt| hours.contains(dt.time()))
        .unwrap_or(false)
}
