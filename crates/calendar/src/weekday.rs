//! Working-weekday set.

use std::collections::HashSet;
use std::fmt;

use chrono::{Datelike, Weekday};

use crate::error::CalendarError;
use crate::timestamp::parse_timestamp;

/// Weekdays in calendar order, Monday first.
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Returns the English name of a weekday (`"Monday"`, ...).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The set of weekdays that count as working days.
///
/// Defaults to Monday through Friday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDays {
    days: HashSet<Weekday>,
}

impl WorkingDays {
    /// Creates a set from weekday values.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            days: days.into_iter().collect(),
        }
    }

    /// Creates a set from weekday names.
    ///
    /// Names are case-insensitive; full names (`"Monday"`) and three-letter
    /// abbreviations (`"mon"`) are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownWeekday`] for the first name that is
    /// not a weekday.
    pub fn from_names<I, S>(names: I) -> Result<Self, CalendarError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let days = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                name.trim()
                    .parse::<Weekday>()
                    .map_err(|_| CalendarError::UnknownWeekday {
                        name: name.to_string(),
                    })
            })
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self { days })
    }

    /// Returns `true` if `day` is a working day.
    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Returns the number of working weekdays.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if no weekday is a working day.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates the working weekdays in calendar order, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK.into_iter().filter(|d| self.days.contains(d))
    }
}

impl Default for WorkingDays {
    fn default() -> Self {
        Self::new(WEEK[..5].iter().copied())
    }
}

impl fmt::Display for WorkingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(weekday_name).collect();
        f.write_str(&names.join(", "))
    }
}

/// Returns `true` if the weekday of `timestamp` is in `days`.
///
/// A malformed timestamp yields `false`.
pub fn is_working_day(timestamp: &str, days: &WorkingDays) -> bool {
    parse_timestamp(timestamp)
        .map(|dt| days.contains(dt.weekday()))
        .unwrap_or(false)
}
