//! Enumeration of the working days in a calendar year.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::weekday::WorkingDays;

/// Returns every date of `year` whose weekday is in `days`.
///
/// Visits January 1 through December 31 exactly once, so leap years are
/// handled by the calendar itself.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] if `year` is outside the range
/// representable by [`NaiveDate`].
///
/// # Example
///
/// ```ignore
/// let days = expected_working_days(2025, &WorkingDays::default()).unwrap();
/// assert_eq!(days.len(), 261);
/// ```
pub fn expected_working_days(
    year: i32,
    days: &WorkingDays,
) -> Result<BTreeSet<NaiveDate>, CalendarError> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(CalendarError::InvalidYear { year })?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(CalendarError::InvalidYear { year })?;

    Ok(first
        .iter_days()
        .take_while(|date| *date <= last)
        .filter(|date| days.contains(date.weekday()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn weekdays_2025() {
        let days = expected_working_days(2025, &WorkingDays::default()).unwrap();
        assert_eq!(days.len(), 261);
    }

    #[test]
    fn weekdays_2024_leap_year() {
        // 2024 starts on a Monday and has 366 days: 52 full weeks + Mon, Tue.
        let days = expected_working_days(2024, &WorkingDays::default()).unwrap();
        assert_eq!(days.len(), 262);
        assert!(days.contains(&NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    }

    #[test]
    fn every_day_of_the_year() {
        let all = WorkingDays::from_names(["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]).unwrap();
        assert_eq!(expected_working_days(2025, &all).unwrap().len(), 365);
        assert_eq!(expected_working_days(2024, &all).unwrap().len(), 366);
    }

    #[test]
    fn empty_set_yields_no_days() {
        let days = expected_working_days(2025, &WorkingDays::new([])).unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn single_weekday() {
        let mondays = expected_working_days(2025, &WorkingDays::new([Weekday::Mon])).unwrap();
        assert_eq!(mondays.len(), 52);
        assert!(mondays.iter().all(|d| d.weekday() == Weekday::Mon));
    }

    #[test]
    fn bounded_by_the_year() {
        let days = expected_working_days(2025, &WorkingDays::default()).unwrap();
        assert_eq!(
            days.first().copied(),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
        assert_eq!(days.last().copied(), NaiveDate::from_ymd_opt(2025, 12, 31));
    }

    #[test]
    fn invalid_year() {
        assert_eq!(
            expected_working_days(i32::MAX, &WorkingDays::default()).unwrap_err(),
            CalendarError::InvalidYear { year: i32::MAX }
        );
    }
}
