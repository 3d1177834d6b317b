//! Classification configuration.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use whereabouts_calendar::{Coordinate, WorkingDays, WorkingHours};

use crate::error::ClassifyError;

/// Known office and home positions matched within a radius.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMatcher {
    office: Coordinate,
    home: Coordinate,
    radius_m: f64,
}

impl CoordinateMatcher {
    /// Creates a matcher for the given positions and radius in meters.
    pub fn new(office: Coordinate, home: Coordinate, radius_m: f64) -> Self {
        Self {
            office,
            home,
            radius_m,
        }
    }

    /// Returns the office position.
    pub fn office(&self) -> Coordinate {
        self.office
    }

    /// Returns the home position.
    pub fn home(&self) -> Coordinate {
        self.home
    }

    /// Returns the matching radius in meters.
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }
}

/// Semantic labels counted as office or home.
///
/// Tags are compared exactly (case-sensitive), as the provider emits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatcher {
    work: BTreeSet<String>,
    home: BTreeSet<String>,
}

impl TagMatcher {
    /// Creates a matcher from work-like and home-like tags.
    pub fn new<W, H>(work: W, home: H) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        Self {
            work: work.into_iter().map(Into::into).collect(),
            home: home.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the work-like tags.
    pub fn work(&self) -> &BTreeSet<String> {
        &self.work
    }

    /// Returns the home-like tags.
    pub fn home(&self) -> &BTreeSet<String> {
        &self.home
    }
}

impl Default for TagMatcher {
    /// `WORK`/`INFERRED_WORK` and `HOME`/`INFERRED_HOME`.
    fn default() -> Self {
        Self::new(["WORK", "INFERRED_WORK"], ["HOME", "INFERRED_HOME"])
    }
}

/// How a visit's location is resolved to office or home.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationMode {
    /// Match the visit coordinate against known positions.
    Coordinates(CoordinateMatcher),
    /// Match the provider's semantic label against tag sets.
    Tags(TagMatcher),
}

/// The set of days that `elsewhere` and `missing` are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceBase {
    /// Days with at least one visit inside working hours.
    WorkingHourVisits,
    /// Days with at least one visit at any time of day.
    AnyVisit,
}

impl EvidenceBase {
    /// The base used when none is configured explicitly.
    ///
    /// Coordinate mode counts only working-hour visits; tag mode counts any
    /// visit on a working day.
    pub fn for_mode(mode: &LocationMode) -> Self {
        match mode {
            LocationMode::Coordinates(_) => EvidenceBase::WorkingHourVisits,
            LocationMode::Tags(_) => EvidenceBase::AnyVisit,
        }
    }
}

/// Configuration for a classification run.
///
/// # Example
///
/// ```ignore
/// use whereabouts_calendar::Coordinate;
/// use whereabouts_classify::{ClassifyConfig, CoordinateMatcher, LocationMode};
///
/// let office = Coordinate::new(52.520008, 13.404954).unwrap();
/// let home = Coordinate::new(52.516275, 13.377704).unwrap();
/// let config = ClassifyConfig::new(LocationMode::Coordinates(
///     CoordinateMatcher::new(office, home, 100.0),
/// ))
/// .with_year(Some(2025));
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    year: Option<i32>,
    working_hours: WorkingHours,
    working_days: WorkingDays,
    mode: LocationMode,
    evidence: Option<EvidenceBase>,
}

impl ClassifyConfig {
    /// Creates a configuration for the given mode.
    ///
    /// Defaults: no year filter, 09:00-18:00, Monday to Friday, evidence base
    /// chosen by [`EvidenceBase::for_mode`].
    pub fn new(mode: LocationMode) -> Self {
        Self {
            year: None,
            working_hours: WorkingHours::default(),
            working_days: WorkingDays::default(),
            mode,
            evidence: None,
        }
    }

    /// Restrict the analysis to one calendar year, or `None` for all years.
    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    /// Set the working-hours window.
    pub fn with_working_hours(mut self, hours: WorkingHours) -> Self {
        self.working_hours = hours;
        self
    }

    /// Set the working weekdays.
    pub fn with_working_days(mut self, days: WorkingDays) -> Self {
        self.working_days = days;
        self
    }

    /// Override the evidence base.
    pub fn with_evidence_base(mut self, evidence: EvidenceBase) -> Self {
        self.evidence = Some(evidence);
        self
    }

    /// Returns the year filter.
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Returns the working-hours window.
    pub fn working_hours(&self) -> &WorkingHours {
        &self.working_hours
    }

    /// Returns the working weekdays.
    pub fn working_days(&self) -> &WorkingDays {
        &self.working_days
    }

    /// Returns the location mode.
    pub fn mode(&self) -> &LocationMode {
        &self.mode
    }

    /// Returns the evidence base in effect.
    pub fn evidence_base(&self) -> EvidenceBase {
        self.evidence.unwrap_or_else(|| EvidenceBase::for_mode(&self.mode))
    }

    /// Validates this configuration.
    ///
    /// Checks are applied in order: working days, year, then the mode's own
    /// parameters.
    pub fn validate(&self) -> Result<(), ClassifyError> {
        if self.working_days.is_empty() {
            return Err(ClassifyError::NoWorkingDays);
        }
        if let Some(year) = self.year
            && NaiveDate::from_ymd_opt(year, 12, 31).is_none()
        {
            return Err(ClassifyError::InvalidYear { year });
        }
        match &self.mode {
            LocationMode::Coordinates(m) => {
                if !m.radius_m.is_finite() || m.radius_m < 0.0 {
                    return Err(ClassifyError::InvalidRadius {
                        radius_m: m.radius_m,
                    });
                }
            }
            LocationMode::Tags(m) => {
                if m.work.is_empty() && m.home.is_empty() {
                    return Err(ClassifyError::NoTags);
                }
            }
        }
        Ok(())
    }
}
