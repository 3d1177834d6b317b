//! Classification result.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::EvidenceBase;
use crate::tier::DistanceTier;

/// Category of a single working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCategory {
    Office,
    Home,
    Elsewhere,
    Missing,
}

/// Informational counters collected during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifyStats {
    /// Segments in the input, of any kind.
    pub segments_total: usize,
    /// Visit segments with a start time inside the analysed period.
    pub segments_processed: usize,
    /// Visit segments dropped by the year filter.
    pub segments_skipped_other_year: usize,
    /// Processed segments whose start time could not be parsed.
    pub segments_bad_timestamp: usize,
    /// Working-hour visits without a usable location.
    pub segments_without_location: usize,
    /// Working days in the analysed year, if a year is set.
    pub expected_working_days: Option<usize>,
    /// Working days with at least one visit.
    pub days_with_data: usize,
    /// Working days with at least one visit inside working hours.
    pub days_with_working_hour_visits: usize,
}

/// Office / home / elsewhere / missing partition of working days.
///
/// `office`, `home` and `elsewhere` are pairwise disjoint. `missing` never
/// overlaps them either: it holds expected working days without evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    year: Option<i32>,
    evidence: EvidenceBase,
    office: BTreeSet<NaiveDate>,
    home: BTreeSet<NaiveDate>,
    elsewhere: BTreeSet<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elsewhere_breakdown: Option<BTreeMap<DistanceTier, BTreeSet<NaiveDate>>>,
    missing: BTreeSet<NaiveDate>,
    stats: ClassifyStats,
}

impl Classification {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        year: Option<i32>,
        evidence: EvidenceBase,
        office: BTreeSet<NaiveDate>,
        home: BTreeSet<NaiveDate>,
        elsewhere: BTreeSet<NaiveDate>,
        elsewhere_breakdown: Option<BTreeMap<DistanceTier, BTreeSet<NaiveDate>>>,
        missing: BTreeSet<NaiveDate>,
        stats: ClassifyStats,
    ) -> Self {
        Self {
            year,
            evidence,
            office,
            home,
            elsewhere,
            elsewhere_breakdown,
            missing,
            stats,
        }
    }

    /// Returns the analysed year, if one was configured.
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Returns the evidence base used for `elsewhere` and `missing`.
    pub fn evidence(&self) -> EvidenceBase {
        self.evidence
    }

    /// Days with at least one visit matching the office.
    pub fn office(&self) -> &BTreeSet<NaiveDate> {
        &self.office
    }

    /// Days matching home and not the office.
    pub fn home(&self) -> &BTreeSet<NaiveDate> {
        &self.home
    }

    /// Days with evidence that match neither office nor home.
    pub fn elsewhere(&self) -> &BTreeSet<NaiveDate> {
        &self.elsewhere
    }

    /// Elsewhere days per distance tier; `None` in tag mode.
    ///
    /// When present, every tier has an entry (possibly empty).
    pub fn elsewhere_breakdown(&self) -> Option<&BTreeMap<DistanceTier, BTreeSet<NaiveDate>>> {
        self.elsewhere_breakdown.as_ref()
    }

    /// Elsewhere days in one tier; empty in tag mode.
    pub fn tier(&self, tier: DistanceTier) -> BTreeSet<NaiveDate> {
        self.elsewhere_breakdown
            .as_ref()
            .and_then(|b| b.get(&tier))
            .cloned()
            .unwrap_or_default()
    }

    /// Expected working days without evidence; empty without a year filter.
    pub fn missing(&self) -> &BTreeSet<NaiveDate> {
        &self.missing
    }

    /// Returns the run counters.
    pub fn stats(&self) -> &ClassifyStats {
        &self.stats
    }

    /// Number of working days classified as office, home or elsewhere.
    ///
    /// Differs from [`ClassifyStats::days_with_data`] when some days only have
    /// visits outside working hours.
    pub fn classified_days(&self) -> usize {
        self.office.len() + self.home.len() + self.elsewhere.len()
    }

    /// Category of `day`, or `None` if it is not a classified working day.
    pub fn category_of(&self, day: &NaiveDate) -> Option<DayCategory> {
        if self.office.contains(day) {
            Some(DayCategory::Office)
        } else if self.home.contains(day) {
            Some(DayCategory::Home)
        } else if self.elsewhere.contains(day) {
            Some(DayCategory::Elsewhere)
        } else if self.missing.contains(day) {
            Some(DayCategory::Missing)
        } else {
            None
        }
    }
}
