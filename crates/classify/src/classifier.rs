//! Single-pass day classification.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};
use whereabouts_calendar::{expected_working_days, parse_timestamp, year_of};
use whereabouts_io::Segment;

use crate::config::{ClassifyConfig, EvidenceBase, LocationMode};
use crate::error::ClassifyError;
use crate::location::Place;
use crate::result::{Classification, ClassifyStats};
use crate::tier::DistanceTier;

/// Classify the working days covered by `segments`.
///
/// The result does not depend on the order of `segments`: every per-day
/// accumulator is a set union or a minimum.
///
/// # Errors
///
/// Returns a [`ClassifyError`] only if `config` fails validation. Malformed
/// segments are skipped.
#[tracing::instrument(skip_all, fields(n_segments = segments.len(), year = ?config.year()))]
pub fn classify(
    segments: &[Segment],
    config: &ClassifyConfig,
) -> Result<Classification, ClassifyError> {
    config.validate()?;

    let expected = config
        .year()
        .map(|year| expected_working_days(year, config.working_days()))
        .transpose()?;
    if let (Some(year), Some(days)) = (config.year(), &expected) {
        info!(year, n_days = days.len(), "expected working days");
    }

    let mut tally = DayTally::default();
    tally.stats.segments_total = segments.len();
    for segment in segments {
        tally.observe(segment, config);
    }

    Ok(tally.finish(config, expected))
}

/// Per-day accumulators for one pass.
#[derive(Debug, Default)]
struct DayTally {
    office: BTreeSet<NaiveDate>,
    home: BTreeSet<NaiveDate>,
    with_data: BTreeSet<NaiveDate>,
    with_working_hour_visit: BTreeSet<NaiveDate>,
    nearest_m: BTreeMap<NaiveDate, f64>,
    stats: ClassifyStats,
}

impl DayTally {
    fn observe(&mut self, segment: &Segment, config: &ClassifyConfig) {
        if !segment.is_visit() {
            return;
        }
        let Some(start) = segment.start_time() else {
            return;
        };

        if let Some(year) = config.year()
            && year_of(start) != Some(year)
        {
            self.stats.segments_skipped_other_year += 1;
            return;
        }
        self.stats.segments_processed += 1;

        let Ok(when) = parse_timestamp(start) else {
            self.stats.segments_bad_timestamp += 1;
            return;
        };
        let day = when.date();

        if !config.working_days().contains(day.weekday()) {
            return;
        }
        self.with_data.insert(day);

        if !config.working_hours().contains(when.time()) {
            return;
        }
        self.with_working_hour_visit.insert(day);

        let mode = config.mode();
        let Some(location) = segment.top_candidate().and_then(|c| mode.resolve(c)) else {
            self.stats.segments_without_location += 1;
            return;
        };

        let matched = mode.match_location(&location);
        if let Some(meters) = matched.nearest_m {
            self.nearest_m
                .entry(day)
                .and_modify(|m| *m = m.min(meters))
                .or_insert(meters);
        }
        match matched.place {
            Some(Place::Office) => {
                self.office.insert(day);
            }
            Some(Place::Home) => {
                self.home.insert(day);
            }
            None => {}
        }
    }

    fn finish(
        mut self,
        config: &ClassifyConfig,
        expected: Option<BTreeSet<NaiveDate>>,
    ) -> Classification {
        let home: BTreeSet<NaiveDate> = self.home.difference(&self.office).copied().collect();

        let evidence = config.evidence_base();
        let base = match evidence {
            EvidenceBase::WorkingHourVisits => &self.with_working_hour_visit,
            EvidenceBase::AnyVisit => &self.with_data,
        };

        let elsewhere: BTreeSet<NaiveDate> = base
            .iter()
            .filter(|day| !self.office.contains(day) && !home.contains(day))
            .copied()
            .collect();

        let missing: BTreeSet<NaiveDate> = expected
            .as_ref()
            .map(|days| days.difference(base).copied().collect())
            .unwrap_or_default();

        let breakdown = match config.mode() {
            LocationMode::Coordinates(_) => Some(tier_breakdown(&elsewhere, &self.nearest_m)),
            LocationMode::Tags(_) => None,
        };

        self.stats.expected_working_days = expected.as_ref().map(BTreeSet::len);
        self.stats.days_with_data = self.with_data.len();
        self.stats.days_with_working_hour_visits = self.with_working_hour_visit.len();

        info!(
            processed = self.stats.segments_processed,
            skipped_other_year = self.stats.segments_skipped_other_year,
            days_with_data = self.stats.days_with_data,
            "segments classified"
        );
        debug!(
            office = self.office.len(),
            home = home.len(),
            elsewhere = elsewhere.len(),
            missing = missing.len(),
            bad_timestamp = self.stats.segments_bad_timestamp,
            without_location = self.stats.segments_without_location,
            "day categories"
        );

        Classification::new(
            config.year(),
            evidence,
            self.office,
            home,
            elsewhere,
            breakdown,
            missing,
            self.stats,
        )
    }
}

/// Buckets elsewhere days by their nearest recorded distance.
///
/// Days without a recorded distance are left out of every tier.
fn tier_breakdown(
    elsewhere: &BTreeSet<NaiveDate>,
    nearest_m: &BTreeMap<NaiveDate, f64>,
) -> BTreeMap<DistanceTier, BTreeSet<NaiveDate>> {
    let mut tiers: BTreeMap<DistanceTier, BTreeSet<NaiveDate>> = DistanceTier::ALL
        .into_iter()
        .map(|tier| (tier, BTreeSet::new()))
        .collect();
    for day in elsewhere {
        if let Some(&meters) = nearest_m.get(day) {
            tiers
                .entry(DistanceTier::from_meters(meters))
                .or_default()
                .insert(*day);
        }
    }
    tiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CoordinateMatcher, TagMatcher};
    use whereabouts_calendar::Coordinate;
    use whereabouts_io::TopCandidate;

    const OFFICE: &str = "52.520008°, 13.404954°";
    const HOME: &str = "52.516275°, 13.377704°";

    fn coords_config() -> ClassifyConfig {
        ClassifyConfig::new(LocationMode::Coordinates(CoordinateMatcher::new(
            Coordinate::new(52.520008, 13.404954).unwrap(),
            Coordinate::new(52.516275, 13.377704).unwrap(),
            100.0,
        )))
        .with_year(Some(2025))
    }

    fn tags_config() -> ClassifyConfig {
        ClassifyConfig::new(LocationMode::Tags(TagMatcher::default())).with_year(Some(2025))
    }

    fn at(ts: &str, lat_lng: &str) -> Segment {
        Segment::place_visit(ts, TopCandidate::at_lat_lng(lat_lng))
    }

    fn tagged(ts: &str, tag: &str) -> Segment {
        Segment::place_visit(ts, TopCandidate::tagged(tag))
    }

    fn d(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    #[test]
    fn empty_input_marks_every_working_day_missing() {
        let result = classify(&[], &coords_config()).unwrap();
        assert!(result.office().is_empty());
        assert!(result.home().is_empty());
        assert!(result.elsewhere().is_empty());
        assert_eq!(result.missing().len(), 261);
        assert_eq!(result.stats().expected_working_days, Some(261));
    }

    #[test]
    fn no_year_means_no_missing_days() {
        let config = coords_config().with_year(None);
        let result = classify(&[at("2025-03-05T10:00:00Z", OFFICE)], &config).unwrap();
        assert!(result.missing().is_empty());
        assert_eq!(result.stats().expected_working_days, None);
        assert_eq!(result.office(), &BTreeSet::from([d(3, 5)]));
    }

    #[test]
    fn non_visit_and_startless_segments_are_inert() {
        let activity = Segment {
            start_time: Some("2025-03-05T10:00:00Z".to_string()),
            ..Segment::default()
        };
        let startless = Segment {
            start_time: None,
            ..at("2025-03-05T10:00:00Z", OFFICE)
        };
        let empty_start = Segment {
            start_time: Some(String::new()),
            ..at("2025-03-05T10:00:00Z", OFFICE)
        };
        let result = classify(&[activity, startless, empty_start], &coords_config()).unwrap();
        assert_eq!(result.stats().segments_total, 3);
        assert_eq!(result.stats().segments_processed, 0);
        assert_eq!(result.stats().days_with_data, 0);
        assert!(result.missing().contains(&d(3, 5)));
    }

    #[test]
    fn other_years_are_counted_and_skipped() {
        let segments = [
            at("2024-03-06T10:00:00Z", OFFICE),
            at("2026-03-04T10:00:00Z", OFFICE),
            at("not-a-timestamp", OFFICE),
        ];
        let result = classify(&segments, &coords_config()).unwrap();
        assert_eq!(result.stats().segments_skipped_other_year, 3);
        assert_eq!(result.stats().segments_processed, 0);
        assert!(result.office().is_empty());
    }

    #[test]
    fn bad_timestamp_without_year_filter_is_counted() {
        let config = coords_config().with_year(None);
        let result = classify(&[at("yesterday", OFFICE)], &config).unwrap();
        assert_eq!(result.stats().segments_processed, 1);
        assert_eq!(result.stats().segments_bad_timestamp, 1);
        assert_eq!(result.classified_days(), 0);
    }

    #[test]
    fn weekend_visits_are_ignored() {
        // 2025-03-08 is a Saturday.
        let result = classify(&[at("2025-03-08T10:00:00Z", OFFICE)], &coords_config()).unwrap();
        assert_eq!(result.stats().days_with_data, 0);
        assert!(result.office().is_empty());
        assert!(!result.missing().contains(&d(3, 8)));
    }

    #[test]
    fn visit_outside_hours_is_missing_in_coordinate_mode() {
        let result = classify(&[at("2025-03-05T07:00:00Z", OFFICE)], &coords_config()).unwrap();
        assert_eq!(result.stats().days_with_data, 1);
        assert_eq!(result.stats().days_with_working_hour_visits, 0);
        assert!(result.office().is_empty());
        assert!(result.elsewhere().is_empty());
        assert!(result.missing().contains(&d(3, 5)));
    }

    #[test]
    fn visit_outside_hours_is_elsewhere_in_tag_mode() {
        let result = classify(&[tagged("2025-03-05T07:00:00Z", "HOME")], &tags_config()).unwrap();
        assert!(result.home().is_empty());
        assert_eq!(result.elsewhere(), &BTreeSet::from([d(3, 5)]));
        assert!(!result.missing().contains(&d(3, 5)));
    }

    #[test]
    fn evidence_override_aligns_tag_mode_with_coordinate_mode() {
        let config = tags_config().with_evidence_base(EvidenceBase::WorkingHourVisits);
        let result = classify(&[tagged("2025-03-05T07:00:00Z", "HOME")], &config).unwrap();
        assert!(result.elsewhere().is_empty());
        assert!(result.missing().contains(&d(3, 5)));
    }

    #[test]
    fn unparseable_location_still_counts_as_evidence() {
        let result = classify(&[at("2025-03-05T10:00:00Z", "garbage")], &coords_config()).unwrap();
        assert_eq!(result.stats().segments_without_location, 1);
        assert_eq!(result.elsewhere(), &BTreeSet::from([d(3, 5)]));
        // No distance was recorded, so the day is in no tier.
        for tier in DistanceTier::ALL {
            assert!(result.tier(tier).is_empty());
        }
    }

    #[test]
    fn office_beats_home_across_segments() {
        let segments = [
            at("2025-03-05T09:30:00Z", HOME),
            at("2025-03-05T14:00:00Z", OFFICE),
        ];
        let result = classify(&segments, &coords_config()).unwrap();
        assert_eq!(result.office(), &BTreeSet::from([d(3, 5)]));
        assert!(result.home().is_empty());
    }

    #[test]
    fn home_day() {
        let result = classify(&[at("2025-03-05T11:00:00Z", HOME)], &coords_config()).unwrap();
        assert_eq!(result.home(), &BTreeSet::from([d(3, 5)]));
        assert!(result.elsewhere().is_empty());
    }

    #[test]
    fn nearest_distance_is_the_minimum_over_the_day() {
        // Hamburg (~255 km) in the morning, Potsdam (~27 km) in the afternoon.
        let segments = [
            at("2025-03-05T09:30:00Z", "53.551086°, 9.993682°"),
            at("2025-03-05T15:00:00Z", "52.390569°, 13.064473°"),
        ];
        let result = classify(&segments, &coords_config()).unwrap();
        assert_eq!(result.tier(DistanceTier::Local), BTreeSet::from([d(3, 5)]));
        assert!(result.tier(DistanceTier::National).is_empty());
    }

    #[test]
    fn tag_mode_has_no_breakdown() {
        let result = classify(&[tagged("2025-03-05T10:00:00Z", "WORK")], &tags_config()).unwrap();
        assert!(result.elsewhere_breakdown().is_none());
        assert_eq!(result.office(), &BTreeSet::from([d(3, 5)]));
    }

    #[test]
    fn coordinate_mode_breakdown_has_all_tiers() {
        let result = classify(&[], &coords_config()).unwrap();
        let breakdown = result.elsewhere_breakdown().unwrap();
        assert_eq!(breakdown.len(), 4);
        assert!(breakdown.values().all(BTreeSet::is_empty));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ClassifyConfig::new(LocationMode::Coordinates(CoordinateMatcher::new(
            Coordinate::new(0.0, 0.0).unwrap(),
            Coordinate::new(0.0, 0.0).unwrap(),
            -1.0,
        )));
        assert!(matches!(
            classify(&[], &config),
            Err(ClassifyError::InvalidRadius { .. })
        ));
    }

    #[test]
    fn tier_breakdown_skips_days_without_distance() {
        let elsewhere = BTreeSet::from([d(1, 2), d(1, 3)]);
        let nearest = BTreeMap::from([(d(1, 2), 600_000.0)]);
        let tiers = tier_breakdown(&elsewhere, &nearest);
        assert_eq!(tiers[&DistanceTier::International], BTreeSet::from([d(1, 2)]));
        let total: usize = tiers.values().map(BTreeSet::len).sum();
        assert_eq!(total, 1);
    }
}
