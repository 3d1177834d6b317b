//! Pure conversion functions: TOML config + CLI overrides -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::cli::AnalyzeArgs;
use crate::config::*;

use whereabouts_calendar::{Coordinate, WorkingDays, WorkingHours};
use whereabouts_classify::{
    ClassifyConfig, CoordinateMatcher, EvidenceBase, LocationMode, TagMatcher,
};

/// Location mode names accepted in config and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Coordinates,
    Tags,
}

/// Parses a location mode name.
pub fn parse_mode(s: &str) -> Result<ModeKind> {
    match s.to_lowercase().as_str() {
        "coordinates" | "coords" => Ok(ModeKind::Coordinates),
        "tags" | "semantic" => Ok(ModeKind::Tags),
        other => bail!("unknown location mode: {other:?} (expected \"coordinates\" or \"tags\")"),
    }
}

/// Parses an evidence base name; `"auto"` yields `None`.
pub fn parse_evidence(s: &str) -> Result<Option<EvidenceBase>> {
    match s.to_lowercase().as_str() {
        "auto" => Ok(None),
        "working-hours" | "working-hour-visits" => Ok(Some(EvidenceBase::WorkingHourVisits)),
        "any-visit" => Ok(Some(EvidenceBase::AnyVisit)),
        other => bail!(
            "unknown evidence base: {other:?} (expected \"auto\", \"working-hours\" or \"any-visit\")"
        ),
    }
}

/// Parses a working-hours window such as `"9:00-18:00"`.
pub fn parse_working_hours(s: &str) -> Result<WorkingHours> {
    s.parse().with_context(|| format!("invalid working hours: {s:?}"))
}

/// Builds a [`Coordinate`] from a `[lat, lng]` pair.
pub fn build_coordinate(name: &str, [lat, lng]: [f64; 2]) -> Result<Coordinate> {
    Coordinate::new(lat, lng).with_context(|| format!("invalid {name} coordinate"))
}

/// Resolves the year filter: `--all-years` wins, then `--year`, then the file.
pub fn resolve_year(analysis: &AnalysisToml, year: Option<i32>, all_years: bool) -> Option<i32> {
    if all_years {
        None
    } else {
        year.or(analysis.year)
    }
}

/// Builds a [`CoordinateMatcher`] from the TOML coordinates, with per-component
/// overrides from the command line.
pub fn build_coordinate_matcher(
    coords: &CoordinatesToml,
    args: &AnalyzeArgs,
) -> Result<CoordinateMatcher> {
    let office = build_coordinate(
        "office",
        [
            args.office_lat.unwrap_or(coords.office[0]),
            args.office_lng.unwrap_or(coords.office[1]),
        ],
    )?;
    let home = build_coordinate(
        "home",
        [
            args.home_lat.unwrap_or(coords.home[0]),
            args.home_lng.unwrap_or(coords.home[1]),
        ],
    )?;
    let radius_m = args.radius.unwrap_or(coords.radius_m);
    Ok(CoordinateMatcher::new(office, home, radius_m))
}

/// Builds a [`TagMatcher`] from the TOML tag sets.
pub fn build_tag_matcher(tags: &TagsToml) -> TagMatcher {
    TagMatcher::new(tags.work.iter().cloned(), tags.home.iter().cloned())
}

/// Builds the working weekdays from their English names.
pub fn build_working_days(names: &[String]) -> Result<WorkingDays> {
    WorkingDays::from_names(names).context("invalid working_days")
}

/// Builds a validated [`ClassifyConfig`] for the `analyze` command.
pub fn build_classify_config(
    config: &WhereaboutsConfig,
    args: &AnalyzeArgs,
) -> Result<ClassifyConfig> {
    let analysis = &config.analysis;

    let mode = match parse_mode(args.mode.as_deref().unwrap_or(&analysis.mode))? {
        ModeKind::Coordinates => {
            LocationMode::Coordinates(build_coordinate_matcher(&config.coordinates, args)?)
        }
        ModeKind::Tags => LocationMode::Tags(build_tag_matcher(&config.tags)),
    };

    let hours = parse_working_hours(
        args.working_hours
            .as_deref()
            .unwrap_or(&analysis.working_hours),
    )?;
    let days = build_working_days(&analysis.working_days)?;
    let evidence = parse_evidence(args.evidence.as_deref().unwrap_or(&analysis.evidence))?;

    let mut cfg = ClassifyConfig::new(mode)
        .with_year(resolve_year(analysis, args.year, args.all_years))
        .with_working_hours(hours)
        .with_working_days(days);
    if let Some(evidence) = evidence {
        cfg = cfg.with_evidence_base(evidence);
    }

    cfg.validate().context("invalid analysis configuration")?;
    Ok(cfg)
}
