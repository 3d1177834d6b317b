//! Human-readable text report.

use std::collections::BTreeSet;
use std::fmt::Write;

use chrono::NaiveDate;
use whereabouts_classify::{Classification, DistanceTier};

/// Dates listed per category before truncation.
const CATEGORY_PREVIEW: usize = 10;
/// Dates listed per distance tier before truncation.
const TIER_PREVIEW: usize = 5;

const RULE: &str = "==================================================";

/// Renders a classification as the text report printed by `analyze`.
pub fn render(result: &Classification) -> String {
    let mut out = String::new();

    let title = if result.elsewhere_breakdown().is_some() {
        "Working Day Analysis"
    } else {
        "Working Day Analysis (Semantic Tags)"
    };
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{title:^50}");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);

    category(&mut out, "Office Days", result.office());
    category(&mut out, "Home Days", result.home());

    match result.elsewhere_breakdown() {
        Some(breakdown) => {
            let _ = writeln!(out, "Elsewhere Days: {}", result.elsewhere().len());
            for tier in DistanceTier::ALL {
                let days = breakdown.get(&tier).cloned().unwrap_or_default();
                if days.is_empty() {
                    continue;
                }
                let _ = writeln!(out, "   {}: {} days", tier.label(), days.len());
                let _ = writeln!(out, "      {}", preview(&days, TIER_PREVIEW, " "));
            }
            let _ = writeln!(out);
        }
        None => category(&mut out, "Elsewhere Days", result.elsewhere()),
    }

    category(&mut out, "Missing Data Days", result.missing());

    let stats = result.stats();
    let period = result
        .year()
        .map_or_else(|| "all years".to_string(), |year| year.to_string());
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "Total working days with data: {}",
        result.classified_days()
    );
    let _ = writeln!(
        out,
        "Total working days missing data: {}",
        result.missing().len()
    );
    let _ = writeln!(
        out,
        "Processed {} segments from {period}",
        stats.segments_processed
    );
    if stats.segments_skipped_other_year > 0 {
        let _ = writeln!(
            out,
            "Skipped {} segments from other years",
            stats.segments_skipped_other_year
        );
    }
    let _ = writeln!(
        out,
        "Found data for {} working days",
        stats.days_with_data
    );
    let _ = writeln!(out, "{RULE}");
    out
}

/// One category block: count line, first dates, then the remainder count.
fn category(out: &mut String, name: &str, days: &BTreeSet<NaiveDate>) {
    let _ = writeln!(out, "{name}: {}", days.len());
    if !days.is_empty() {
        let _ = writeln!(out, "   {}", preview(days, CATEGORY_PREVIEW, "\n   "));
    }
    let _ = writeln!(out);
}

/// Comma-joined first `limit` dates, followed by `... and N more` after `sep`
/// when truncated.
fn preview(days: &BTreeSet<NaiveDate>, limit: usize, sep: &str) -> String {
    let shown: Vec<String> = days.iter().take(limit).map(ToString::to_string).collect();
    let mut line = shown.join(", ");
    if days.len() > limit {
        let _ = write!(line, "{sep}... and {} more", days.len() - limit);
    }
    line
}
