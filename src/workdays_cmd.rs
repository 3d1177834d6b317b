//! Workdays command: list the expected working days of a year.

use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::info_span;

use whereabouts_calendar::{expected_working_days, weekday_name};

use crate::cli::WorkdaysArgs;
use crate::config::WhereaboutsConfig;
use crate::convert;

/// Print the working days that `analyze` expects evidence for.
pub fn run(args: WorkdaysArgs) -> Result<()> {
    let _cmd = info_span!("workdays").entered();

    let config = WhereaboutsConfig::load(args.config.as_deref())?;
    let year = args.year.or(config.analysis.year).context(
        "no year given: pass --year, set CALENDAR_YEAR or set [analysis].year in config",
    )?;
    let days = convert::build_working_days(&config.analysis.working_days)?;

    let expected = expected_working_days(year, &days)
        .with_context(|| format!("cannot enumerate working days of {year}"))?;

    if args.count {
        println!("{}", expected.len());
        return Ok(());
    }

    println!("{} working days in {year} ({days})", expected.len());
    for day in &expected {
        println!("{day}  {}", weekday_name(day.weekday()));
    }
    Ok(())
}
