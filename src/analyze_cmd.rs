//! Analyze command: classify the working days of a Timeline export.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use whereabouts_classify::{classify, to_json};
use whereabouts_io::read_timeline;

use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::config::WhereaboutsConfig;
use crate::{convert, report};

/// Run the classification pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    // 1. Configuration: file, then CLI/env overrides
    let config = WhereaboutsConfig::load(args.config.as_deref())?;
    let classify_cfg = convert::build_classify_config(&config, &args)?;
    info!(
        year = ?classify_cfg.year(),
        hours = %classify_cfg.working_hours(),
        days = %classify_cfg.working_days(),
        evidence = ?classify_cfg.evidence_base(),
        "configuration resolved"
    );

    // 2. Timeline export
    let input = args.input.as_ref().unwrap_or(&config.io.input);
    info!(path = %input.display(), "loading timeline");
    let segments = read_timeline(input)
        .with_context(|| format!("failed to read timeline: {}", input.display()))?;

    // 3. Classification
    let result = classify(&segments, &classify_cfg).context("classification failed")?;

    // 4. Output
    let rendered = match args.format {
        OutputFormat::Text => report::render(&result),
        OutputFormat::Json => to_json(&result).context("failed to serialize result")?,
    };
    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "result written");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
