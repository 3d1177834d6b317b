use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Whereabouts working-day analyser.
#[derive(Parser)]
#[command(
    name = "whereabouts",
    version,
    about = "Classify working days as office, home, elsewhere or missing"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Classify the working days of a Timeline export.
    Analyze(AnalyzeArgs),
    /// List the expected working days of a year.
    Workdays(WorkdaysArgs),
}

/// Output format of the `analyze` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the Timeline export path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Calendar year to analyse.
    #[arg(short, long, env = "CALENDAR_YEAR")]
    pub year: Option<i32>,

    /// Analyse segments of every year; takes precedence over any year setting
    /// and disables missing days.
    #[arg(long)]
    pub all_years: bool,

    /// Location mode: "coordinates" or "tags".
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Evidence base: "auto", "working-hours" or "any-visit".
    #[arg(long)]
    pub evidence: Option<String>,

    /// Working-hours window, e.g. "9:00-18:00".
    #[arg(long, env = "WORKING_HOURS")]
    pub working_hours: Option<String>,

    /// Office latitude in degrees.
    #[arg(long, env = "OFFICE_LATITUDE", allow_negative_numbers = true)]
    pub office_lat: Option<f64>,

    /// Office longitude in degrees.
    #[arg(long, env = "OFFICE_LONGITUDE", allow_negative_numbers = true)]
    pub office_lng: Option<f64>,

    /// Home latitude in degrees.
    #[arg(long, env = "HOME_LATITUDE", allow_negative_numbers = true)]
    pub home_lat: Option<f64>,

    /// Home longitude in degrees.
    #[arg(long, env = "HOME_LONGITUDE", allow_negative_numbers = true)]
    pub home_lng: Option<f64>,

    /// Matching radius in meters.
    #[arg(short, long, env = "RADIUS", allow_negative_numbers = true)]
    pub radius: Option<f64>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the result to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `workdays` subcommand.
#[derive(clap::Args)]
pub struct WorkdaysArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Calendar year to list.
    #[arg(short, long, env = "CALENDAR_YEAR")]
    pub year: Option<i32>,

    /// Print the count only.
    #[arg(long)]
    pub count: bool,
}
