use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level whereabouts configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhereaboutsConfig {
    /// Analysis settings.
    #[serde(default)]
    pub analysis: AnalysisToml,

    /// Coordinate-mode settings.
    #[serde(default)]
    pub coordinates: CoordinatesToml,

    /// Tag-mode settings.
    #[serde(default)]
    pub tags: TagsToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,
}

impl WhereaboutsConfig {
    /// Loads a config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    /// Absent means all years.
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default = "default_working_hours")]
    pub working_hours: String,
    #[serde(default = "default_working_days")]
    pub working_days: Vec<String>,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_evidence")]
    pub evidence: String,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            year: None,
            working_hours: default_working_hours(),
            working_days: default_working_days(),
            mode: default_mode(),
            evidence: default_evidence(),
        }
    }
}

fn default_working_hours() -> String {
    "9:00-18:00".to_string()
}
fn default_working_days() -> Vec<String> {
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_mode() -> String {
    "coordinates".to_string()
}
fn default_evidence() -> String {
    "auto".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoordinatesToml {
    /// `[lat, lng]` in degrees.
    #[serde(default = "default_office")]
    pub office: [f64; 2],
    /// `[lat, lng]` in degrees.
    #[serde(default = "default_home")]
    pub home: [f64; 2],
    #[serde(default = "default_radius_m")]
    pub radius_m: f64,
}

impl Default for CoordinatesToml {
    fn default() -> Self {
        Self {
            office: default_office(),
            home: default_home(),
            radius_m: default_radius_m(),
        }
    }
}

fn default_office() -> [f64; 2] {
    [52.520008, 13.404954]
}
fn default_home() -> [f64; 2] {
    [52.516275, 13.377704]
}
fn default_radius_m() -> f64 {
    100.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagsToml {
    #[serde(default = "default_work_tags")]
    pub work: Vec<String>,
    #[serde(default = "default_home_tags")]
    pub home: Vec<String>,
}

impl Default for TagsToml {
    fn default() -> Self {
        Self {
            work: default_work_tags(),
            home: default_home_tags(),
        }
    }
}

fn default_work_tags() -> Vec<String> {
    vec!["WORK".to_string(), "INFERRED_WORK".to_string()]
}
fn default_home_tags() -> Vec<String> {
    vec!["HOME".to_string(), "INFERRED_HOME".to_string()]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_input")]
    pub input: PathBuf,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: default_input(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("Timeline.json")
}
