//! # whereabouts-classify
//!
//! Classify every working day of a year as **office**, **home**,
//! **elsewhere** or **missing** from a list of Timeline segments.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph TD
//!     A["&[Segment]"] --> B{"visit with start time?"}
//!     B -->|no| X["ignored"]
//!     B -->|yes| C{"in configured year?"}
//!     C -->|no| Y["skipped (other year)"]
//!     C -->|yes| D{"working day?"}
//!     D -->|yes| E["days with data"]
//!     E --> F{"within working hours?"}
//!     F -->|yes| G["days with working-hour visits"]
//!     G --> H["LocationMode::resolve()"]
//!     H --> I["office / home marks + min distance"]
//!     I --> J["set algebra: office wins over home"]
//!     J --> K["Classification"]
//! ```
//!
//! Two location modes share one pass:
//!
//! - [`LocationMode::Coordinates`] matches the visit's coordinate against the
//!   office and home positions within a radius, and records the distance used
//!   for the elsewhere [`DistanceTier`] breakdown.
//! - [`LocationMode::Tags`] matches the provider's semantic label against
//!   work-like and home-like tag sets.
//!
//! The [`EvidenceBase`] decides which days feed `elsewhere` and `missing`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use whereabouts_classify::{ClassifyConfig, LocationMode, TagMatcher, classify, to_json};
//! use whereabouts_io::read_timeline;
//!
//! let segments = read_timeline("Timeline.json".as_ref())?;
//! let config = ClassifyConfig::new(LocationMode::Tags(TagMatcher::default()))
//!     .with_year(Some(2025));
//! let result = classify(&segments, &config)?;
//! println!("{} office days", result.office().len());
//! let json = to_json(&result)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Classification configuration and location modes |
//! | `location` | Location resolution and office/home matching |
//! | `classifier` | The single-pass classifier |
//! | `tier` | Distance tiers for elsewhere days |
//! | `result` | Classification result and run counters |
//! | `output` | JSON serialization |
//! | `error` | Error types |

mod classifier;
mod config;
mod error;
mod location;
mod output;
mod result;
mod tier;

pub use classifier::classify;
pub use config::{ClassifyConfig, CoordinateMatcher, EvidenceBase, LocationMode, TagMatcher};
pub use error::ClassifyError;
pub use location::{Location, LocationMatch, Place};
pub use output::to_json;
pub use result::{Classification, ClassifyStats, DayCategory};
pub use tier::DistanceTier;
