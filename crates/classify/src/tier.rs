//! Distance tiers for elsewhere days.

use serde::Serialize;

/// How far from office and home an elsewhere day was spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceTier {
    /// Under 50 km.
    Local,
    /// 50 km up to 150 km.
    Regional,
    /// 150 km up to 500 km.
    National,
    /// 500 km and beyond.
    International,
}

impl DistanceTier {
    /// All tiers, nearest first.
    pub const ALL: [DistanceTier; 4] = [
        DistanceTier::Local,
        DistanceTier::Regional,
        DistanceTier::National,
        DistanceTier::International,
    ];

    /// Buckets a distance given in kilometers.
    pub fn from_km(km: f64) -> Self {
        if km < 50.0 {
            DistanceTier::Local
        } else if km < 150.0 {
            DistanceTier::Regional
        } else if km < 500.0 {
            DistanceTier::National
        } else {
            DistanceTier::International
        }
    }

    /// Buckets a distance given in meters.
    pub fn from_meters(meters: f64) -> Self {
        Self::from_km(meters / 1000.0)
    }

    /// Human-readable name with its range.
    pub fn label(self) -> &'static str {
        match self {
            DistanceTier::Local => "Local (< 50km)",
            DistanceTier::Regional => "Regional (50-150km)",
            DistanceTier::National => "National (150-500km)",
            DistanceTier::International => "International (500km+)",
        }
    }
}
