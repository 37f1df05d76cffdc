//! Closed category enums shared by the profile table, the waypoint assigner,
//! and the feature index.
//!
//! Category-specific *behaviour* (which waypoints, which daily template) is
//! data, not code: it lives in `mt-schedule`'s profile table keyed by
//! [`PersonCategory`].

use std::fmt;
use std::str::FromStr;

use crate::MtError;

// ── PersonCategory ────────────────────────────────────────────────────────────

/// The kind of person being simulated.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PersonCategory {
    Child,
    Adult,
    Older,
}

impl PersonCategory {
    pub const ALL: [PersonCategory; 3] =
        [PersonCategory::Child, PersonCategory::Adult, PersonCategory::Older];

    pub fn as_str(self) -> &'static str {
        match self {
            PersonCategory::Child => "child",
            PersonCategory::Adult => "adult",
            PersonCategory::Older => "older",
        }
    }
}

impl fmt::Display for PersonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonCategory {
    type Err = MtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "child" => Ok(PersonCategory::Child),
            "adult" => Ok(PersonCategory::Adult),
            "older" => Ok(PersonCategory::Older),
            other => Err(MtError::Parse(format!(
                "unknown person category {other:?}: expected child, adult, or older"
            ))),
        }
    }
}

// ── FeatureCategory ───────────────────────────────────────────────────────────

/// A class of geographic feature a waypoint can be drawn from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FeatureCategory {
    Residential,
    Parks,
    Schools,
    Workplaces,
    Markets,
    Healthcare,
    PlayAreas,
    Gyms,
}

impl FeatureCategory {
    pub const ALL: [FeatureCategory; 8] = [
        FeatureCategory::Residential,
        FeatureCategory::Parks,
        FeatureCategory::Schools,
        FeatureCategory::Workplaces,
        FeatureCategory::Markets,
        FeatureCategory::Healthcare,
        FeatureCategory::PlayAreas,
        FeatureCategory::Gyms,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureCategory::Residential => "residential",
            FeatureCategory::Parks       => "parks",
            FeatureCategory::Schools     => "schools",
            FeatureCategory::Workplaces  => "workplaces",
            FeatureCategory::Markets     => "markets",
            FeatureCategory::Healthcare  => "healthcare",
            FeatureCategory::PlayAreas   => "play_areas",
            FeatureCategory::Gyms        => "gyms",
        }
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
