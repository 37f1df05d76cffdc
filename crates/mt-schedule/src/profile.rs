//! Per-category profile table.
//!
//! Each [`PersonCategory`] maps to a [`CategoryProfile`]: the waypoints a
//! person of that category owns (and how to place them), the fixed daily
//! template, and the range their movement speed is drawn from.  Categories
//! are pure data; one generic engine serves them all.
//!
//! | Category | Waypoints (feature, near)                                    | Speed (m/s) |
//! |----------|--------------------------------------------------------------|-------------|
//! | child    | home (residential), school (schools, home), park (parks)     | 0.8 – 1.4   |
//! | adult    | home, workplace (workplaces), gym (home), market (home)      | 8.3 – 11.1  |
//! | older    | home, healthcare (home), park (home)                         | 0.8 – 1.4   |

use std::collections::HashMap;

use mt_core::{FeatureCategory, PersonCategory, SimRng, TimeOfDay};

use crate::ScheduleEntry;

// ── WaypointSpec ──────────────────────────────────────────────────────────────

/// How to place one named waypoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaypointSpec {
    pub name:       String,
    pub category:   FeatureCategory,
    /// Pick the feature closest to this already-placed waypoint instead of
    /// a random one.
    pub nearest_to: Option<String>,
}

impl WaypointSpec {
    pub fn new(name: &str, category: FeatureCategory) -> Self {
        Self { name: name.to_owned(), category, nearest_to: None }
    }

    pub fn near(mut self, reference: &str) -> Self {
        self.nearest_to = Some(reference.to_owned());
        self
    }
}

// ── SpeedRange ────────────────────────────────────────────────────────────────

/// Closed interval `[min_mps, max_mps]` a person's speed is drawn from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpeedRange {
    pub min_mps: f64,
    pub max_mps: f64,
}

impl SpeedRange {
    pub const fn new(min_mps: f64, max_mps: f64) -> Self {
        Self { min_mps, max_mps }
    }

    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        rng.uniform(self.min_mps, self.max_mps)
    }
}

// ── CategoryProfile ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryProfile {
    /// Placement order.  A `nearest_to` reference must name an earlier entry
    /// or the assigner rejects the profile.
    pub waypoints:   Vec<WaypointSpec>,
    pub template:    Vec<ScheduleEntry>,
    pub speed_range: SpeedRange,
}

impl CategoryProfile {
    pub fn waypoint_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.waypoints.iter().map(|w| w.name.as_str())
    }

    pub fn has_waypoint(&self, name: &str) -> bool {
        self.waypoints.iter().any(|w| w.name == name)
    }

    pub fn child() -> Self {
        use FeatureCategory::*;
        Self {
            waypoints: vec![
                WaypointSpec::new("home", Residential),
                WaypointSpec::new("school", Schools).near("home"),
                WaypointSpec::new("park", Parks),
            ],
            template: vec![
                entry(7, "home", "school"),
                entry(13, "school", "home"),
                entry(15, "home", "park"),
                entry(18, "park", "home"),
            ],
            speed_range: SpeedRange::new(0.8, 1.4),
        }
    }

    pub fn adult() -> Self {
        use FeatureCategory::*;
        Self {
            waypoints: vec![
                WaypointSpec::new("home", Residential),
                WaypointSpec::new("workplace", Workplaces),
                WaypointSpec::new("gym", Gyms).near("home"),
                WaypointSpec::new("market", Markets).near("home"),
            ],
            template: vec![
                entry(7, "home", "workplace"),
                entry(12, "workplace", "market"),
                entry(13, "market", "workplace"),
                entry(18, "workplace", "gym"),
                entry(20, "gym", "home"),
            ],
            speed_range: SpeedRange::new(8.3, 11.1),
        }
    }

    pub fn older() -> Self {
        use FeatureCategory::*;
        Self {
            waypoints: vec![
                WaypointSpec::new("home", Residential),
                WaypointSpec::new("healthcare", Healthcare).near("home"),
                WaypointSpec::new("park", Parks).near("home"),
            ],
            template: vec![
                entry(8, "home", "park"),
                entry(10, "park", "healthcare"),
                entry(12, "healthcare", "home"),
                entry(16, "home", "park"),
                entry(19, "park", "home"),
            ],
            speed_range: SpeedRange::new(0.8, 1.4),
        }
    }

    /// The built-in profile for `category`.
    pub fn builtin(category: PersonCategory) -> Self {
        match category {
            PersonCategory::Child => Self::child(),
            PersonCategory::Adult => Self::adult(),
            PersonCategory::Older => Self::older(),
        }
    }
}

fn entry(hour: u32, start: &str, end: &str) -> ScheduleEntry {
    ScheduleEntry::new(TimeOfDay::from_secs_wrapping(hour * 3_600), start, end)
}

// ── ProfileProvider ───────────────────────────────────────────────────────────

/// Supplies the profile for a person category.
///
/// Implement this to add or override categories without touching the
/// assignment or schedule engines.
pub trait ProfileProvider: Send + Sync {
    fn profile(&self, category: PersonCategory) -> Option<&CategoryProfile>;
}

/// The three built-in profiles, individually overridable.
#[derive(Clone, Debug)]
pub struct BuiltinProfiles {
    profiles: HashMap<PersonCategory, CategoryProfile>,
}

impl BuiltinProfiles {
    pub fn new() -> Self {
        let profiles = PersonCategory::ALL
            .iter()
            .map(|&c| (c, CategoryProfile::builtin(c)))
            .collect();
        Self { profiles }
    }

    /// Replace the profile used for `category`.
    pub fn with_profile(mut self, category: PersonCategory, profile: CategoryProfile) -> Self {
        self.profiles.insert(category, profile);
        self
    }
}

impl Default for BuiltinProfiles {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileProvider for BuiltinProfiles {
    fn profile(&self, category: PersonCategory) -> Option<&CategoryProfile> {
        self.profiles.get(&category)
    }
}
