//! Waypoint assignment.
//!
//! A person owns a fixed, category-dependent set of named waypoints.  Each
//! is either assigned (`Some(coord)`) or unset (`None`); an unset waypoint is
//! kept in the table so it stays distinct from one that was never declared.
//!
//! # Automatic placement
//!
//! Specs are placed in dependency order (a stable topological sort of the
//! `nearest_to` references, declaration order among ready specs).  For one
//! spec with feature category `c`:
//!
//! | Features of `c` | `nearest_to` | Result                                      |
//! |-----------------|--------------|---------------------------------------------|
//! | none            | any          | uniform point in the provider's bbox        |
//! | some            | `Some(r)`    | centroid of the feature closest to `r`      |
//! | some, areal     | `None`       | uniform point inside a random areal feature |
//! | some, no areal  | `None`       | uniform point in the provider's bbox        |
//!
//! Interior sampling rejects against the feature's bounding box and gives up
//! after `AssignConfig::max_polygon_attempts`, leaving the waypoint unset.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, info, warn};

use mt_core::{GeoPoint, SimRng};
use mt_schedule::{CategoryProfile, WaypointLookup, WaypointSpec};
use mt_spatial::{Feature, NetworkProvider};

use crate::{AgentError, AgentResult};

// ── Waypoints ─────────────────────────────────────────────────────────────────

/// Name → assigned coordinate (or unset).  Persisted as a JSON object whose
/// values are `[lat, lon]` or `null`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Waypoints {
    map: BTreeMap<String, Option<GeoPoint>>,
}

impl Waypoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, pos: Option<GeoPoint>) {
        self.map.insert(name.to_owned(), pos);
    }

    /// `None` if `name` was never declared; `Some(None)` if it is unset.
    pub fn get(&self, name: &str) -> Option<Option<GeoPoint>> {
        self.map.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<GeoPoint>)> + '_ {
        self.map.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of waypoints with a coordinate.
    pub fn assigned_count(&self) -> usize {
        self.map.values().filter(|v| v.is_some()).count()
    }

    pub fn as_map(&self) -> &BTreeMap<String, Option<GeoPoint>> {
        &self.map
    }

    pub fn into_map(self) -> BTreeMap<String, Option<GeoPoint>> {
        self.map
    }
}

impl From<BTreeMap<String, Option<GeoPoint>>> for Waypoints {
    fn from(map: BTreeMap<String, Option<GeoPoint>>) -> Self {
        Self { map }
    }
}

impl WaypointLookup for Waypoints {
    fn coord(&self, name: &str) -> Option<GeoPoint> {
        self.map.get(name).copied().flatten()
    }
}

impl fmt::Display for Waypoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, pos) in &self.map {
            match pos {
                Some(p) => writeln!(f, "  {name}: {p}")?,
                None => writeln!(f, "  {name}: not assigned")?,
            }
        }
        Ok(())
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AssignConfig {
    /// Rejection-sampling attempts per polygon before giving up.
    pub max_polygon_attempts: u32,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self { max_polygon_attempts: 1_000 }
    }
}

// ── AutoAssigner ──────────────────────────────────────────────────────────────

/// Places every waypoint of a profile from the provider's features.
#[derive(Clone, Debug, Default)]
pub struct AutoAssigner {
    pub config: AssignConfig,
}

impl AutoAssigner {
    pub fn new(config: AssignConfig) -> Self {
        Self { config }
    }

    pub fn assign<P: NetworkProvider + ?Sized>(
        &self,
        profile: &CategoryProfile,
        provider: &P,
        rng: &mut SimRng,
    ) -> AgentResult<Waypoints> {
        let mut waypoints = Waypoints::new();
        for spec in dependency_order(&profile.waypoints)? {
            let pos = self.place(spec, &waypoints, provider, rng)?;
            debug!("assigned {} ({}) at {pos:?}", spec.name, spec.category);
            waypoints.set(&spec.name, pos);
        }
        Ok(waypoints)
    }

    fn place<P: NetworkProvider + ?Sized>(
        &self,
        spec: &WaypointSpec,
        placed: &Waypoints,
        provider: &P,
        rng: &mut SimRng,
    ) -> AgentResult<Option<GeoPoint>> {
        // Resolve the reference first so a bad profile fails regardless of
        // what features the map happens to have.
        let reference = match &spec.nearest_to {
            Some(r) => Some(placed.coord(r).ok_or_else(|| AgentError::DependencyOrder {
                waypoint:  spec.name.clone(),
                reference: r.clone(),
            })?),
            None => None,
        };

        let features = provider.features(spec.category);
        if features.is_empty() {
            info!("no {} features for {}; falling back to bounding box", spec.category, spec.name);
            return random_point_in_bbox(provider, rng).map(Some);
        }

        if let Some(r) = reference {
            return Ok(nearest_centroid(features, r));
        }

        let areal: Vec<&Feature> = features.iter().filter(|f| f.is_areal()).collect();
        match rng.choose(&areal) {
            Some(f) => Ok(self.random_point_in(f, rng)),
            None => random_point_in_bbox(provider, rng).map(Some),
        }
    }

    fn random_point_in(&self, feature: &Feature, rng: &mut SimRng) -> Option<GeoPoint> {
        let b = feature.bounds()?;
        for _ in 0..self.config.max_polygon_attempts {
            let p = GeoPoint::new(rng.uniform(b.min_lat, b.max_lat), rng.uniform(b.min_lon, b.max_lon));
            if feature.contains(p) {
                return Some(p);
            }
        }
        warn!(
            "unable to find a random point in polygon after {} attempts",
            self.config.max_polygon_attempts
        );
        None
    }
}

fn nearest_centroid(features: &[Feature], reference: GeoPoint) -> Option<GeoPoint> {
    features
        .iter()
        .map(Feature::centroid)
        .min_by(|a, b| reference.distance_m(*a).total_cmp(&reference.distance_m(*b)))
}

fn random_point_in_bbox<P: NetworkProvider + ?Sized>(
    provider: &P,
    rng: &mut SimRng,
) -> AgentResult<GeoPoint> {
    let b = provider.bounding_box().ok_or(AgentError::NoBoundingBox)?;
    let lon = rng.uniform(b.min_lon, b.max_lon);
    let lat = rng.uniform(b.min_lat, b.max_lat);
    Ok(GeoPoint::new(lat, lon))
}

/// Specs reordered so every `nearest_to` reference precedes its dependent.
///
/// Among specs whose reference is satisfied, declaration order wins, so a
/// profile that is already well ordered comes back unchanged.
fn dependency_order(specs: &[WaypointSpec]) -> AgentResult<Vec<&WaypointSpec>> {
    for s in specs {
        if let Some(r) = &s.nearest_to {
            if !specs.iter().any(|o| &o.name == r) {
                return Err(AgentError::DependencyOrder {
                    waypoint:  s.name.clone(),
                    reference: r.clone(),
                });
            }
        }
    }

    let mut ordered: Vec<&WaypointSpec> = Vec::with_capacity(specs.len());
    let mut pending: Vec<&WaypointSpec> = specs.iter().collect();
    while !pending.is_empty() {
        let ready = pending.iter().position(|s| match &s.nearest_to {
            None => true,
            Some(r) => ordered.iter().any(|o| &o.name == r),
        });
        match ready {
            Some(i) => ordered.push(pending.remove(i)),
            None => {
                // Everything left waits on something else left: a cycle.
                let s = pending[0];
                return Err(AgentError::DependencyOrder {
                    waypoint:  s.name.clone(),
                    reference: s.nearest_to.clone().unwrap_or_default(),
                });
            }
        }
    }
    Ok(ordered)
}

// ── ManualAssigner ────────────────────────────────────────────────────────────

/// Accepts caller-chosen coordinates for a profile's waypoints.
///
/// Names outside the profile and out-of-range coordinates are dropped with
/// a warning.  Profile waypoints left without a valid coordinate are unset.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualAssigner;

impl ManualAssigner {
    pub fn assign<I, S>(&self, profile: &CategoryProfile, supplied: I) -> Waypoints
    where
        I: IntoIterator<Item = (S, Option<GeoPoint>)>,
        S: AsRef<str>,
    {
        let mut waypoints = Waypoints::new();
        for name in profile.waypoint_names() {
            waypoints.set(name, None);
        }
        for (name, pos) in supplied {
            let name = name.as_ref();
            if !profile.has_waypoint(name) {
                warn!("ignoring unknown waypoint {name:?}");
                continue;
            }
            match pos {
                Some(p) if p.is_valid() => {
                    debug!("assigned {name} at {p}");
                    waypoints.set(name, Some(p));
                }
                Some(p) => warn!("invalid coordinates for {name}: {p}; skipping"),
                None => {}
            }
        }
        waypoints
    }
}
