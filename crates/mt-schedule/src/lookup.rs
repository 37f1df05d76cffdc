//! Waypoint name resolution.
//!
//! Schedule validation and position interpolation both need to ask "is this
//! waypoint assigned, and where is it?" without depending on the agent crate
//! that owns the actual waypoint table.

use std::collections::{BTreeMap, HashMap};

use mt_core::GeoPoint;

/// Resolves a waypoint name to its assigned coordinate.
pub trait WaypointLookup {
    /// `None` if the name is unknown *or* known but unset.
    fn coord(&self, name: &str) -> Option<GeoPoint>;

    fn is_assigned(&self, name: &str) -> bool {
        self.coord(name).is_some()
    }
}

impl WaypointLookup for BTreeMap<String, Option<GeoPoint>> {
    fn coord(&self, name: &str) -> Option<GeoPoint> {
        self.get(name).copied().flatten()
    }
}

impl WaypointLookup for BTreeMap<String, GeoPoint> {
    fn coord(&self, name: &str) -> Option<GeoPoint> {
        self.get(name).copied()
    }
}

impl WaypointLookup for HashMap<String, GeoPoint> {
    fn coord(&self, name: &str) -> Option<GeoPoint> {
        self.get(name).copied()
    }
}

impl<T: WaypointLookup + ?Sized> WaypointLookup for &T {
    fn coord(&self, name: &str) -> Option<GeoPoint> {
        (**self).coord(name)
    }
}
