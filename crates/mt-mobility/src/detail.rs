//! The detail schedule: each movement with its concrete route and timing.

use std::fmt;

use log::warn;

use mt_core::{Speed, TimeOfDay};
use mt_schedule::{Schedule, ScheduleEntry, WaypointLookup};
use mt_spatial::NetworkProvider;

use crate::{RouteNode, Trajectory, TrajectoryEngine};

// ── DetailEntry ───────────────────────────────────────────────────────────────

/// A [`ScheduleEntry`] enriched with its trajectory and arrival time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetailEntry {
    pub start_waypoint: String,
    pub end_waypoint:   String,
    pub start_time:     TimeOfDay,
    pub route_nodes:    Vec<RouteNode>,
    pub distance_m:     f64,
    pub travel_time_s:  f64,
    /// `start_time + travel_time_s`, rounded up to whole seconds so the
    /// person has reached `end_waypoint` by then.  May wrap past midnight to
    /// an earlier clock time.
    pub arrival_time:   TimeOfDay,
}

impl DetailEntry {
    pub fn new(entry: &ScheduleEntry, trajectory: Trajectory) -> Self {
        Self {
            start_waypoint: entry.start_waypoint.clone(),
            end_waypoint:   entry.end_waypoint.clone(),
            start_time:     entry.start_time,
            arrival_time:   entry.start_time.add_secs_wrapping(trajectory.travel_time_s.ceil()),
            route_nodes:    trajectory.route_nodes,
            distance_m:     trajectory.distance_m,
            travel_time_s:  trajectory.travel_time_s,
        }
    }
}

impl fmt::Display for DetailEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {}: {} – {} ({:.1} m, {:.1} s, {} route points)",
            self.start_waypoint,
            self.end_waypoint,
            self.start_time,
            self.arrival_time,
            self.distance_m,
            self.travel_time_s,
            self.route_nodes.len(),
        )
    }
}

// ── DetailSchedule ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DetailSchedule {
    entries: Vec<DetailEntry>,
}

impl DetailSchedule {
    pub fn new(entries: Vec<DetailEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DetailEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DetailEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&DetailEntry> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a DetailSchedule {
    type Item = &'a DetailEntry;
    type IntoIter = std::slice::Iter<'a, DetailEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Compute a trajectory for every schedule entry, in schedule order.
///
/// Entries whose waypoints cannot be resolved are skipped with a warning;
/// a schedule produced by [`mt_schedule::ScheduleBuilder`] never has any.
pub fn build_detail_schedule<P, L>(
    schedule: &Schedule,
    waypoints: &L,
    engine: &TrajectoryEngine<'_, P>,
    speed: Speed,
) -> DetailSchedule
where
    P: NetworkProvider + ?Sized,
    L: WaypointLookup + ?Sized,
{
    let mut entries = Vec::with_capacity(schedule.len());
    for entry in schedule {
        let (Some(from), Some(to)) =
            (waypoints.coord(&entry.start_waypoint), waypoints.coord(&entry.end_waypoint))
        else {
            warn!("skipping movement {entry}: waypoint not assigned");
            continue;
        };
        entries.push(DetailEntry::new(entry, engine.build(from, to, speed)));
    }
    DetailSchedule::new(entries)
}
