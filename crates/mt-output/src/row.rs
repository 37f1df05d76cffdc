//! Plain data rows written by [`OutputWriter`](crate::OutputWriter)s.

use chrono::NaiveDateTime;
use mt_core::TimeOfDay;
use mt_mobility::DetailEntry;

/// Timestamp format of trace rows; the POI scorer reads the same prefix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One sampled position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRow {
    pub person_id: u32,
    pub timestamp: NaiveDateTime,
    pub lat:       f64,
    pub lon:       f64,
}

/// One movement of a detail schedule, flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementRow {
    pub person_id:      u32,
    pub start_waypoint: String,
    pub end_waypoint:   String,
    pub start_time:     TimeOfDay,
    pub arrival_time:   TimeOfDay,
    pub distance_m:     f64,
    pub travel_time_s:  f64,
    /// Route points joined with `;` (node ids, or `(lat, lon)` for
    /// straight-line fallbacks).
    pub route:          String,
}

impl MovementRow {
    pub fn from_entry(person_id: u32, entry: &DetailEntry) -> Self {
        let route = entry
            .route_nodes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";");
        Self {
            person_id,
            start_waypoint: entry.start_waypoint.clone(),
            end_waypoint: entry.end_waypoint.clone(),
            start_time: entry.start_time,
            arrival_time: entry.arrival_time,
            distance_m: entry.distance_m,
            travel_time_s: entry.travel_time_s,
            route,
        }
    }
}
