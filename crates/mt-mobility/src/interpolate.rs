//! Time-to-position interpolation.
//!
//! [`position_at`] scans the detail schedule in order:
//!
//! * `start ≤ t ≤ arrival` (travelling): interpolate along the route at
//!   `(t - start) / travel_time_s`.
//! * `t < start` (not yet left): the movement's start waypoint.
//! * scan exhausted (done for the day): the last movement's end waypoint.
//!
//! The scan never backtracks, so a movement already passed is never
//! revisited.  Alongside the coordinate it returns a [`PositionLog`]
//! describing each step of the scan.

use std::fmt;

use chrono::NaiveDateTime;
use log::debug;

use mt_core::{GeoPoint, MtError, TimeOfDay};
use mt_schedule::WaypointLookup;
use mt_spatial::NetworkProvider;

use crate::{DetailSchedule, MobilityError, MobilityResult, RouteNode};

// ── PositionLog ───────────────────────────────────────────────────────────────

/// Human-readable trace of one [`position_at`] scan.  Identical inputs give
/// identical logs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionLog {
    lines: Vec<String>,
}

impl PositionLog {
    fn push(&mut self, line: String) {
        debug!("{line}");
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for PositionLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

// ── Query parsing ─────────────────────────────────────────────────────────────

/// Parse a query time: `"YYYY-MM-DD HH:MM:SS"` (the date is ignored) or a
/// bare `"HH:MM:SS"`.
pub fn parse_query_time(s: &str) -> Result<TimeOfDay, MtError> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(TimeOfDay::from_naive(dt.time()));
    }
    TimeOfDay::parse_hms(s).map_err(|_| {
        MtError::Parse(format!("invalid query time {s:?} (expected YYYY-MM-DD HH:MM:SS)"))
    })
}

// ── Interpolation ─────────────────────────────────────────────────────────────

/// Where the person is at `time`.
///
/// Errors only for an empty detail schedule, a returned waypoint that is not
/// assigned, or a route node missing from the provider.
pub fn position_at<P, L>(
    detail: &DetailSchedule,
    waypoints: &L,
    provider: &P,
    time: TimeOfDay,
) -> MobilityResult<(GeoPoint, PositionLog)>
where
    P: NetworkProvider + ?Sized,
    L: WaypointLookup + ?Sized,
{
    let waypoint = |name: &str| {
        waypoints
            .coord(name)
            .ok_or_else(|| MobilityError::UnassignedWaypoint(name.to_owned()))
    };

    let mut log = PositionLog::default();
    log.push(format!("Checking position at time: {time}"));

    for (i, m) in detail.iter().enumerate() {
        log.push(format!("Movement {i}: {} → {}", m.start_waypoint, m.end_waypoint));
        log.push(format!("    Start time: {}, Arrival time: {}", m.start_time, m.arrival_time));

        if m.start_time <= time && time <= m.arrival_time {
            let elapsed = time.secs_since(m.start_time) as f64;
            let fraction = if m.travel_time_s > 0.0 {
                (elapsed / m.travel_time_s).min(1.0)
            } else {
                1.0
            };
            log.push(format!("    Elapsed time: {elapsed} seconds"));
            log.push(format!("    Fraction of route traveled: {fraction:.2}"));

            let pos = interpolate_route(&m.route_nodes, fraction, m.distance_m, provider)?;
            log.push(format!("    Interpolated position: {pos}"));
            return Ok((pos, log));
        }

        if time < m.start_time {
            log.push(format!(
                "    Current time is before this movement. Returning start waypoint: {}",
                m.start_waypoint
            ));
            return Ok((waypoint(&m.start_waypoint)?, log));
        }
    }

    let last = detail.last().ok_or(MobilityError::NoMovements)?;
    let pos = waypoint(&last.end_waypoint)?;
    log.push(format!("All movements completed. Returning final position: {pos}"));
    Ok((pos, log))
}

/// Point at `fraction` of `total_distance_m` along `route`.
///
/// Segment lengths are great-circle distances between consecutive route
/// points, not the network's edge lengths, so the result can drift slightly
/// from the true road geometry.  If the walk ends before reaching the target
/// the last route point is returned.
pub fn interpolate_route<P: NetworkProvider + ?Sized>(
    route: &[RouteNode],
    fraction: f64,
    total_distance_m: f64,
    provider: &P,
) -> MobilityResult<GeoPoint> {
    let coords = route
        .iter()
        .map(|n| n.position(provider))
        .collect::<Result<Vec<GeoPoint>, _>>()?;
    let last = *coords.last().ok_or(MobilityError::EmptyRoute)?;

    let target = fraction * total_distance_m;
    let mut cumulative = 0.0;
    for pair in coords.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let segment = a.distance_m(b);
        if cumulative + segment >= target {
            let t = if segment > 0.0 { (target - cumulative) / segment } else { 0.0 };
            return Ok(a.lerp(b, t));
        }
        cumulative += segment;
    }
    Ok(last)
}
