//! Schedule construction.
//!
//! Two modes:
//!
//! * **Template**: the category's fixed daily plan.
//! * **Validated input**: caller-supplied [`CandidateEntry`]s.  Each is
//!   normalised to `HH:MM` (seconds dropped), then kept only if both
//!   waypoints are assigned and the time parses.  Rejected entries are
//!   logged and skipped; survivors keep their relative order.
//!
//! [`ScheduleBuilder::build`] picks validated input when any candidates are
//! supplied and falls back to the template otherwise.  Template entries get
//! the same waypoint check, so a waypoint that could not be placed removes
//! its movements rather than producing an unroutable one.

use std::fmt;

use log::{debug, warn};

use mt_core::TimeOfDay;

use crate::{CandidateEntry, CategoryProfile, Schedule, ScheduleEntry, WaypointLookup};

/// Why a movement was left out of the schedule.
#[derive(Debug)]
enum Rejection<'a> {
    StartWaypoint(&'a str),
    EndWaypoint(&'a str),
    Time(&'a str),
}

impl fmt::Display for Rejection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::StartWaypoint(w) => write!(f, "invalid or unassigned start waypoint {w:?}"),
            Rejection::EndWaypoint(w) => write!(f, "invalid or unassigned end waypoint {w:?}"),
            Rejection::Time(t) => write!(f, "invalid start time {t:?} (expected HH:MM)"),
        }
    }
}

/// Builds the [`Schedule`] for one person of a given profile.
#[derive(Clone, Copy, Debug)]
pub struct ScheduleBuilder<'a> {
    profile: &'a CategoryProfile,
}

impl<'a> ScheduleBuilder<'a> {
    pub fn new(profile: &'a CategoryProfile) -> Self {
        Self { profile }
    }

    /// Validated input if `candidates` is non-empty, template otherwise.
    pub fn build<L: WaypointLookup + ?Sized>(
        &self,
        candidates: &[CandidateEntry],
        waypoints: &L,
    ) -> Schedule {
        if candidates.is_empty() {
            self.template(waypoints)
        } else {
            Self::validated(candidates, waypoints)
        }
    }

    /// The category template, minus movements touching unassigned waypoints.
    pub fn template<L: WaypointLookup + ?Sized>(&self, waypoints: &L) -> Schedule {
        let mut schedule = Schedule::empty();
        for entry in &self.profile.template {
            let check = check_waypoints(&entry.start_waypoint, &entry.end_waypoint, waypoints);
            match check {
                Ok(()) => schedule.push(entry.clone()),
                Err(why) => warn!("skipping template movement {entry}: {why}"),
            }
        }
        schedule
    }

    /// Validate caller-supplied movements, keeping the ones that pass.
    pub fn validated<L: WaypointLookup + ?Sized>(
        candidates: &[CandidateEntry],
        waypoints: &L,
    ) -> Schedule {
        let mut schedule = Schedule::empty();
        for c in candidates {
            match validate(c, waypoints) {
                Ok(entry) => {
                    debug!("added movement {entry}");
                    schedule.push(entry);
                }
                Err(why) => warn!(
                    "skipping movement {} → {} at {:?}: {why}",
                    c.start_waypoint, c.end_waypoint, c.start_time
                ),
            }
        }
        schedule
    }
}

fn check_waypoints<'c, L: WaypointLookup + ?Sized>(
    start: &'c str,
    end: &'c str,
    waypoints: &L,
) -> Result<(), Rejection<'c>> {
    if !waypoints.is_assigned(start) {
        return Err(Rejection::StartWaypoint(start));
    }
    if !waypoints.is_assigned(end) {
        return Err(Rejection::EndWaypoint(end));
    }
    Ok(())
}

fn validate<'c, L: WaypointLookup + ?Sized>(
    c: &'c CandidateEntry,
    waypoints: &L,
) -> Result<ScheduleEntry, Rejection<'c>> {
    check_waypoints(&c.start_waypoint, &c.end_waypoint, waypoints)?;
    let start_time =
        TimeOfDay::parse_hm_lenient(&c.start_time).map_err(|_| Rejection::Time(&c.start_time))?;
    Ok(ScheduleEntry::new(start_time, c.start_waypoint.as_str(), c.end_waypoint.as_str()))
}
