//! Core schedule types: `ScheduleEntry`, `Schedule`, and the raw
//! `CandidateEntry` that external callers supply before validation.

use std::fmt;

use serde::Deserialize;

use mt_core::TimeOfDay;

// ── ScheduleEntry ─────────────────────────────────────────────────────────────

/// One planned movement: leave `start_waypoint` at `start_time` and head for
/// `end_waypoint`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEntry {
    pub start_time:     TimeOfDay,
    pub start_waypoint: String,
    pub end_waypoint:   String,
}

impl ScheduleEntry {
    pub fn new(start_time: TimeOfDay, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start_time,
            start_waypoint: start.into(),
            end_waypoint:   end.into(),
        }
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} → {}", self.start_time, self.start_waypoint, self.end_waypoint)
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// An ordered list of movements.  Order is execution order; overlapping or
/// out-of-order times are kept as given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidate form of every entry, with times rendered as `HH:MM:SS`.
    pub fn to_candidates(&self) -> Vec<CandidateEntry> {
        self.entries.iter().map(CandidateEntry::from).collect()
    }
}

impl From<Vec<ScheduleEntry>> for Schedule {
    fn from(entries: Vec<ScheduleEntry>) -> Self {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleEntry;
    type IntoIter = std::slice::Iter<'a, ScheduleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ── CandidateEntry ────────────────────────────────────────────────────────────

/// An unvalidated movement as supplied by a user, a UI, or a CSV file.
///
/// `start_time` is kept as raw text; [`ScheduleBuilder`](crate::ScheduleBuilder)
/// decides whether it parses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CandidateEntry {
    pub start_time:     String,
    pub start_waypoint: String,
    pub end_waypoint:   String,
}

impl CandidateEntry {
    pub fn new(start_time: &str, start: &str, end: &str) -> Self {
        Self {
            start_time:     start_time.to_owned(),
            start_waypoint: start.to_owned(),
            end_waypoint:   end.to_owned(),
        }
    }
}

impl From<&ScheduleEntry> for CandidateEntry {
    fn from(e: &ScheduleEntry) -> Self {
        Self {
            start_time:     e.start_time.to_string(),
            start_waypoint: e.start_waypoint.clone(),
            end_waypoint:   e.end_waypoint.clone(),
        }
    }
}
