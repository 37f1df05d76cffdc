//! `mt-schedule` — what a person does during the day, before any routing.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`activity`] | `ScheduleEntry`, `Schedule`, `CandidateEntry`               |
//! | [`lookup`]   | `WaypointLookup` trait (name → assigned coordinate)         |
//! | [`profile`]  | `WaypointSpec`, `SpeedRange`, `CategoryProfile`, `ProfileProvider`, `BuiltinProfiles` |
//! | [`builder`]  | `ScheduleBuilder` — template and validated-input modes      |
//! | [`loader`]   | `load_candidates_csv`, `load_candidates_reader`             |
//! | [`error`]    | `ScheduleError`, `ScheduleResult<T>`                        |
//!
//! # Schedule model (summary)
//!
//! A schedule is an ordered list of movements for one generic day:
//!
//! ```text
//! 07:00  home      → workplace
//! 12:00  workplace → market
//! ...
//! ```
//!
//! Insertion order is execution order; entries are never sorted by time.
//! Every entry names two waypoints that must be assigned for the person, so
//! the builder drops any entry that refers to a missing or unset waypoint.

pub mod activity;
pub mod builder;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod profile;

#[cfg(test)]
mod tests;

pub use activity::{CandidateEntry, Schedule, ScheduleEntry};
pub use builder::ScheduleBuilder;
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_candidates_csv, load_candidates_reader};
pub use lookup::WaypointLookup;
pub use profile::{BuiltinProfiles, CategoryProfile, ProfileProvider, SpeedRange, WaypointSpec};
