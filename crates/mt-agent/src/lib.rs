//! `mt-agent` — one simulated person, from waypoints to detail schedule.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`waypoints`] | `Waypoints`, `AutoAssigner`, `ManualAssigner`, `AssignConfig` |
//! | [`person`]    | `Person`, `PersonBuilder`, `AssignMode`                       |
//! | [`record`]    | `PersonRecord` — the plain JSON form                          |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                               |
//!
//! # Construction pipeline
//!
//! ```text
//! waypoints  (assign, or take as supplied)
//!   → schedule   (template, validated candidates, or take as supplied)
//!   → detail     (route every movement, or take as supplied)
//! ```
//!
//! Anything supplied is used as-is, so rebuilding a person from its plain
//! form consumes no randomness and reproduces it exactly.

pub mod error;
pub mod person;
pub mod record;
pub mod waypoints;


pub use error::{AgentError, AgentResult};
pub use person::{AssignMode, Person, PersonBuilder};
pub use record::PersonRecord;
pub use waypoints::{AssignConfig, AutoAssigner, ManualAssigner, Waypoints};
