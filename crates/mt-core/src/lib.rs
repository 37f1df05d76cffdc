//! `mt-core` — foundational types for the `rust_mobtrace` trace generator.
//!
//! This crate is a dependency of every other `mt-*` crate.  It intentionally
//! has no `mt-*` dependencies and few external ones (`chrono`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `EdgeId`, `PersonId`                        |
//! | [`geo`]         | `GeoPoint`, haversine distance, linear blend          |
//! | [`time`]        | `TimeOfDay`, `Speed`                                  |
//! | [`category`]    | `PersonCategory`, `FeatureCategory`                   |
//! | [`rng`]         | `SimRng` (seeded, optionally per person)              |
//! | [`error`]       | `MtError`, `MtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Times serialize as `"HH:MM:SS"` strings.                   |

pub mod category;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use category::{FeatureCategory, PersonCategory};
pub use error::{MtError, MtResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId, PersonId};
pub use rng::SimRng;
pub use time::{Speed, TimeOfDay};
