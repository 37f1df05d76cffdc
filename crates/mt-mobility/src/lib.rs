//! `mt-mobility` — turning a schedule into routes, and routes into positions.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`route`]       | `RouteNode` — a network node or a literal coordinate           |
//! | [`trajectory`]  | `TrajectoryEngine`, `Trajectory`, `TrajectoryConfig`           |
//! | [`detail`]      | `DetailEntry`, `DetailSchedule`, `build_detail_schedule`        |
//! | [`interpolate`] | `position_at`, `interpolate_route`, `PositionLog`, `parse_query_time` |
//! | [`error`]       | `MobilityError`, `MobilityResult<T>`                           |
//!
//! # Movement model
//!
//! Each schedule entry becomes one movement along a route at constant
//! speed:
//!
//! ```text
//! travel_time_s = distance_m / speed
//! arrival_time  = start_time + floor(travel_time_s)      (wraps at midnight)
//! fraction(t)   = (t - start_time) / travel_time_s
//! ```
//!
//! Routing never fails outward.  If the endpoints are disconnected the
//! engine retries from every pair of nodes within a small radius, and if
//! that fails too it returns a two-point straight line between the original
//! coordinates.

pub mod detail;
pub mod error;
pub mod interpolate;
pub mod route;
pub mod trajectory;


pub use detail::{build_detail_schedule, DetailEntry, DetailSchedule};
pub use error::{MobilityError, MobilityResult};
pub use interpolate::{interpolate_route, parse_query_time, position_at, PositionLog};
pub use route::RouteNode;
pub use trajectory::{Trajectory, TrajectoryConfig, TrajectoryEngine};
