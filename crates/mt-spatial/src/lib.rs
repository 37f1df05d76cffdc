//! `mt-spatial` — road network, feature index, routing, and the network
//! data provider contract consumed by the trajectory and waypoint layers.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`network`]  | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder`          |
//! | [`router`]   | `Router` trait, `DijkstraRouter` (length-weighted)        |
//! | [`bbox`]     | `BoundingBox`                                               |
//! | [`features`] | `Feature`, `FeatureSet` — tagged areas and points           |
//! | [`provider`] | `NetworkProvider` trait, `RoadMap` default provider         |
//! | [`geocode`]  | `Geocoder` trait, `StaticGeocoder`, `resolve_center`        |
//! | [`osm`]      | `load_from_pbf` (feature = `"osm"` only)                    |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `osm`   | Enables OSM PBF loading via the `osmpbf` crate.              |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod bbox;
pub mod error;
pub mod features;
pub mod geocode;
pub mod network;
pub mod provider;
pub mod router;

#[cfg(feature = "osm")]
pub mod osm;

#[cfg(test)]
mod tests;

pub use bbox::BoundingBox;
pub use error::{SpatialError, SpatialResult};
pub use features::{Feature, FeatureSet};
pub use geocode::{resolve_center, Geocoder, StaticGeocoder, DEFAULT_CENTER};
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use provider::{NetworkProvider, RoadMap};
pub use router::{DijkstraRouter, Router};
