//! Trajectory engine: coordinates in, route + distance + travel time out.
//!
//! # Strategy
//!
//! 1. Snap both coordinates to their nearest network node.
//! 2. Shortest path by edge length.
//! 3. On no path: gather nodes within `nearby_radius_m` of each endpoint
//!    node and try every departure × arrival pair in ascending `NodeId`
//!    order.  The first pair that routes wins; it is not necessarily the
//!    shortest of the alternatives.
//! 4. Otherwise (or on any provider error along the way) fall back to a
//!    straight line between the two input coordinates.
//!
//! [`TrajectoryEngine::build`] therefore always returns a [`Trajectory`].

use log::{debug, warn};

use mt_core::{GeoPoint, NodeId, Speed};
use mt_spatial::{NetworkProvider, SpatialError};

use crate::{MobilityError, MobilityResult, RouteNode};

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrajectoryConfig {
    /// Search radius around each endpoint node when the direct route fails.
    pub nearby_radius_m: f64,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self { nearby_radius_m: 50.0 }
    }
}

// ── Trajectory ────────────────────────────────────────────────────────────────

/// A computed movement: at least two route points, a non-negative distance,
/// and `travel_time_s == distance_m / speed`.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub route_nodes:   Vec<RouteNode>,
    pub distance_m:    f64,
    pub travel_time_s: f64,
}

impl Trajectory {
    fn from_path(path: Vec<NodeId>, distance_m: f64, speed: Speed) -> Self {
        let mut route_nodes: Vec<RouteNode> = path.into_iter().map(RouteNode::Node).collect();
        // A trivial path still needs both endpoints.
        if route_nodes.len() == 1 {
            route_nodes.push(route_nodes[0]);
        }
        Self { route_nodes, distance_m, travel_time_s: speed.travel_secs(distance_m) }
    }

    fn straight_line(depart: GeoPoint, arrive: GeoPoint, speed: Speed) -> Self {
        let distance_m = depart.distance_m(arrive);
        Self {
            route_nodes: vec![RouteNode::Coord(depart), RouteNode::Coord(arrive)],
            distance_m,
            travel_time_s: speed.travel_secs(distance_m),
        }
    }

    /// `true` if this is a straight-line fallback rather than a network route.
    pub fn is_straight_line(&self) -> bool {
        self.route_nodes.iter().all(|n| matches!(n, RouteNode::Coord(_)))
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Computes [`Trajectory`]s against a [`NetworkProvider`].
pub struct TrajectoryEngine<'p, P: NetworkProvider + ?Sized> {
    provider: &'p P,
    config:   TrajectoryConfig,
}

impl<'p, P: NetworkProvider + ?Sized> TrajectoryEngine<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self { provider, config: TrajectoryConfig::default() }
    }

    pub fn with_config(provider: &'p P, config: TrajectoryConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &'p P {
        self.provider
    }

    /// Route from `depart` to `arrive` at `speed`.  Never fails.
    pub fn build(&self, depart: GeoPoint, arrive: GeoPoint, speed: Speed) -> Trajectory {
        match self.route_on_network(depart, arrive) {
            Ok(Some((path, distance_m))) => Trajectory::from_path(path, distance_m, speed),
            Ok(None) => {
                warn!("no path found from {depart} to {arrive}; using a straight line");
                Trajectory::straight_line(depart, arrive, speed)
            }
            Err(e) => {
                warn!("routing {depart} → {arrive} failed ({e}); using a straight line");
                Trajectory::straight_line(depart, arrive, speed)
            }
        }
    }

    /// `Ok(None)` means the network was consulted and has no path.
    fn route_on_network(
        &self,
        depart: GeoPoint,
        arrive: GeoPoint,
    ) -> MobilityResult<Option<(Vec<NodeId>, f64)>> {
        let p = self.provider;
        let from = p.nearest_node(depart).ok_or(MobilityError::EmptyNetwork)?;
        let to = p.nearest_node(arrive).ok_or(MobilityError::EmptyNetwork)?;

        if let Some(path) = self.try_path(from, to)? {
            return self.measured(path).map(Some);
        }

        let radius = self.config.nearby_radius_m;
        debug!("no direct path {from} → {to}; trying nodes within {radius} m");
        let near_from = p.nearby_nodes(from, radius);
        let near_to = p.nearby_nodes(to, radius);
        for &a in &near_from {
            for &b in &near_to {
                if let Some(path) = self.try_path(a, b)? {
                    debug!("found alternative path {a} → {b}");
                    return self.measured(path).map(Some);
                }
            }
        }
        Ok(None)
    }

    fn try_path(&self, from: NodeId, to: NodeId) -> MobilityResult<Option<Vec<NodeId>>> {
        match self.provider.shortest_path(from, to) {
            Ok(path) => Ok(Some(path)),
            Err(SpatialError::NoRoute { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn measured(&self, path: Vec<NodeId>) -> MobilityResult<(Vec<NodeId>, f64)> {
        let distance = self.provider.route_distance(&path)?;
        Ok((path, distance))
    }
}
