//! The network data provider contract and its default implementation.
//!
//! Waypoint assignment and trajectory building talk to the map only through
//! [`NetworkProvider`].  The provider is read-only after construction, so a
//! single instance can back any number of sessions by shared reference.

use mt_core::{FeatureCategory, GeoPoint, NodeId};

use crate::{
    BoundingBox, DijkstraRouter, Feature, FeatureSet, RoadNetwork, Router, SpatialError,
    SpatialResult,
};

/// Read-only map capabilities consumed by the trajectory engine and the
/// waypoint assigner.
pub trait NetworkProvider: Send + Sync {
    /// Nearest network node to `pos`; `None` only for an empty network.
    fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId>;

    /// Length-weighted shortest path, endpoints included.
    fn shortest_path(&self, from: NodeId, to: NodeId) -> SpatialResult<Vec<NodeId>>;

    /// Length in metres of the edge `from → to`.
    fn edge_length(&self, from: NodeId, to: NodeId) -> SpatialResult<f64>;

    /// Coordinate of a network node.
    fn node_position(&self, node: NodeId) -> Option<GeoPoint>;

    /// All features tagged with `category`; empty if none were found.
    fn features(&self, category: FeatureCategory) -> &[Feature];

    /// Extent of the loaded region.
    fn bounding_box(&self) -> Option<BoundingBox>;

    /// Nodes within `radius_m` of `node` (the node itself included).
    fn nearby_nodes(&self, node: NodeId, radius_m: f64) -> Vec<NodeId>;

    /// Great-circle distance in metres.
    fn straight_line_distance(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        a.distance_m(b)
    }

    /// Sum of edge lengths along consecutive node pairs.  A repeated node
    /// contributes zero.
    fn route_distance(&self, route: &[NodeId]) -> SpatialResult<f64> {
        route
            .windows(2)
            .map(|w| if w[0] == w[1] { Ok(0.0) } else { self.edge_length(w[0], w[1]) })
            .sum()
    }
}

// ── RoadMap ───────────────────────────────────────────────────────────────────

/// The default provider: a [`RoadNetwork`], its [`FeatureSet`], and a
/// pluggable [`Router`].
pub struct RoadMap<R: Router = DijkstraRouter> {
    pub network:  RoadNetwork,
    pub features: FeatureSet,
    router:       R,
    bbox:         Option<BoundingBox>,
}

impl RoadMap<DijkstraRouter> {
    /// Provider over `network` and `features` using Dijkstra routing.  The
    /// bounding box defaults to the network extent.
    pub fn new(network: RoadNetwork, features: FeatureSet) -> Self {
        let bbox = network.extent();
        Self { network, features, router: DijkstraRouter, bbox }
    }
}

impl<R: Router> RoadMap<R> {
    /// Swap the routing algorithm.
    pub fn with_router<R2: Router>(self, router: R2) -> RoadMap<R2> {
        RoadMap { network: self.network, features: self.features, router, bbox: self.bbox }
    }

    /// Override the region extent (e.g. the requested download area, which
    /// is usually larger than the node extent).
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }
}

impl<R: Router> NetworkProvider for RoadMap<R> {
    fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.network.snap_to_node(pos)
    }

    fn shortest_path(&self, from: NodeId, to: NodeId) -> SpatialResult<Vec<NodeId>> {
        self.router.route(&self.network, from, to)
    }

    fn edge_length(&self, from: NodeId, to: NodeId) -> SpatialResult<f64> {
        self.network
            .edge_between(from, to)
            .map(|e| self.network.edge_length_m[e.index()])
            .ok_or(SpatialError::NoEdge { from, to })
    }

    fn node_position(&self, node: NodeId) -> Option<GeoPoint> {
        self.network.position(node)
    }

    fn features(&self, category: FeatureCategory) -> &[Feature] {
        self.features.get(category)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.bbox
    }

    fn nearby_nodes(&self, node: NodeId, radius_m: f64) -> Vec<NodeId> {
        match self.network.position(node) {
            Some(center) => self.network.nodes_within(center, radius_m),
            None => Vec::new(),
        }
    }
}
