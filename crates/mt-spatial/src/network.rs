//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_length_m`) are sorted by
//! source node and indexed by `EdgeId`, so iterating a node's outgoing edges
//! is a contiguous scan.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `[lat, lon]` to `NodeId`.  It answers both
//! nearest-node snapping of waypoint coordinates and the radius queries the
//! trajectory engine uses when a direct route does not exist.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use mt_core::geo::EARTH_RADIUS_M;
use mt_core::{EdgeId, GeoPoint, NodeId};

use crate::BoundingBox;

/// Metres per degree of latitude on the mean-radius sphere.
const METRES_PER_DEG: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.  Sufficient for
    /// nearest-node queries within a city.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Directed road graph in CSR format plus a spatial index for node snapping.
///
/// Do not construct directly; use [`RoadNetworkBuilder`].
pub struct RoadNetwork {
    /// Geographic position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source node of each edge.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Length of each edge in metres.  This is the routing weight.
    pub edge_length_m: Vec<f64>,

    spatial_idx: RTree<NodeEntry>,
    extent: Option<BoundingBox>,
}

impl RoadNetwork {
    /// Construct an empty network with no nodes or edges.
    pub fn empty() -> Self {
        RoadNetworkBuilder::new().build()
    }

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    #[inline]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_pos.len()
    }

    /// Position of `node`, or `None` if it is out of range.
    #[inline]
    pub fn position(&self, node: NodeId) -> Option<GeoPoint> {
        self.node_pos.get(node.index()).copied()
    }

    /// Smallest box containing every node; `None` for an empty network.
    pub fn extent(&self) -> Option<BoundingBox> {
        self.extent
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// The shortest directed edge `from → to`, if any.  Parallel edges can
    /// exist when two ways share consecutive nodes.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        if !self.contains_node(from) {
            return None;
        }
        self.out_edges(from)
            .filter(|e| self.edge_to[e.index()] == to)
            .min_by(|a, b| self.edge_length_m[a.index()].total_cmp(&self.edge_length_m[b.index()]))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` of the nearest road node to `pos`.
    ///
    /// Returns `None` only if the network has no nodes.
    pub fn snap_to_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }

    /// Every node whose great-circle distance to `center` is at most
    /// `radius_m`, in ascending `NodeId` order.
    ///
    /// The R-tree is queried with a degree envelope slightly larger than the
    /// radius, then candidates are filtered by haversine distance.
    pub fn nodes_within(&self, center: GeoPoint, radius_m: f64) -> Vec<NodeId> {
        if radius_m.is_nan() || radius_m < 0.0 {
            return Vec::new();
        }
        let dlat = radius_m / METRES_PER_DEG * 1.01;
        let dlon = dlat / center.lat.to_radians().cos().abs().max(1e-6);
        let envelope = AABB::from_corners(
            [center.lat - dlat, center.lon - dlon],
            [center.lat + dlat, center.lon + dlon],
        );

        let mut found: Vec<NodeId> = self
            .spatial_idx
            .locate_in_envelope(&envelope)
            .filter(|e| center.distance_m(GeoPoint::new(e.point[0], e.point[1])) <= radius_m)
            .map(|e| e.id)
            .collect();
        found.sort_unstable();
        found
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use mt_core::GeoPoint;
/// use mt_spatial::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_node(GeoPoint::new(10.82, 106.62));
/// let c = b.add_node(GeoPoint::new(10.83, 106.63));
/// b.add_road(a, c, 1_200.0);
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // bidirectional
/// ```
pub struct RoadNetworkBuilder {
    nodes:     Vec<GeoPoint>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from:     NodeId,
    to:       NodeId,
    length_m: f64,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a road node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** edge of `length_m` metres from `from` to `to`.
    pub fn add_directed_edge(&mut self, from: NodeId, to: NodeId, length_m: f64) {
        self.raw_edges.push(RawEdge { from, to, length_m });
    }

    /// Add edges in **both directions** for an undirected road segment.
    pub fn add_road(&mut self, a: NodeId, b: NodeId, length_m: f64) {
        self.add_directed_edge(a, b, length_m);
        self.add_directed_edge(b, a, length_m);
    }

    /// Add an undirected road whose length is the great-circle distance
    /// between its endpoints.
    pub fn add_straight_road(&mut self, a: NodeId, b: NodeId) {
        let len = self.node_pos(a).distance_m(self.node_pos(b));
        self.add_road(a, b, len);
    }

    /// Position of a node added earlier.
    pub fn node_pos(&self, id: NodeId) -> GeoPoint {
        self.nodes[id.index()]
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Edges whose endpoints were never added are dropped.
    pub fn build(self) -> RoadNetwork {
        let node_count = self.nodes.len();

        let mut raw = self.raw_edges;
        raw.retain(|e| e.from.index() < node_count && e.to.index() < node_count);
        raw.sort_by_key(|e| e.from.0);
        let edge_count = raw.len();

        let edge_from:     Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:       Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length_m: Vec<f64>    = raw.iter().map(|e| e.length_m).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.lat, pos.lon],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);
        let extent = BoundingBox::from_points(self.nodes.iter().copied());

        RoadNetwork {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_length_m,
            spatial_idx,
            extent,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
