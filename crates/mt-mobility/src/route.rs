//! One step of a movement's route.

use mt_core::{GeoPoint, NodeId};
use mt_spatial::{NetworkProvider, SpatialError};

/// A route point: a road-network node, or (in straight-line fallback) a
/// literal coordinate.
///
/// In the persisted form a node is a bare integer and a coordinate is a
/// `[lat, lon]` pair, so a route is a plain JSON array of either.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RouteNode {
    Node(NodeId),
    Coord(GeoPoint),
}

impl RouteNode {
    /// Coordinate of this route point.
    pub fn position<P: NetworkProvider + ?Sized>(&self, provider: &P) -> Result<GeoPoint, SpatialError> {
        match *self {
            RouteNode::Node(n) => provider.node_position(n).ok_or(SpatialError::NodeNotFound(n)),
            RouteNode::Coord(p) => Ok(p),
        }
    }

    pub fn node_id(&self) -> Option<NodeId> {
        match *self {
            RouteNode::Node(n) => Some(n),
            RouteNode::Coord(_) => None,
        }
    }
}

impl From<NodeId> for RouteNode {
    fn from(n: NodeId) -> Self {
        RouteNode::Node(n)
    }
}

impl From<GeoPoint> for RouteNode {
    fn from(p: GeoPoint) -> Self {
        RouteNode::Coord(p)
    }
}

impl std::fmt::Display for RouteNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteNode::Node(n) => write!(f, "{}", n.0),
            RouteNode::Coord(p) => write!(f, "{p}"),
        }
    }
}
