//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Providers call routing via the [`Router`] trait, so applications can swap
//! in custom implementations (A*, contraction hierarchies) without touching
//! the trajectory engine.
//!
//! # Cost units
//!
//! Dijkstra runs on integer **millimetres** (`u64`) so heap ordering is total
//! and deterministic.  Callers that need the length re-sum the exact `f64`
//! edge lengths along the returned nodes.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use mt_core::{EdgeId, NodeId};

use crate::network::RoadNetwork;
use crate::{SpatialError, SpatialResult};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.  Weight is always edge length.
///
/// Implementations must be `Send + Sync` so a provider can be shared
/// read-only between sessions.
pub trait Router: Send + Sync {
    /// Nodes visited from `from` to `to`, both included.  A route from a
    /// node to itself is the single-element `[node]`.
    ///
    /// Returns [`SpatialError::NoRoute`] if `to` is unreachable and
    /// [`SpatialError::NodeNotFound`] for out-of-range IDs.
    fn route(&self, network: &RoadNetwork, from: NodeId, to: NodeId) -> SpatialResult<Vec<NodeId>>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the CSR road graph, weighted by
/// `edge_length_m`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, network: &RoadNetwork, from: NodeId, to: NodeId) -> SpatialResult<Vec<NodeId>> {
        dijkstra(network, from, to)
    }
}

#[inline]
fn edge_cost_mm(network: &RoadNetwork, edge: EdgeId) -> u64 {
    (network.edge_length_m[edge.index()].max(0.0) * 1_000.0).round() as u64
}

fn dijkstra(network: &RoadNetwork, from: NodeId, to: NodeId) -> SpatialResult<Vec<NodeId>> {
    for n in [from, to] {
        if !network.contains_node(n) {
            return Err(SpatialError::NodeNotFound(n));
        }
    }
    if from == to {
        return Ok(vec![from]);
    }

    let n = network.node_count();
    let mut dist      = vec![u64::MAX; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0;

    // Secondary key NodeId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(network, &prev_edge, from, to));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in network.out_edges(node) {
            let neighbor = network.edge_to[edge.index()];
            let new_cost = cost.saturating_add(edge_cost_mm(network, edge));

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Err(SpatialError::NoRoute { from, to })
}

fn reconstruct(network: &RoadNetwork, prev_edge: &[EdgeId], from: NodeId, to: NodeId) -> Vec<NodeId> {
    let mut edges = Vec::new();
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        edges.push(e);
        cur = network.edge_from[e.index()];
    }
    edges.reverse();

    let mut nodes = Vec::with_capacity(edges.len() + 1);
    nodes.push(from);
    nodes.extend(edges.iter().map(|e| network.edge_to[e.index()]));
    nodes
}
