//! Unit tests for mt-spatial.
//!
//! All tests use a hand-crafted network so they run without any OSM file.

#[cfg(test)]
mod helpers {
    use mt_core::{GeoPoint, NodeId};
    use crate::{RoadNetwork, RoadNetworkBuilder};

    /// Small grid network.
    ///
    /// Nodes (lat, lon):
    ///   0:(0,0)  1:(0,1)  2:(0,2)
    ///   3:(1,0)           4:(1,2)
    ///
    /// Undirected edges: 0-1, 1-2, 0-3, 2-4, 3-4
    ///
    /// Shortest path 0→4 by length: 0→1→2→4 (300 m) beats 0→3→4 (600 m).
    pub fn grid_network() -> (RoadNetwork, [NodeId; 5]) {
        let mut b = RoadNetworkBuilder::new();

        let n0 = b.add_node(GeoPoint::new(0.0, 0.0));
        let n1 = b.add_node(GeoPoint::new(0.0, 1.0));
        let n2 = b.add_node(GeoPoint::new(0.0, 2.0));
        let n3 = b.add_node(GeoPoint::new(1.0, 0.0));
        let n4 = b.add_node(GeoPoint::new(1.0, 2.0));

        b.add_road(n0, n1, 100.0);
        b.add_road(n1, n2, 100.0);
        b.add_road(n2, n4, 100.0);
        b.add_road(n0, n3, 500.0); // long road
        b.add_road(n3, n4, 100.0);

        (b.build(), [n0, n1, n2, n3, n4])
    }

    /// Dense cluster of nodes a few metres apart around (10.0, 106.0).
    pub fn cluster_network() -> (RoadNetwork, Vec<NodeId>) {
        let mut b = RoadNetworkBuilder::new();
        let base = GeoPoint::new(10.0, 106.0);
        // ~11 m per 0.0001° of latitude.
        let ids = (0..5)
            .map(|i| b.add_node(GeoPoint::new(base.lat + 0.0001 * i as f64, base.lon)))
            .collect();
        (b.build(), ids)
    }
}

// ── Builder & network structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use mt_core::{GeoPoint, NodeId};
    use crate::{BoundingBox, RoadNetworkBuilder};

    #[test]
    fn empty_build() {
        let net = RoadNetworkBuilder::new().build();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
        assert!(net.extent().is_none());
    }

    #[test]
    fn single_road() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(10.0, 106.0));
        let c = b.add_node(GeoPoint::new(10.1, 106.0));
        b.add_road(a, c, 1_000.0);
        let net = b.build();
        assert_eq!(net.node_count(), 2);
        assert_eq!(net.edge_count(), 2);
    }

    #[test]
    fn csr_out_edges() {
        let (net, ids) = super::helpers::grid_network();
        for n in ids {
            assert_eq!(net.out_edges(n).count(), 2);
            for e in net.out_edges(n) {
                assert_eq!(net.edge_from[e.index()], n);
            }
        }
    }

    #[test]
    fn edge_between_picks_shortest_parallel() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        b.add_directed_edge(a, c, 300.0);
        b.add_directed_edge(a, c, 120.0);
        let net = b.build();
        let e = net.edge_between(a, c).unwrap();
        assert_eq!(net.edge_length_m[e.index()], 120.0);
        assert!(net.edge_between(c, a).is_none());
        assert!(net.edge_between(NodeId(99), a).is_none());
    }

    #[test]
    fn dangling_edges_dropped() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        b.add_directed_edge(a, NodeId(7), 10.0);
        let net = b.build();
        assert_eq!(net.edge_count(), 0);
    }

    #[test]
    fn extent_covers_all_nodes() {
        let (net, _) = super::helpers::grid_network();
        assert_eq!(net.extent(), Some(BoundingBox::new(0.0, 0.0, 2.0, 1.0)));
    }

    #[test]
    fn straight_road_uses_haversine_length() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(10.0, 106.0));
        let c = b.add_node(GeoPoint::new(10.001, 106.0));
        b.add_straight_road(a, c);
        let net = b.build();
        let e = net.edge_between(a, c).unwrap();
        let expected = GeoPoint::new(10.0, 106.0).distance_m(GeoPoint::new(10.001, 106.0));
        assert_eq!(net.edge_length_m[e.index()], expected);
    }
}

// ── Spatial queries ───────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use mt_core::GeoPoint;
    use crate::RoadNetworkBuilder;

    #[test]
    fn snap_nearest() {
        let (net, [n0, n1, ..]) = super::helpers::grid_network();
        assert_eq!(net.snap_to_node(GeoPoint::new(0.0, 0.0)), Some(n0));
        assert_eq!(net.snap_to_node(GeoPoint::new(0.0, 0.4)), Some(n0));
        assert_eq!(net.snap_to_node(GeoPoint::new(0.0, 0.6)), Some(n1));
    }

    #[test]
    fn empty_network_returns_none() {
        let net = RoadNetworkBuilder::new().build();
        assert!(net.snap_to_node(GeoPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn nodes_within_radius_sorted_and_inclusive() {
        let (net, ids) = super::helpers::cluster_network();
        // Node 2 sits in the middle; nodes 1..=3 are within ~12 m.
        let center = net.position(ids[2]).unwrap();
        let near = net.nodes_within(center, 12.0);
        assert_eq!(near, vec![ids[1], ids[2], ids[3]]);
        let all = net.nodes_within(center, 50.0);
        assert_eq!(all, ids);
    }

    #[test]
    fn nodes_within_negative_radius_is_empty() {
        let (net, ids) = super::helpers::cluster_network();
        let center = net.position(ids[0]).unwrap();
        assert!(net.nodes_within(center, -1.0).is_empty());
        assert_eq!(net.nodes_within(center, 0.0), vec![ids[0]]);
    }
}

// ── Dijkstra routing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use mt_core::{GeoPoint, NodeId};
    use crate::{DijkstraRouter, RoadNetworkBuilder, Router, SpatialError};

    #[test]
    fn trivial_same_node() {
        let (net, [n0, ..]) = super::helpers::grid_network();
        assert_eq!(DijkstraRouter.route(&net, n0, n0).unwrap(), vec![n0]);
    }

    #[test]
    fn shortest_path_by_length() {
        let (net, [n0, n1, n2, _, n4]) = super::helpers::grid_network();
        let route = DijkstraRouter.route(&net, n0, n4).unwrap();
        assert_eq!(route, vec![n0, n1, n2, n4]);
    }

    #[test]
    fn no_route_disconnected() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(1.0, 0.0));
        let net = b.build();
        let result = DijkstraRouter.route(&net, a, c);
        assert!(matches!(result, Err(SpatialError::NoRoute { .. })));
    }

    #[test]
    fn unknown_node_is_reported() {
        let (net, [n0, ..]) = super::helpers::grid_network();
        let result = DijkstraRouter.route(&net, n0, NodeId(42));
        assert!(matches!(result, Err(SpatialError::NodeNotFound(NodeId(42)))));
    }

    #[test]
    fn directed_one_way_blocks_return() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 1.0));
        b.add_directed_edge(a, c, 100.0);
        let net = b.build();
        assert!(DijkstraRouter.route(&net, a, c).is_ok());
        assert!(DijkstraRouter.route(&net, c, a).is_err());
    }
}

// ── Features ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod features {
    use mt_core::{FeatureCategory, GeoPoint};
    use crate::{Feature, FeatureSet};

    fn square() -> Feature {
        Feature::polygon(&[
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 2.0),
            GeoPoint::new(2.0, 2.0),
            GeoPoint::new(2.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn polygon_centroid_and_contains() {
        let f = square();
        assert!(f.is_areal());
        let c = f.centroid();
        assert!((c.lat - 1.0).abs() < 1e-9 && (c.lon - 1.0).abs() < 1e-9);
        assert!(f.contains(GeoPoint::new(1.0, 1.5)));
        assert!(!f.contains(GeoPoint::new(3.0, 1.0)));
        let b = f.bounds().unwrap();
        assert_eq!((b.min_lon, b.min_lat, b.max_lon, b.max_lat), (0.0, 0.0, 2.0, 2.0));
    }

    #[test]
    fn degenerate_polygon_rejected() {
        assert!(Feature::polygon(&[GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]).is_none());
    }

    #[test]
    fn point_feature_is_not_areal() {
        let f = Feature::point(GeoPoint::new(5.0, 6.0));
        assert!(!f.is_areal());
        assert!(!f.contains(GeoPoint::new(5.0, 6.0)));
        assert_eq!(f.centroid(), GeoPoint::new(5.0, 6.0));
    }

    #[test]
    fn feature_set_grouping() {
        let mut set = FeatureSet::new();
        assert!(set.is_empty());
        set.insert(FeatureCategory::Parks, square());
        set.insert(FeatureCategory::Parks, Feature::point(GeoPoint::new(1.0, 1.0)));
        set.insert(FeatureCategory::Gyms, Feature::point(GeoPoint::new(1.0, 1.0)));
        assert_eq!(set.count(FeatureCategory::Parks), 2);
        assert_eq!(set.count(FeatureCategory::Schools), 0);
        assert!(set.get(FeatureCategory::Schools).is_empty());
        assert_eq!(set.len(), 3);
    }
}

// ── Provider ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod provider {
    use mt_core::{FeatureCategory, GeoPoint, NodeId};
    use crate::{BoundingBox, FeatureSet, NetworkProvider, RoadMap, SpatialError};

    fn grid_map() -> (RoadMap, [NodeId; 5]) {
        let (net, ids) = super::helpers::grid_network();
        (RoadMap::new(net, FeatureSet::new()), ids)
    }

    #[test]
    fn shortest_path_and_distance() {
        let (map, [n0, n1, n2, _, n4]) = grid_map();
        let path = map.shortest_path(n0, n4).unwrap();
        assert_eq!(path, vec![n0, n1, n2, n4]);
        assert_eq!(map.route_distance(&path).unwrap(), 300.0);
    }

    #[test]
    fn route_distance_repeated_node_is_zero() {
        let (map, [n0, ..]) = grid_map();
        assert_eq!(map.route_distance(&[n0, n0]).unwrap(), 0.0);
    }

    #[test]
    fn edge_length_missing_edge() {
        let (map, [n0, _, n2, ..]) = grid_map();
        assert!(matches!(map.edge_length(n0, n2), Err(SpatialError::NoEdge { .. })));
    }

    #[test]
    fn bbox_default_and_override() {
        let (map, _) = grid_map();
        assert_eq!(map.bounding_box(), Some(BoundingBox::new(0.0, 0.0, 2.0, 1.0)));
        let wider = BoundingBox::new(-1.0, -1.0, 3.0, 2.0);
        let map = map.with_bbox(wider);
        assert_eq!(map.bounding_box(), Some(wider));
    }

    #[test]
    fn features_empty_category() {
        let (map, _) = grid_map();
        assert!(map.features(FeatureCategory::Residential).is_empty());
    }

    #[test]
    fn nearby_nodes_includes_self() {
        let (net, ids) = super::helpers::cluster_network();
        let map = RoadMap::new(net, FeatureSet::new());
        let near = map.nearby_nodes(ids[0], 50.0);
        assert_eq!(near.first(), Some(&ids[0]));
        assert!(map.nearby_nodes(NodeId(999), 50.0).is_empty());
    }

    #[test]
    fn straight_line_distance_is_haversine() {
        let (map, _) = grid_map();
        let a = GeoPoint::new(10.0, 106.0);
        let b = GeoPoint::new(10.01, 106.0);
        assert_eq!(map.straight_line_distance(a, b), a.distance_m(b));
    }
}

// ── OSM loading ───────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "osm"))]
mod osm {
    use std::path::Path;
    use crate::{osm::load_from_pbf, SpatialError};

    #[test]
    fn missing_file_is_an_osm_error() {
        let result = load_from_pbf(Path::new("/nonexistent/city.osm.pbf"));
        assert!(matches!(result, Err(SpatialError::Osm(_))));
    }
}

// ── Geocoding ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geocode {
    use mt_core::GeoPoint;
    use crate::{resolve_center, Geocoder, SpatialError, StaticGeocoder, DEFAULT_CENTER};

    #[test]
    fn static_lookup_is_case_insensitive() {
        let g = StaticGeocoder::new().with_place("Hanoi", GeoPoint::new(21.0278, 105.8342));
        assert_eq!(g.geocode("  hanoi ").unwrap(), GeoPoint::new(21.0278, 105.8342));
        assert!(matches!(g.geocode("Atlantis"), Err(SpatialError::GeocodeNotFound(_))));
    }

    #[test]
    fn resolve_center_falls_back() {
        let g = StaticGeocoder::new();
        assert_eq!(resolve_center(&g, "Nowhere"), DEFAULT_CENTER);
    }
}
