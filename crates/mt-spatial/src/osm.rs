//! OSM PBF loader, enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use mt_spatial::osm::load_from_pbf;
//!
//! let map = load_from_pbf(Path::new("hcmc.osm.pbf"))?;
//! ```
//!
//! # What is loaded
//!
//! - Drivable `highway=*` ways become road edges (see [`is_drivable`]),
//!   with edge length equal to the great-circle distance between
//!   consecutive way nodes.  One-way roads add a single directed edge.
//! - Closed ways whose tags match a [`FeatureCategory`] (see
//!   [`categories_for`]) become polygon features; tagged nodes become
//!   point features.
//!
//! Relations (multipolygons) are skipped.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::info;
use osmpbf::{Element, ElementReader};

use mt_core::{FeatureCategory, GeoPoint, NodeId};

use crate::network::RoadNetworkBuilder;
use crate::{Feature, FeatureSet, RoadMap, SpatialError};

// ── Public entry point ────────────────────────────────────────────────────────

/// Load a road network and its category features from an OSM PBF file.
///
/// # Errors
///
/// Returns [`SpatialError::Osm`] on parse errors,
/// [`SpatialError::Io`] on file errors.
pub fn load_from_pbf(path: &Path) -> Result<RoadMap, SpatialError> {
    // ── Phase 1: collect nodes, road ways, and feature ways in one pass ──
    let reader = ElementReader::from_path(path)
        .map_err(|e| SpatialError::Osm(e.to_string()))?;

    let mut all_nodes: HashMap<i64, GeoPoint> = HashMap::new();
    let mut road_ways: Vec<OsmWay> = Vec::new();
    let mut area_ways: Vec<(Vec<FeatureCategory>, Vec<i64>)> = Vec::new();
    let mut features = FeatureSet::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                let pos = GeoPoint::new(n.lat(), n.lon());
                all_nodes.insert(n.id(), pos);
                let tags: Vec<(&str, &str)> = n.tags().collect();
                for cat in categories_for(&tags) {
                    features.insert(cat, Feature::point(pos));
                }
            }
            Element::DenseNode(n) => {
                let pos = GeoPoint::new(n.lat(), n.lon());
                all_nodes.insert(n.id(), pos);
                let tags: Vec<(&str, &str)> = n.tags().collect();
                for cat in categories_for(&tags) {
                    features.insert(cat, Feature::point(pos));
                }
            }
            Element::Way(w) => {
                // Collect tags eagerly so &str lifetimes don't escape the closure.
                let tags: Vec<(&str, &str)> = w.tags().collect();
                let refs: Vec<i64> = w.refs().collect();
                let highway = tags
                    .iter()
                    .find(|(k, _)| *k == "highway")
                    .map(|(_, v)| *v);

                if highway.is_some_and(is_drivable) {
                    let oneway = is_oneway(highway.unwrap_or(""), &tags);
                    road_ways.push(OsmWay { refs: refs.clone(), oneway });
                }

                let cats = categories_for(&tags);
                if !cats.is_empty() && refs.len() >= 4 && refs.first() == refs.last() {
                    area_ways.push((cats, refs));
                }
            }
            _ => {}
        })
        .map_err(|e| SpatialError::Osm(e.to_string()))?;

    // ── Phase 2: feature polygons ─────────────────────────────────────────
    for (cats, refs) in &area_ways {
        let ring: Option<Vec<GeoPoint>> = refs.iter().map(|id| all_nodes.get(id).copied()).collect();
        if let Some(feature) = ring.as_deref().and_then(Feature::polygon) {
            for &cat in cats {
                features.insert(cat, feature.clone());
            }
        }
    }

    // ── Phase 3: road network ─────────────────────────────────────────────
    let road_node_ids: HashSet<i64> = road_ways
        .iter()
        .flat_map(|w| w.refs.iter().copied())
        .collect();

    let mut builder = RoadNetworkBuilder::with_capacity(
        road_node_ids.len(),
        road_node_ids.len() * 2,
    );

    let mut osm_to_mt: HashMap<i64, NodeId> = HashMap::with_capacity(road_node_ids.len());

    // Sorted so NodeIds are stable across runs on the same file.
    let mut sorted_ids: Vec<i64> = road_node_ids.into_iter().collect();
    sorted_ids.sort_unstable();
    for osm_id in sorted_ids {
        if let Some(&pos) = all_nodes.get(&osm_id) {
            osm_to_mt.insert(osm_id, builder.add_node(pos));
        }
    }

    drop(all_nodes);

    for way in &road_ways {
        for window in way.refs.windows(2) {
            if let (Some(&from), Some(&to)) = (osm_to_mt.get(&window[0]), osm_to_mt.get(&window[1])) {
                let len_m = builder.node_pos(from).distance_m(builder.node_pos(to));
                builder.add_directed_edge(from, to, len_m);
                if !way.oneway {
                    builder.add_directed_edge(to, from, len_m);
                }
            }
        }
    }

    let network = builder.build();
    info!(
        "loaded {} nodes, {} edges, {} features from {}",
        network.node_count(),
        network.edge_count(),
        features.len(),
        path.display()
    );
    Ok(RoadMap::new(network, features))
}

// ── Internal types ────────────────────────────────────────────────────────────

struct OsmWay {
    refs:   Vec<i64>,
    oneway: bool,
}

// ── Tag helpers ───────────────────────────────────────────────────────────────

/// `true` if this `highway` value is part of the drive network.
fn is_drivable(highway: &str) -> bool {
    !matches!(
        highway,
        "footway" | "path" | "cycleway" | "pedestrian" | "steps" | "track"
            | "bridleway" | "corridor" | "proposed" | "construction"
    )
}

/// Determine whether a way should be treated as one-way.
///
/// Motorways and motorway links are implicitly one-way in OSM convention.
fn is_oneway(highway: &str, tags: &[(&str, &str)]) -> bool {
    let explicit = tags.iter().any(|(k, v)| {
        *k == "oneway" && matches!(*v, "yes" | "1" | "true")
    });
    let implicit = matches!(highway, "motorway" | "motorway_link");
    explicit || implicit
}

/// Feature categories matched by a tag set.
///
/// | Category     | Tags                                        |
/// |--------------|---------------------------------------------|
/// | residential  | `landuse=residential`                       |
/// | parks        | `leisure=park`                              |
/// | schools      | `amenity=school`                            |
/// | workplaces   | `office=*`, `landuse=industrial`            |
/// | markets      | `shop=supermarket`                          |
/// | healthcare   | `amenity=hospital\|clinic\|pharmacy`        |
/// | play_areas   | `leisure=playground`                        |
/// | gyms         | `leisure=fitness_centre`                    |
fn categories_for(tags: &[(&str, &str)]) -> Vec<FeatureCategory> {
    let mut cats = Vec::new();
    for &(k, v) in tags {
        let cat = match (k, v) {
            ("landuse", "residential") => Some(FeatureCategory::Residential),
            ("leisure", "park") => Some(FeatureCategory::Parks),
            ("amenity", "school") => Some(FeatureCategory::Schools),
            ("office", _) | ("landuse", "industrial") => Some(FeatureCategory::Workplaces),
            ("shop", "supermarket") => Some(FeatureCategory::Markets),
            ("amenity", "hospital" | "clinic" | "pharmacy") => Some(FeatureCategory::Healthcare),
            ("leisure", "playground") => Some(FeatureCategory::PlayAreas),
            ("leisure", "fitness_centre") => Some(FeatureCategory::Gyms),
            _ => None,
        };
        if let Some(c) = cat {
            if !cats.contains(&c) {
                cats.push(c);
            }
        }
    }
    cats
}
