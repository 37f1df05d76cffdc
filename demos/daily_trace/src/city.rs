//! Synthetic city used by the demo.
//!
//! A 5 × 5 street grid (≈ 550 m blocks) centred on the geocoded place, with
//! one or more features of every category so each person type can be
//! placed automatically.

use mt_core::{FeatureCategory, GeoPoint};
use mt_spatial::{Feature, FeatureSet, RoadMap, RoadNetworkBuilder};

const GRID: usize = 5;
const SPACING_DEG: f64 = 0.005;

pub fn build_city(center: GeoPoint) -> RoadMap {
    let origin = GeoPoint::new(
        center.lat - SPACING_DEG * (GRID - 1) as f64 / 2.0,
        center.lon - SPACING_DEG * (GRID - 1) as f64 / 2.0,
    );
    let at = |row: f64, col: f64| {
        GeoPoint::new(origin.lat + SPACING_DEG * row, origin.lon + SPACING_DEG * col)
    };

    let mut b = RoadNetworkBuilder::with_capacity(GRID * GRID, 4 * GRID * (GRID - 1));
    let mut ids = Vec::with_capacity(GRID * GRID);
    for row in 0..GRID {
        for col in 0..GRID {
            ids.push(b.add_node(at(row as f64, col as f64)));
        }
    }
    for row in 0..GRID {
        for col in 0..GRID {
            let i = row * GRID + col;
            if col + 1 < GRID {
                b.add_straight_road(ids[i], ids[i + 1]);
            }
            if row + 1 < GRID {
                b.add_straight_road(ids[i], ids[i + GRID]);
            }
        }
    }

    // Blocks are named by their south-west grid corner.
    let block = |row: f64, col: f64, frac: f64| {
        Feature::polygon(&[
            at(row + 0.1, col + 0.1),
            at(row + 0.1, col + frac),
            at(row + frac, col + frac),
            at(row + frac, col + 0.1),
        ])
    };

    let mut f = FeatureSet::new();
    let areas = [
        (FeatureCategory::Residential, 0.0, 0.0),
        (FeatureCategory::Residential, 3.0, 0.0),
        (FeatureCategory::Workplaces, 2.0, 3.0),
        (FeatureCategory::Schools, 1.0, 1.0),
        (FeatureCategory::Parks, 0.0, 2.0),
        (FeatureCategory::Parks, 3.0, 2.0),
    ];
    for (cat, row, col) in areas {
        if let Some(feature) = block(row, col, 0.9) {
            f.insert(cat, feature);
        }
    }
    let points = [
        (FeatureCategory::Markets, 1.0, 0.5),
        (FeatureCategory::Markets, 3.5, 3.5),
        (FeatureCategory::Gyms, 0.5, 1.5),
        (FeatureCategory::Gyms, 2.5, 3.5),
        (FeatureCategory::Healthcare, 1.5, 0.5),
        (FeatureCategory::PlayAreas, 0.5, 2.5),
    ];
    for (cat, row, col) in points {
        f.insert(cat, Feature::point(at(row, col)));
    }

    RoadMap::new(b.build(), f)
}
