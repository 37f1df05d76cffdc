//! Geographic features (tagged areas and points) grouped by category.
//!
//! Geometry is held as `geo::Geometry<f64>` with `x = lon`, `y = lat`.  The
//! centroid is computed once on construction since the waypoint assigner
//! compares centroids repeatedly.

use std::collections::HashMap;

use geo::{BoundingRect, Centroid, Contains, Coord, Geometry, LineString, Point, Polygon};

use mt_core::{FeatureCategory, GeoPoint};

use crate::BoundingBox;

// ── Feature ───────────────────────────────────────────────────────────────────

/// One tagged feature: its geometry plus cached centroid.
#[derive(Clone, Debug)]
pub struct Feature {
    geometry: Geometry<f64>,
    centroid: GeoPoint,
}

impl Feature {
    /// Wrap an arbitrary geometry.  `None` if it has no centroid (empty).
    pub fn new(geometry: Geometry<f64>) -> Option<Self> {
        let c = geometry.centroid()?;
        Some(Self { geometry, centroid: GeoPoint::new(c.y(), c.x()) })
    }

    /// A point feature (e.g. a clinic mapped as a single node).
    pub fn point(pos: GeoPoint) -> Self {
        Self {
            geometry: Geometry::Point(Point::new(pos.lon, pos.lat)),
            centroid: pos,
        }
    }

    /// A simple polygon from an exterior ring given in `(lat, lon)` points.
    /// The ring is closed automatically.  `None` for fewer than three
    /// distinct vertices.
    pub fn polygon(ring: &[GeoPoint]) -> Option<Self> {
        if ring.len() < 3 {
            return None;
        }
        let coords: Vec<Coord<f64>> = ring.iter().map(|p| Coord { x: p.lon, y: p.lat }).collect();
        Self::new(Geometry::Polygon(Polygon::new(LineString::from(coords), vec![])))
    }

    pub fn geometry(&self) -> &Geometry<f64> {
        &self.geometry
    }

    pub fn centroid(&self) -> GeoPoint {
        self.centroid
    }

    /// `true` for polygon and multipolygon features, the only ones a random
    /// interior point can be drawn from.
    pub fn is_areal(&self) -> bool {
        matches!(self.geometry, Geometry::Polygon(_) | Geometry::MultiPolygon(_))
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        let r = self.geometry.bounding_rect()?;
        Some(BoundingBox::new(r.min().x, r.min().y, r.max().x, r.max().y))
    }

    /// Interior test for areal features; always `false` otherwise.
    pub fn contains(&self, pos: GeoPoint) -> bool {
        let p = Point::new(pos.lon, pos.lat);
        match &self.geometry {
            Geometry::Polygon(poly) => poly.contains(&p),
            Geometry::MultiPolygon(mp) => mp.contains(&p),
            _ => false,
        }
    }
}

// ── FeatureSet ────────────────────────────────────────────────────────────────

/// Features indexed by [`FeatureCategory`].  A category that was never
/// scanned and one that was scanned but came back empty look the same.
#[derive(Clone, Debug, Default)]
pub struct FeatureSet {
    by_category: HashMap<FeatureCategory, Vec<Feature>>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: FeatureCategory, feature: Feature) {
        self.by_category.entry(category).or_default().push(feature);
    }

    /// All features of `category` in insertion order; empty if none.
    pub fn get(&self, category: FeatureCategory) -> &[Feature] {
        self.by_category.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, category: FeatureCategory) -> usize {
        self.get(category).len()
    }

    pub fn len(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
