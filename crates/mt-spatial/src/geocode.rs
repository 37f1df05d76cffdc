//! Place-name geocoding.
//!
//! Real geocoding is an external service; the core only needs the
//! [`Geocoder`] contract.  [`resolve_center`] wraps it with the process-wide
//! fallback: an unresolvable name is logged and replaced by
//! [`DEFAULT_CENTER`] rather than surfaced as a fatal error.

use std::collections::HashMap;

use log::{info, warn};

use mt_core::GeoPoint;

use crate::{SpatialError, SpatialResult};

/// Fallback map centre (Ho Chi Minh City).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint { lat: 10.8231, lon: 106.6297 };

/// Resolve a place name to a coordinate.
pub trait Geocoder {
    /// Returns [`SpatialError::GeocodeNotFound`] if `place` is unknown.
    fn geocode(&self, place: &str) -> SpatialResult<GeoPoint>;
}

/// A fixed, case-insensitive lookup table.  Useful offline and in tests.
#[derive(Clone, Debug, Default)]
pub struct StaticGeocoder {
    places: HashMap<String, GeoPoint>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, name: &str, pos: GeoPoint) -> Self {
        self.insert(name, pos);
        self
    }

    pub fn insert(&mut self, name: &str, pos: GeoPoint) {
        self.places.insert(name.trim().to_lowercase(), pos);
    }
}

impl Geocoder for StaticGeocoder {
    fn geocode(&self, place: &str) -> SpatialResult<GeoPoint> {
        self.places
            .get(&place.trim().to_lowercase())
            .copied()
            .ok_or_else(|| SpatialError::GeocodeNotFound(place.to_owned()))
    }
}

/// Geocode `place`, falling back to [`DEFAULT_CENTER`] on any failure.
pub fn resolve_center<G: Geocoder + ?Sized>(geocoder: &G, place: &str) -> GeoPoint {
    match geocoder.geocode(place) {
        Ok(pos) => {
            info!("center point of {place}: {pos}");
            pos
        }
        Err(e) => {
            warn!("geocoding {place:?} failed ({e}); using default center {DEFAULT_CENTER}");
            DEFAULT_CENTER
        }
    }
}
