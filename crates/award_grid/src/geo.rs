//! Plain lat/lng geometry shared by the mapper, resolver and clipper.
//!
//! Planar math treats longitude as x and latitude as y. The award area is
//! small enough that no projection is needed.

use bevy::math::DVec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planar vector with x = lng, y = lat.
    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }

    #[inline]
    pub fn from_dvec2(v: DVec2) -> Self {
        Self { lat: v.y, lng: v.x }
    }

    pub fn approx_eq(self, other: LatLng, eps: f64) -> bool {
        (self.lat - other.lat).abs() <= eps && (self.lng - other.lng).abs() <= eps
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned lat/lng rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Returns `None` for an empty point list.
    pub fn of_points(points: &[LatLng]) -> Option<Self> {
        let first = points.first()?;
        let mut bb = BoundingBox {
            south: first.lat,
            north: first.lat,
            west: first.lng,
            east: first.lng,
        };
        for p in &points[1..] {
            bb.south = bb.south.min(p.lat);
            bb.north = bb.north.max(p.lat);
            bb.west = bb.west.min(p.lng);
            bb.east = bb.east.max(p.lng);
        }
        Some(bb)
    }

    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.south && p.lat <= self.north && p.lng >= self.west && p.lng <= self.east
    }

    /// Closed-interval overlap test; touching edges count as overlapping.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.west <= other.east
            && other.west <= self.east
            && self.south <= other.north
            && other.south <= self.north
    }
}

/// Shoelace area in square degrees. Positive for counter-clockwise rings
/// (in lng/lat axes), negative for clockwise.
pub fn signed_area(ring: &[LatLng]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let a = ring[i].to_dvec2();
        let b = ring[(i + 1) % n].to_dvec2();
        twice += a.perp_dot(b);
    }
    twice / 2.0
}

pub fn polygon_area(ring: &[LatLng]) -> f64 {
    signed_area(ring).abs()
}

/// Area centroid of a simple polygon. Falls back to the vertex mean when the
/// ring has no area.
pub fn polygon_centroid(ring: &[LatLng]) -> Option<LatLng> {
    if ring.is_empty() {
        return None;
    }
    let area = signed_area(ring);
    if area.abs() < f64::EPSILON {
        let sum = ring.iter().fold(DVec2::ZERO, |acc, p| acc + p.to_dvec2());
        return Some(LatLng::from_dvec2(sum / ring.len() as f64));
    }
    let n = ring.len();
    let mut c = DVec2::ZERO;
    for i in 0..n {
        let a = ring[i].to_dvec2();
        let b = ring[(i + 1) % n].to_dvec2();
        c += (a + b) * a.perp_dot(b);
    }
    Some(LatLng::from_dvec2(c / (6.0 * area)))
}
