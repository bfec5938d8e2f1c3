//! Sutherland–Hodgman clipping of a polygon against an axis-aligned rectangle.
//!
//! The district boundary is the subject and the cell rectangle is the clip
//! window. Clipping any simple polygon against a convex window gives the
//! exact overlap area; a concave subject that enters the cell twice comes
//! back as one ring joined by zero-width seams along the cell edge.

use bevy::math::DVec2;

use crate::geo::{BoundingBox, LatLng};

#[derive(Debug, Clone, Copy)]
enum Boundary {
    West(f64),
    East(f64),
    South(f64),
    North(f64),
}

impl Boundary {
    #[inline]
    fn keeps(self, p: DVec2, eps: f64) -> bool {
        match self {
            Boundary::West(x) => p.x >= x - eps,
            Boundary::East(x) => p.x <= x + eps,
            Boundary::South(y) => p.y >= y - eps,
            Boundary::North(y) => p.y <= y + eps,
        }
    }

    /// Crossing point of segment `a -> b` with this boundary line. Only called
    /// when exactly one endpoint is kept, so the segment is never parallel.
    #[inline]
    fn crossing(self, a: DVec2, b: DVec2) -> DVec2 {
        match self {
            Boundary::West(x) | Boundary::East(x) => {
                let t = ((x - a.x) / (b.x - a.x)).clamp(0.0, 1.0);
                DVec2::new(x, a.y + t * (b.y - a.y))
            }
            Boundary::South(y) | Boundary::North(y) => {
                let t = ((y - a.y) / (b.y - a.y)).clamp(0.0, 1.0);
                DVec2::new(a.x + t * (b.x - a.x), y)
            }
        }
    }
}

/// Clips `subject` to `rect`. Returns the clipped ring with consecutive
/// duplicate vertices removed; fewer than 3 vertices means no overlap.
pub fn clip_to_rect(subject: &[LatLng], rect: &BoundingBox, eps: f64) -> Vec<LatLng> {
    let mut ring: Vec<DVec2> = subject.iter().map(|p| p.to_dvec2()).collect();
    let boundaries = [
        Boundary::West(rect.west),
        Boundary::East(rect.east),
        Boundary::South(rect.south),
        Boundary::North(rect.north),
    ];

    for boundary in boundaries {
        let Some(&last) = ring.last() else {
            break;
        };
        let input = std::mem::take(&mut ring);
        let mut prev = last;
        let mut prev_kept = boundary.keeps(prev, eps);
        for &cur in &input {
            let cur_kept = boundary.keeps(cur, eps);
            if cur_kept != prev_kept {
                ring.push(boundary.crossing(prev, cur));
            }
            if cur_kept {
                ring.push(cur);
            }
            prev = cur;
            prev_kept = cur_kept;
        }
    }

    dedup_ring(&mut ring, eps);
    ring.into_iter().map(LatLng::from_dvec2).collect()
}

/// Drops consecutive near-duplicate vertices, including across the wrap.
fn dedup_ring(ring: &mut Vec<DVec2>, eps: f64) {
    ring.dedup_by(|b, a| a.abs_diff_eq(*b, eps));
    while ring.len() > 1 {
        let (first, last) = (ring[0], ring[ring.len() - 1]);
        if first.abs_diff_eq(last, eps) {
            ring.pop();
        } else {
            break;
        }
    }
}
