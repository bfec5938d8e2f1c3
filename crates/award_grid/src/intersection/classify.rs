use crate::districts::District;
use crate::engine_params::EngineParams;
use crate::geo::{polygon_area, BoundingBox, LatLng};
use crate::grid_spec::{CellIndex, GridSpec};
use crate::membership::point_in_polygon;
use crate::squares::cell_bounds;

use super::clip::clip_to_rect;
use super::types::IntersectionResult;

/// Relative tolerance for treating a clip that covers the whole cell as `Full`.
const FULL_COVER_TOLERANCE: f64 = 1e-9;

fn cell_rect(corners: &[LatLng; 4]) -> BoundingBox {
    // corners are NW, NE, SE, SW
    BoundingBox {
        north: corners[0].lat,
        south: corners[2].lat,
        west: corners[0].lng,
        east: corners[1].lng,
    }
}

/// Interior evidence for a cell none of whose corners is inside: an `n x n`
/// grid of sample points at sub-cell centres, then any district vertex that
/// lies strictly inside the cell.
fn has_interior_overlap(
    rect: &BoundingBox,
    district: &District,
    resolution: usize,
) -> bool {
    let n = resolution.max(1);
    let lat_step = (rect.south - rect.north) / n as f64;
    let lng_step = (rect.east - rect.west) / n as f64;
    for i in 0..n {
        let lat = rect.north + (i as f64 + 0.5) * lat_step;
        for j in 0..n {
            let lng = rect.west + (j as f64 + 0.5) * lng_step;
            if point_in_polygon(LatLng::new(lat, lng), district.boundary()) {
                return true;
            }
        }
    }
    district.boundary().iter().any(|v| {
        v.lat > rect.south && v.lat < rect.north && v.lng > rect.west && v.lng < rect.east
    })
}

/// Classifies one cell against one district.
///
/// Degenerate input (a boundary with fewer than 3 vertices, or a clip that
/// collapses below 3 vertices or to zero area) yields `Empty`.
pub fn intersect_cell(
    cell: CellIndex,
    district: &District,
    spec: &GridSpec,
    params: &EngineParams,
) -> IntersectionResult {
    if district.boundary().len() < 3 {
        return IntersectionResult::Empty;
    }
    let corners = cell_bounds(cell, spec);
    let rect = cell_rect(&corners);
    match district.bounding_box() {
        Some(bb) if bb.intersects(&rect) => {}
        _ => return IntersectionResult::Empty,
    }

    let inside = corners
        .iter()
        .filter(|c| point_in_polygon(**c, district.boundary()))
        .count();
    if inside == corners.len() {
        return IntersectionResult::Full;
    }
    if inside == 0 && !has_interior_overlap(&rect, district, params.sample_resolution) {
        return IntersectionResult::Empty;
    }

    let clipped = clip_to_rect(district.boundary(), &rect, params.epsilon);
    if clipped.len() < 3 {
        return IntersectionResult::Empty;
    }
    let area = polygon_area(&clipped);
    if area <= params.epsilon * params.epsilon {
        return IntersectionResult::Empty;
    }
    let cell_area = polygon_area(&corners);
    if (cell_area - area) <= cell_area * FULL_COVER_TOLERANCE {
        return IntersectionResult::Full;
    }
    IntersectionResult::Partial(clipped)
}

/// Every cell of the grid overlapping `district`, with its classification.
/// `Empty` cells are left out.
pub fn classify_grid(
    district: &District,
    spec: &GridSpec,
    params: &EngineParams,
) -> Vec<(CellIndex, IntersectionResult)> {
    spec.cells()
        .map(|cell| (cell, intersect_cell(cell, district, spec, params)))
        .filter(|(_, result)| !result.is_empty())
        .collect()
}
