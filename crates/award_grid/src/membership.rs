use crate::districts::{District, DistrictStore};
use crate::geo::LatLng;

/// Ray-casting point-in-polygon test.
/// Casts a ray from `point` towards +infinity longitude and counts edge
/// crossings; odd means inside. The polygon is implicitly closed. The
/// half-open `(yi > y) != (yj > y)` test counts a vertex lying on the ray
/// once, so points on a vertex shared by neighbours are not double counted.
pub fn point_in_polygon(point: LatLng, polygon: &[LatLng]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let (px, py) = (point.lng, point.lat);
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (polygon[i].lng, polygon[i].lat);
        let (xj, yj) = (polygon[j].lng, polygon[j].lat);
        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Point-in-polygon against one district, rejecting by bounding box first.
pub fn district_contains(district: &District, point: LatLng) -> bool {
    match district.bounding_box() {
        Some(bb) if bb.contains(point) => point_in_polygon(point, district.boundary()),
        _ => false,
    }
}

/// First district in store order whose boundary contains `point`.
pub fn district_containing(point: LatLng, districts: &DistrictStore) -> Option<&District> {
    districts.iter().find(|d| district_contains(d, point))
}
