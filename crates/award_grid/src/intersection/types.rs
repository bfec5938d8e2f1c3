use serde::{Deserialize, Serialize};

use crate::geo::{polygon_area, LatLng};

/// Outcome of intersecting one cell with one district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IntersectionResult {
    /// The whole cell is inside the district.
    Full,
    /// No overlap.
    Empty,
    /// Overlap region, clipped to the cell.
    Partial(Vec<LatLng>),
}

/// Coverage kind carried by overlay records. `Empty` never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coverage {
    Full,
    Partial,
}

impl IntersectionResult {
    pub fn is_empty(&self) -> bool {
        matches!(self, IntersectionResult::Empty)
    }

    pub fn coverage(&self) -> Option<Coverage> {
        match self {
            IntersectionResult::Full => Some(Coverage::Full),
            IntersectionResult::Partial(_) => Some(Coverage::Partial),
            IntersectionResult::Empty => None,
        }
    }

    /// Covered area in square degrees; `cell_area` is used for `Full`.
    pub fn area(&self, cell_area: f64) -> f64 {
        match self {
            IntersectionResult::Full => cell_area,
            IntersectionResult::Empty => 0.0,
            IntersectionResult::Partial(poly) => polygon_area(poly),
        }
    }
}
