//! Types and resources for overlay resolution.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::districts::DistrictCensus;
use crate::error::AreaError;
use crate::geo::LatLng;
use crate::intersection::Coverage;
use crate::squares::SquareCode;

/// One region for the renderer to fill: the part of a worked square that
/// lies inside its district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayRegion {
    pub polygon: Vec<LatLng>,
    pub district_name: String,
    pub square_code: SquareCode,
    /// Canonical compound code the region was resolved from.
    pub area_code: String,
    pub coverage: Coverage,
}

/// A worked code that could not be resolved, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedCode {
    pub code: String,
    pub error: AreaError,
}

/// Result of resolving a list of worked codes.
///
/// `empty` holds codes that parsed but whose square does not overlap its
/// district; `rejected` holds codes that failed to parse. The two are kept
/// apart so callers can report them differently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayBatch {
    pub regions: Vec<OverlayRegion>,
    pub empty: Vec<String>,
    pub rejected: Vec<RejectedCode>,
}

impl OverlayBatch {
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.empty.is_empty() && self.rejected.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelKind {
    Square,
    District,
}

/// Text to place on the map at `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLabel {
    pub position: LatLng,
    pub text: String,
    pub kind: LabelKind,
}

/// Worked area codes for the current operator, as received from the backend.
#[derive(Resource, Debug, Clone, Default)]
pub struct WorkedAreas(pub Vec<String>);

/// Latest overlay and labels, rebuilt when `WorkedAreas` or the district
/// store changes. The renderer reads this and owns whatever it draws.
#[derive(Resource, Debug, Clone, Default)]
pub struct AwardOverlay {
    pub batch: OverlayBatch,
    pub labels: Vec<MapLabel>,
    /// Bumped on every rebuild.
    pub generation: u64,
}

/// Last district census and data-quality problems, refreshed whenever the
/// district store is inserted or replaced.
#[derive(Resource, Debug, Clone, Default)]
pub struct DistrictReport {
    pub census: Option<DistrictCensus>,
    pub problems: Vec<AreaError>,
}
