//! Worked-area overlay: resolves the operator's worked codes into polygons
//! for the map, plus the square and district labels drawn with them.

mod labels;
mod resolve;
mod systems;
pub mod types;

pub use labels::{district_labels, grid_labels, map_labels};
pub use resolve::{resolve_worked_codes, resolve_worked_codes_on, resolve_worked_codes_parallel};
pub use systems::{refresh_award_overlay, report_district_census, OverlayPlugin};
pub use types::{
    AwardOverlay, DistrictReport, LabelKind, MapLabel, OverlayBatch, OverlayRegion, RejectedCode,
    WorkedAreas,
};
