//! Map label placement for squares and districts.

use crate::districts::DistrictStore;
use crate::grid_spec::GridSpec;
use crate::squares::{cell_centroid, to_code};

use super::types::{LabelKind, MapLabel};

/// One label per grid cell, at the cell centroid, reading e.g. `H08`.
pub fn grid_labels(spec: &GridSpec) -> Vec<MapLabel> {
    spec.cells()
        .filter_map(|cell| {
            let code = to_code(cell, spec).ok()?;
            Some(MapLabel {
                position: cell_centroid(cell, spec),
                text: code.to_string(),
                kind: LabelKind::Square,
            })
        })
        .collect()
}

/// One label per district, at its label anchor.
pub fn district_labels(districts: &DistrictStore) -> Vec<MapLabel> {
    districts
        .iter()
        .map(|d| MapLabel {
            position: d.label_anchor,
            text: d.name.clone(),
            kind: LabelKind::District,
        })
        .collect()
}

/// Square labels followed by district labels.
pub fn map_labels(spec: &GridSpec, districts: &DistrictStore) -> Vec<MapLabel> {
    let mut labels = grid_labels(spec);
    labels.extend(district_labels(districts));
    labels
}
