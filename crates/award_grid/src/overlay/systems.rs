use bevy::prelude::*;

use crate::districts::DistrictStore;
use crate::engine_params::EngineParams;
use crate::grid_spec::GridSpec;

use super::labels::map_labels;
use super::resolve::resolve_worked_codes_parallel;
use super::types::{AwardOverlay, DistrictReport, WorkedAreas};

// =============================================================================
// Systems
// =============================================================================

/// Logs the loaded district count against the count the rules state, and any
/// district whose polygon is unusable. Runs again whenever the store changes.
pub fn report_district_census(
    store: Option<Res<DistrictStore>>,
    params: Res<EngineParams>,
    mut report: ResMut<DistrictReport>,
    mut warned_missing: Local<bool>,
) {
    let Some(store) = store else {
        if !*warned_missing {
            warn!("no district store loaded; every worked area will be rejected");
            *warned_missing = true;
        }
        return;
    };
    *warned_missing = false;
    if !store.is_changed() {
        return;
    }
    let census = store.census(params.rules_district_count);
    if census.is_consistent() {
        info!("loaded {} districts", census.loaded);
    } else {
        warn!(
            "loaded {} districts but the award rules state {}",
            census.loaded, census.stated_by_rules
        );
    }
    let problems = store.validate();
    for problem in &problems {
        warn!("district data: {}", problem);
    }
    report.census = Some(census);
    report.problems = problems;
}

/// Rebuilds the overlay when the worked list, grid, district store or
/// parameters change.
pub fn refresh_award_overlay(
    worked: Res<WorkedAreas>,
    spec: Res<GridSpec>,
    store: Res<DistrictStore>,
    params: Res<EngineParams>,
    mut overlay: ResMut<AwardOverlay>,
) {
    let labels_stale = spec.is_changed() || store.is_changed();
    if !(labels_stale || worked.is_changed() || params.is_changed()) {
        return;
    }
    overlay.batch = resolve_worked_codes_parallel(&worked.0, &spec, &store, &params);
    if labels_stale {
        overlay.labels = map_labels(&spec, &store);
    }
    overlay.generation += 1;
}

// =============================================================================
// Plugin
// =============================================================================

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WorkedAreas>()
            .init_resource::<AwardOverlay>()
            .init_resource::<DistrictReport>()
            .add_systems(
                Update,
                (
                    report_district_census,
                    refresh_award_overlay.run_if(resource_exists::<DistrictStore>),
                ),
            );
    }
}
