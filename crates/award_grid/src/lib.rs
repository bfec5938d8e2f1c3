use bevy::prelude::*;

pub mod area_code;
pub mod config;
pub mod districts;
pub mod engine_params;
pub mod error;
pub mod geo;
pub mod grid_spec;
pub mod intersection;
pub mod locator;
pub mod membership;
pub mod overlay;
pub mod progress;
pub mod squares;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use error::AreaError;

/// Registers the grid and engine parameters as resources and keeps the
/// worked-area overlay current.
///
/// The host inserts a `DistrictStore` (and, optionally, its own `GridSpec` or
/// `EngineParams`) before adding the plugin; defaults are used otherwise.
pub struct AwardGridPlugin;

impl Plugin for AwardGridPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<grid_spec::GridSpec>()
            .init_resource::<engine_params::EngineParams>();

        app.add_plugins(overlay::OverlayPlugin);
    }
}
