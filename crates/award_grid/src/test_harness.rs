//! # TestMap: headless harness for the award grid
//!
//! Wraps `bevy::app::App` + `MinimalPlugins` + `AwardGridPlugin` with a small
//! fixture district set laid over the default grid.

use bevy::app::App;
use bevy::prelude::*;

use crate::districts::{District, DistrictStore};
use crate::geo::LatLng;
use crate::grid_spec::GridSpec;
use crate::overlay::{AwardOverlay, WorkedAreas};
use crate::AwardGridPlugin;

/// Point at fractional (row, col) grid coordinates of `spec`.
pub fn grid_point(spec: &GridSpec, row: f64, col: f64) -> LatLng {
    LatLng::new(
        spec.north_lat + row * spec.row_step(),
        spec.west_lng + col * spec.col_step(),
    )
}

/// Axis-aligned district spanning `rows` x `cols` in fractional grid units.
pub fn block_district(name: &str, spec: &GridSpec, rows: (f64, f64), cols: (f64, f64)) -> District {
    let boundary = vec![
        grid_point(spec, rows.0, cols.0),
        grid_point(spec, rows.0, cols.1),
        grid_point(spec, rows.1, cols.1),
        grid_point(spec, rows.1, cols.0),
    ];
    let anchor = grid_point(spec, (rows.0 + rows.1) / 2.0, (cols.0 + cols.1) / 2.0);
    District::new(name, boundary, anchor)
}

/// Four districts on the default grid:
/// - `HF` rows 6.5..10.5, cols 5.5..9.5 (square `H08` fully inside)
/// - `TA` rows 14.2..17.8, cols 2.2..4.8
/// - `JS` an L shape in rows 18.5..22.5, cols 9.5..12.5 with the NE block
///   (rows 18.5..20.5, cols 11..12.5) cut out
/// - `BS` rows 24.3..33.7, cols 4.3..11.7
pub fn fixture_store() -> DistrictStore {
    let spec = GridSpec::default();
    let js = District::new(
        "JS",
        vec![
            grid_point(&spec, 18.5, 9.5),
            grid_point(&spec, 18.5, 11.0),
            grid_point(&spec, 20.5, 11.0),
            grid_point(&spec, 20.5, 12.5),
            grid_point(&spec, 22.5, 12.5),
            grid_point(&spec, 22.5, 9.5),
        ],
        grid_point(&spec, 21.5, 10.5),
    );
    match DistrictStore::new(vec![
        block_district("HF", &spec, (6.5, 10.5), (5.5, 9.5)),
        block_district("TA", &spec, (14.2, 17.8), (2.2, 4.8)),
        js,
        block_district("BS", &spec, (24.3, 33.7), (4.3, 11.7)),
    ]) {
        Ok(store) => store,
        Err(e) => panic!("fixture store is invalid: {e}"),
    }
}

pub struct TestMap {
    app: App,
}

impl TestMap {
    /// Map with the fixture districts loaded; one update has run.
    pub fn new() -> Self {
        Self::with_store(fixture_store())
    }

    pub fn with_store(store: DistrictStore) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(store);
        app.add_plugins(AwardGridPlugin);
        app.update();
        Self { app }
    }

    /// Map with no district store at all.
    pub fn without_store() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(AwardGridPlugin);
        app.update();
        Self { app }
    }

    /// Replace the worked list; picked up on the next `tick`.
    pub fn with_worked(mut self, codes: &[&str]) -> Self {
        self.set_worked(codes);
        self
    }

    pub fn set_worked(&mut self, codes: &[&str]) {
        self.app.world_mut().resource_mut::<WorkedAreas>().0 =
            codes.iter().map(|c| c.to_string()).collect();
    }

    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn overlay(&self) -> &AwardOverlay {
        self.resource::<AwardOverlay>()
    }
}
