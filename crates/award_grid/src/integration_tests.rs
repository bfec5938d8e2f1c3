//! Integration tests for `AwardGridPlugin` using the `TestMap` harness.

use crate::districts::{District, DistrictStore};
use crate::engine_params::EngineParams;
use crate::error::AreaError;
use crate::geo::LatLng;
use crate::grid_spec::GridSpec;
use crate::intersection::Coverage;
use crate::overlay::{DistrictReport, LabelKind, WorkedAreas};
use crate::test_harness::{block_district, fixture_store, TestMap};

// ===========================================================================
// 1. Harness bootstrap
// ===========================================================================

#[test]
fn plugin_inserts_default_resources() {
    let map = TestMap::new();
    assert_eq!(*map.resource::<GridSpec>(), GridSpec::default());
    assert_eq!(*map.resource::<EngineParams>(), EngineParams::default());
    assert!(map.resource::<WorkedAreas>().0.is_empty());
    assert_eq!(map.resource::<DistrictStore>().len(), 4);
}

#[test]
fn startup_builds_labels_for_squares_and_districts() {
    let map = TestMap::new();
    let labels = &map.overlay().labels;
    let squares = labels.iter().filter(|l| l.kind == LabelKind::Square).count();
    let districts = labels.iter().filter(|l| l.kind == LabelKind::District).count();
    assert_eq!(squares, GridSpec::default().cell_count());
    assert_eq!(districts, 4);
}

// ===========================================================================
// 2. Worked areas flow into the overlay
// ===========================================================================

#[test]
fn worked_areas_resolve_into_overlay() {
    // H08HF is deep inside HF; K19JS sits in the JS arm; M19JS is in the
    // notch cut out of JS; C15TA straddles TA's west edge.
    let mut map = TestMap::new().with_worked(&["H08HF", "K19JS", "M19JS", "C15TA", "Z99HF"]);
    map.tick(1);
    let batch = &map.overlay().batch;

    let resolved: Vec<(&str, Coverage)> = batch
        .regions
        .iter()
        .map(|r| (r.area_code.as_str(), r.coverage))
        .collect();
    assert_eq!(
        resolved,
        vec![
            ("H08HF", Coverage::Full),
            ("K19JS", Coverage::Partial),
            ("C15TA", Coverage::Partial),
        ]
    );
    assert_eq!(batch.empty, vec!["M19JS".to_string()]);
    assert_eq!(batch.rejected.len(), 1);
    assert_eq!(batch.rejected[0].error, AreaError::InvalidLetter('Z'));
}

#[test]
fn overlay_polygons_stay_inside_their_square() {
    let mut map = TestMap::new().with_worked(&["F06HF", "K19JS", "E24BS", "L33BS"]);
    map.tick(1);
    let spec = GridSpec::default();
    let eps = 1e-9;
    for region in &map.overlay().batch.regions {
        let cell = crate::squares::from_code(&region.square_code.to_string(), &spec).unwrap();
        let corners = crate::squares::cell_bounds(cell, &spec);
        let (north, south) = (corners[0].lat, corners[2].lat);
        let (west, east) = (corners[0].lng, corners[1].lng);
        for p in &region.polygon {
            assert!(p.lat <= north + eps && p.lat >= south - eps, "{}", region.area_code);
            assert!(p.lng >= west - eps && p.lng <= east + eps, "{}", region.area_code);
        }
    }
    assert_eq!(map.overlay().batch.regions.len(), 4);
}

#[test]
fn replacing_the_store_rebuilds_labels_and_overlay() {
    let mut map = TestMap::new().with_worked(&["H08HF", "H08AA"]);
    map.tick(1);
    assert_eq!(map.overlay().batch.rejected.len(), 1);
    let generation = map.overlay().generation;

    let spec = GridSpec::default();
    let mut districts: Vec<_> = fixture_store().iter().cloned().collect();
    districts.push(block_district("AA", &spec, (7.5, 8.5), (6.5, 7.5)));
    let store = DistrictStore::new(districts).unwrap();
    map.world_mut().insert_resource(store);
    map.tick(1);

    let overlay = map.overlay();
    assert!(overlay.generation > generation);
    assert!(overlay.batch.rejected.is_empty());
    assert_eq!(overlay.batch.regions.len(), 2);
    assert_eq!(
        overlay
            .labels
            .iter()
            .filter(|l| l.kind == LabelKind::District)
            .count(),
        5
    );
}

// ===========================================================================
// 3. Mismatched census does not stop the plugin
// ===========================================================================

#[test]
fn small_store_still_resolves() {
    let spec = GridSpec::default();
    let store = DistrictStore::new(vec![block_district("HF", &spec, (6.5, 10.5), (5.5, 9.5))]).unwrap();
    let mut map = TestMap::with_store(store).with_worked(&["H08HF"]);
    map.tick(1);
    assert_eq!(map.overlay().batch.regions.len(), 1);
}

#[test]
fn census_reported_at_startup() {
    let map = TestMap::new();
    let report = map.resource::<DistrictReport>();
    let census = report.census.expect("census after startup");
    assert_eq!(census.loaded, 4);
    assert_eq!(census.stated_by_rules, 23);
    assert!(report.problems.is_empty());
}

#[test]
fn census_refreshed_when_store_replaced() {
    let mut map = TestMap::new();
    let mut districts: Vec<_> = fixture_store().iter().cloned().collect();
    districts.push(District::new(
        "LN",
        vec![LatLng::new(31.0, 35.0), LatLng::new(31.1, 35.1)],
        LatLng::new(31.05, 35.05),
    ));
    map.world_mut()
        .insert_resource(DistrictStore::new(districts).unwrap());
    map.tick(1);

    let report = map.resource::<DistrictReport>();
    assert_eq!(report.census.map(|c| c.loaded), Some(5));
    assert_eq!(
        report.problems,
        vec![AreaError::DegeneratePolygon("LN".into())]
    );
}

#[test]
fn missing_store_leaves_report_empty() {
    let mut map = TestMap::without_store();
    map.tick(2);
    assert!(map.resource::<DistrictReport>().census.is_none());
}
