use crate::error::AreaError;
use crate::geo::LatLng;

use super::{District, DistrictRecord, DistrictStore};

const KEYED: &str = r#"{
    "TA": {
        "boundary": [
            {"lat": 32.2, "lng": 34.7},
            {"lat": 32.2, "lng": 34.9},
            {"lat": 32.0, "lng": 34.9},
            {"lat": 32.0, "lng": 34.7}
        ],
        "label_anchor": {"lat": 32.1, "lng": 34.8}
    },
    "HF": {
        "coords": [
            {"lat": 33.0, "lng": 35.0},
            {"lat": 33.0, "lng": 35.2},
            {"lat": 32.8, "lng": 35.2},
            {"lat": 32.8, "lng": 35.0}
        ],
        "center": {"lat": 32.9, "lng": 35.1}
    }
}"#;

fn square(name: &str, lat: f64, lng: f64) -> District {
    District::new(
        name,
        vec![
            LatLng::new(lat + 1.0, lng),
            LatLng::new(lat + 1.0, lng + 1.0),
            LatLng::new(lat, lng + 1.0),
            LatLng::new(lat, lng),
        ],
        LatLng::new(lat + 0.5, lng + 0.5),
    )
}

// -------------------------------------------------------------------------
// Loading
// -------------------------------------------------------------------------

#[test]
fn test_keyed_dataset_with_aliases() {
    let store = DistrictStore::from_json(KEYED).unwrap();
    assert_eq!(store.len(), 2);
    // Keyed datasets load in name order.
    let names: Vec<&str> = store.names().collect();
    assert_eq!(names, vec!["HF", "TA"]);
    let hf = store.get("HF").unwrap();
    assert_eq!(hf.boundary().len(), 4);
    assert_eq!(hf.label_anchor, LatLng::new(32.9, 35.1));
}

#[test]
fn test_listed_dataset_keeps_order_and_fills_anchor() {
    let json = r#"[
        {"name": "JS", "boundary": [
            {"lat": 0.0, "lng": 0.0}, {"lat": 0.0, "lng": 2.0},
            {"lat": 2.0, "lng": 2.0}, {"lat": 2.0, "lng": 0.0}
        ]},
        {"name": "BS", "boundary": [
            {"lat": 5.0, "lng": 5.0}, {"lat": 5.0, "lng": 6.0}, {"lat": 6.0, "lng": 6.0}
        ], "label_anchor": {"lat": 5.5, "lng": 5.8}}
    ]"#;
    let store = DistrictStore::from_json(json).unwrap();
    let names: Vec<&str> = store.names().collect();
    assert_eq!(names, vec!["JS", "BS"]);
    let js = store.get("JS").unwrap();
    assert!(js.label_anchor.approx_eq(LatLng::new(1.0, 1.0), 1e-12));
}

#[test]
fn test_record_without_name_is_rejected() {
    let record = DistrictRecord {
        name: None,
        boundary: vec![LatLng::new(0.0, 0.0)],
        label_anchor: None,
    };
    assert!(matches!(
        DistrictStore::from_records(vec![record]),
        Err(AreaError::Dataset(_))
    ));
}

#[test]
fn test_invalid_json_is_dataset_error() {
    assert!(matches!(
        DistrictStore::from_json("{not json"),
        Err(AreaError::Dataset(_))
    ));
}

#[test]
fn test_bad_and_duplicate_names_rejected() {
    assert!(DistrictStore::new(vec![square("H1", 0.0, 0.0)]).is_err());
    assert!(DistrictStore::new(vec![square("ABC", 0.0, 0.0)]).is_err());
    let dup = DistrictStore::new(vec![square("AA", 0.0, 0.0), square("aa", 5.0, 5.0)]);
    assert!(matches!(dup, Err(AreaError::Dataset(_))));
}

// -------------------------------------------------------------------------
// Lookup and validation
// -------------------------------------------------------------------------

#[test]
fn test_lookup_is_case_insensitive() {
    let store = DistrictStore::new(vec![square("HF", 0.0, 0.0)]).unwrap();
    assert!(store.contains("hf"));
    assert!(store.contains("Hf"));
    assert!(!store.contains("ZZ"));
    assert_eq!(store.get("hf").map(|d| d.name.as_str()), Some("HF"));
}

#[test]
fn test_bounding_box_cached() {
    let d = square("HF", 2.0, 3.0);
    let bb = d.bounding_box().unwrap();
    assert_eq!((bb.south, bb.north, bb.west, bb.east), (2.0, 3.0, 3.0, 4.0));
    let empty = District::new("EM", Vec::new(), LatLng::default());
    assert!(empty.bounding_box().is_none());
}

#[test]
fn test_validate_reports_degenerate_polygons() {
    let line = District::new(
        "LN",
        vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)],
        LatLng::default(),
    );
    let flat = District::new(
        "FL",
        vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(1.0, 1.0),
            LatLng::new(2.0, 2.0),
        ],
        LatLng::default(),
    );
    let store = DistrictStore::new(vec![square("OK", 0.0, 0.0), line, flat]).unwrap();
    assert_eq!(
        store.validate(),
        vec![
            AreaError::DegeneratePolygon("LN".into()),
            AreaError::DegeneratePolygon("FL".into()),
        ]
    );
}

#[test]
fn test_census_compares_against_rules() {
    let store = DistrictStore::new(vec![square("AA", 0.0, 0.0), square("BB", 2.0, 2.0)]).unwrap();
    let census = store.census(2);
    assert!(census.is_consistent());
    let census = store.census(23);
    assert!(!census.is_consistent());
    assert_eq!(census.loaded, 2);
    assert_eq!(census.stated_by_rules, 23);
}

#[test]
fn test_bounding_box_matches_boundary() {
    let d = square("HF", 2.0, 3.0);
    assert_eq!(d.boundary().len(), 4);
    assert_eq!(
        crate::geo::BoundingBox::of_points(d.boundary()).as_ref(),
        d.bounding_box()
    );
}
