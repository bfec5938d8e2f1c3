//! Types and resources for the district store.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::error::AreaError;
use crate::geo::{polygon_area, BoundingBox, LatLng};

/// A named administrative polygon. The boundary is implicitly closed.
#[derive(Debug, Clone, PartialEq)]
pub struct District {
    /// Two uppercase letters, e.g. `HF`.
    pub name: String,
    boundary: Vec<LatLng>,
    pub label_anchor: LatLng,
    bbox: Option<BoundingBox>,
}

impl District {
    /// Builds a district, uppercasing the name and caching its bounding box.
    pub fn new(name: impl Into<String>, boundary: Vec<LatLng>, label_anchor: LatLng) -> Self {
        let bbox = BoundingBox::of_points(&boundary);
        Self {
            name: name.into().to_ascii_uppercase(),
            boundary,
            label_anchor,
            bbox,
        }
    }

    /// Boundary ring. Read-only so the cached bounding box cannot go stale.
    #[inline]
    pub fn boundary(&self) -> &[LatLng] {
        &self.boundary
    }

    /// `None` when the boundary has no vertices.
    #[inline]
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }

    /// Data-quality check: at least 3 vertices and a non-zero area.
    pub fn validate(&self) -> Result<(), AreaError> {
        if self.boundary.len() < 3 || polygon_area(&self.boundary) <= f64::EPSILON {
            return Err(AreaError::DegeneratePolygon(self.name.clone()));
        }
        Ok(())
    }
}

/// Read-only set of districts in load order. Load order is the tie-break
/// when a point sits on a boundary shared by two districts.
#[derive(Resource, Debug, Clone, Default)]
pub struct DistrictStore {
    districts: Vec<District>,
    by_name: HashMap<String, usize>,
}

impl DistrictStore {
    /// Fails with `AreaError::Dataset` on a malformed or duplicate name.
    pub fn new(districts: Vec<District>) -> Result<Self, AreaError> {
        let mut by_name = HashMap::with_capacity(districts.len());
        for (i, d) in districts.iter().enumerate() {
            if d.name.len() != 2 || !d.name.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(AreaError::Dataset(format!(
                    "district name {:?} is not two letters",
                    d.name
                )));
            }
            if by_name.insert(d.name.clone(), i).is_some() {
                return Err(AreaError::Dataset(format!(
                    "duplicate district {:?}",
                    d.name
                )));
            }
        }
        Ok(Self { districts, by_name })
    }

    /// Case-insensitive lookup by two-letter name.
    pub fn get(&self, name: &str) -> Option<&District> {
        let key = name.to_ascii_uppercase();
        self.by_name.get(&key).map(|&i| &self.districts[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &District> {
        self.districts.iter()
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.districts.iter().map(|d| d.name.as_str())
    }

    /// One `DegeneratePolygon` per district failing [`District::validate`].
    pub fn validate(&self) -> Vec<AreaError> {
        self.districts
            .iter()
            .filter_map(|d| d.validate().err())
            .collect()
    }

    pub fn census(&self, stated_by_rules: usize) -> DistrictCensus {
        DistrictCensus {
            loaded: self.len(),
            stated_by_rules,
        }
    }
}

/// Loaded district count next to the count the award rules claim. The two are
/// reported side by side and never reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistrictCensus {
    pub loaded: usize,
    pub stated_by_rules: usize,
}

impl DistrictCensus {
    pub fn is_consistent(&self) -> bool {
        self.loaded == self.stated_by_rules
    }
}
