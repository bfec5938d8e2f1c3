//! JSON decoding of the district dataset.
//!
//! Two shapes are accepted:
//! - an object keyed by district name, `{"HF": {"boundary": [...], "label_anchor": {...}}}`
//!   (districts are then stored in name order), or
//! - a list of records carrying their own `name` (load order is kept).
//!
//! `coords` and `center` are accepted as aliases for `boundary` and
//! `label_anchor`. A missing anchor falls back to the polygon centroid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{District, DistrictStore};
use crate::error::AreaError;
use crate::geo::{polygon_centroid, LatLng};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(alias = "coords")]
    pub boundary: Vec<LatLng>,
    #[serde(default, alias = "center")]
    pub label_anchor: Option<LatLng>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Dataset {
    Keyed(BTreeMap<String, DistrictRecord>),
    Listed(Vec<DistrictRecord>),
}

impl DistrictRecord {
    fn into_district(self, name: String) -> District {
        let anchor = self
            .label_anchor
            .or_else(|| polygon_centroid(&self.boundary))
            .unwrap_or_default();
        District::new(name, self.boundary, anchor)
    }
}

impl DistrictStore {
    pub fn from_json(json: &str) -> Result<Self, AreaError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        match dataset {
            Dataset::Keyed(map) => DistrictStore::new(
                map.into_iter()
                    .map(|(key, record)| record.into_district(key))
                    .collect(),
            ),
            Dataset::Listed(records) => Self::from_records(records),
        }
    }

    /// Builds a store from named records, keeping their order.
    pub fn from_records(records: Vec<DistrictRecord>) -> Result<Self, AreaError> {
        let districts = records
            .into_iter()
            .map(|mut record| match record.name.take() {
                Some(name) => Ok(record.into_district(name)),
                None => Err(AreaError::Dataset(
                    "district record without a name".to_string(),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;
        DistrictStore::new(districts)
    }
}
