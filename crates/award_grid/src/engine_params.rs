//! Data-driven engine parameters.
//!
//! Collects the tunables of the intersection engine and batch resolver into
//! one [`EngineParams`] resource so hosts can override them from JSON
//! without recompiling.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_PARALLEL_CHUNK, DEFAULT_SAMPLE_RESOLUTION, GEO_EPSILON, RULES_DISTRICT_COUNT,
};
use crate::error::AreaError;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineParams {
    /// Side length `n` of the `n x n` interior sample grid used when no cell
    /// corner falls inside a district.
    pub sample_resolution: usize,
    /// On-edge tolerance in degrees for clipping.
    pub epsilon: f64,
    /// District count stated by the award rules, compared against the store.
    pub rules_district_count: usize,
    /// Worked codes per compute-pool task.
    pub parallel_chunk_size: usize,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            sample_resolution: DEFAULT_SAMPLE_RESOLUTION,
            epsilon: GEO_EPSILON,
            rules_district_count: RULES_DISTRICT_COUNT,
            parallel_chunk_size: DEFAULT_PARALLEL_CHUNK,
        }
    }
}

impl EngineParams {
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, AreaError> {
        let params: EngineParams = serde_json::from_str(json)?;
        if params.sample_resolution == 0 || params.parallel_chunk_size == 0 {
            return Err(AreaError::Dataset(
                "sample_resolution and parallel_chunk_size must be positive".to_string(),
            ));
        }
        if params.epsilon.is_nan() || params.epsilon < 0.0 {
            return Err(AreaError::Dataset(format!(
                "epsilon must be non-negative, got {}",
                params.epsilon
            )));
        }
        Ok(params)
    }
}
