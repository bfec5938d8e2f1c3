//! Batch resolution of worked area codes into overlay regions.

use std::collections::HashSet;

use bevy::prelude::*;
use bevy::tasks::{ComputeTaskPool, TaskPool};

use crate::area_code::parse_compound;
use crate::districts::DistrictStore;
use crate::engine_params::EngineParams;
use crate::grid_spec::GridSpec;
use crate::intersection::{intersect_cell, Coverage, IntersectionResult};
use crate::squares::{cell_bounds, to_code};

use super::types::{OverlayBatch, OverlayRegion, RejectedCode};

enum Resolution {
    Region(OverlayRegion),
    Empty(String),
    Rejected(RejectedCode),
}

fn resolve_one(
    code: &str,
    spec: &GridSpec,
    districts: &DistrictStore,
    params: &EngineParams,
) -> Resolution {
    let parsed = parse_compound(code, spec, districts)
        .and_then(|(cell, district)| Ok((cell, district, to_code(cell, spec)?)));
    let (cell, district, square_code) = match parsed {
        Ok(v) => v,
        Err(error) => {
            warn!("worked area {:?} rejected: {}", code, error);
            return Resolution::Rejected(RejectedCode {
                code: code.to_string(),
                error,
            });
        }
    };

    let (polygon, coverage) = match intersect_cell(cell, district, spec, params) {
        IntersectionResult::Empty => {
            debug!(
                "worked area {} does not overlap district {}",
                code, district.name
            );
            return Resolution::Empty(code.to_string());
        }
        IntersectionResult::Full => (cell_bounds(cell, spec).to_vec(), Coverage::Full),
        IntersectionResult::Partial(poly) => (poly, Coverage::Partial),
    };
    Resolution::Region(OverlayRegion {
        polygon,
        district_name: district.name.clone(),
        square_code,
        area_code: code.to_string(),
        coverage,
    })
}

/// Uppercased, trimmed codes with duplicates removed, first occurrence kept.
fn unique_codes<S: AsRef<str>>(codes: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(codes.len());
    codes
        .iter()
        .map(|c| c.as_ref().trim().to_ascii_uppercase())
        .filter(|c| seen.insert(c.clone()))
        .collect()
}

fn collect(resolutions: impl IntoIterator<Item = Resolution>) -> OverlayBatch {
    let mut batch = OverlayBatch::default();
    for r in resolutions {
        match r {
            Resolution::Region(region) => batch.regions.push(region),
            Resolution::Empty(code) => batch.empty.push(code),
            Resolution::Rejected(rejected) => batch.rejected.push(rejected),
        }
    }
    info!(
        "resolved worked areas: {} regions, {} empty, {} rejected",
        batch.regions.len(),
        batch.empty.len(),
        batch.rejected.len()
    );
    batch
}

/// Resolves every worked code against the grid and district store.
/// A bad code is logged and recorded in `rejected`; it never stops the batch.
pub fn resolve_worked_codes<S: AsRef<str>>(
    codes: &[S],
    spec: &GridSpec,
    districts: &DistrictStore,
    params: &EngineParams,
) -> OverlayBatch {
    let codes = unique_codes(codes);
    collect(
        codes
            .iter()
            .map(|code| resolve_one(code, spec, districts, params)),
    )
}

/// Same result as [`resolve_worked_codes`], computed in chunks on `pool`.
pub fn resolve_worked_codes_on<S: AsRef<str>>(
    pool: &TaskPool,
    codes: &[S],
    spec: &GridSpec,
    districts: &DistrictStore,
    params: &EngineParams,
) -> OverlayBatch {
    let codes = unique_codes(codes);
    let chunk_size = params.parallel_chunk_size.max(1);
    // scope returns task results in spawn order, so output follows input order
    let chunks: Vec<Vec<Resolution>> = pool.scope(|s| {
        for chunk in codes.chunks(chunk_size) {
            s.spawn(async move {
                chunk
                    .iter()
                    .map(|code| resolve_one(code, spec, districts, params))
                    .collect::<Vec<_>>()
            });
        }
    });
    collect(chunks.into_iter().flatten())
}

/// [`resolve_worked_codes_on`] using the shared compute pool.
pub fn resolve_worked_codes_parallel<S: AsRef<str>>(
    codes: &[S],
    spec: &GridSpec,
    districts: &DistrictStore,
    params: &EngineParams,
) -> OverlayBatch {
    let pool = ComputeTaskPool::get_or_init(TaskPool::default);
    resolve_worked_codes_on(pool, codes, spec, districts, params)
}
