use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{COL_COUNT, EAST_LNG, NORTH_LAT, ROW_COUNT, SOUTH_LAT, WEST_LNG};
use crate::error::AreaError;

/// Bounding rectangle and cell counts of the award grid.
///
/// Rows run north to south, so `row_step()` is negative. Columns run west to
/// east and `col_step()` is positive. Loaded once and never mutated.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridSpec {
    pub north_lat: f64,
    pub south_lat: f64,
    pub west_lng: f64,
    pub east_lng: f64,
    pub row_count: usize,
    pub col_count: usize,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            north_lat: NORTH_LAT,
            south_lat: SOUTH_LAT,
            west_lng: WEST_LNG,
            east_lng: EAST_LNG,
            row_count: ROW_COUNT,
            col_count: COL_COUNT,
        }
    }
}

impl GridSpec {
    pub fn from_json(json: &str) -> Result<Self, AreaError> {
        let spec: GridSpec = serde_json::from_str(json)?;
        spec.check()?;
        Ok(spec)
    }

    /// Degrees latitude per row (negative).
    #[inline]
    pub fn row_step(&self) -> f64 {
        (self.south_lat - self.north_lat) / self.row_count as f64
    }

    /// Degrees longitude per column (positive).
    #[inline]
    pub fn col_step(&self) -> f64 {
        (self.east_lng - self.west_lng) / self.col_count as f64
    }

    #[inline]
    pub fn in_bounds(&self, cell: CellIndex) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.row_count
            && (cell.col as usize) < self.col_count
    }

    pub fn cell_count(&self) -> usize {
        self.row_count * self.col_count
    }

    /// Every cell, row-major from the north-west corner.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        (0..self.row_count).flat_map(move |row| {
            (0..self.col_count).map(move |col| CellIndex::new(row as i32, col as i32))
        })
    }

    /// Rejects specs whose steps have the wrong sign or whose counts cannot be
    /// addressed by the column alphabet and two-digit row numbers.
    fn check(&self) -> Result<(), AreaError> {
        let ok = self.row_count > 0
            && self.col_count > 0
            && self.row_count <= 100
            && self.col_count <= crate::config::COLUMN_ALPHABET.len()
            && self.row_step() < 0.0
            && self.col_step() > 0.0;
        if ok {
            Ok(())
        } else {
            Err(AreaError::Dataset(format!("invalid grid spec {self:?}")))
        }
    }
}

/// Row/column address of one grid square. Fields are signed because
/// `squares::to_cell_index` reports coordinates outside the grid as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellIndex {
    pub row: i32,
    pub col: i32,
}

impl CellIndex {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}
