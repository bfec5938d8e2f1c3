//! Coordinate <-> square code mapping.
//!
//! A square code is a column letter from the 25-letter alphabet followed by a
//! zero-padded two-digit row, e.g. `H08`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::COLUMN_ALPHABET;
use crate::error::AreaError;
use crate::geo::LatLng;
use crate::grid_spec::{CellIndex, GridSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SquareCode {
    pub col_letter: char,
    pub row: u8,
}

impl fmt::Display for SquareCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.col_letter, self.row)
    }
}

/// Letter for a column index, indexing the alphabet table directly.
#[inline]
pub fn column_letter(col: usize) -> Option<char> {
    COLUMN_ALPHABET.get(col).map(|&b| b as char)
}

#[inline]
pub fn column_index(letter: char) -> Option<usize> {
    if !letter.is_ascii() {
        return None;
    }
    COLUMN_ALPHABET.iter().position(|&b| b == letter as u8)
}

/// Unchecked projection of a coordinate onto the grid. Coordinates outside
/// the rectangle produce out-of-range indices; use [`locate`] to reject them.
pub fn to_cell_index(lat: f64, lng: f64, spec: &GridSpec) -> CellIndex {
    let row = ((lat - spec.north_lat) / spec.row_step()).floor() as i32;
    let col = ((lng - spec.west_lng) / spec.col_step()).floor() as i32;
    CellIndex::new(row, col)
}

/// Checked form of [`to_cell_index`]. Non-finite input is
/// `CoordinateOutOfRange`; a finite coordinate outside the rectangle is
/// `OutOfBoundsCell`.
pub fn locate(lat: f64, lng: f64, spec: &GridSpec) -> Result<CellIndex, AreaError> {
    if !lat.is_finite() || !lng.is_finite() {
        return Err(AreaError::CoordinateOutOfRange { lat, lng });
    }
    let cell = to_cell_index(lat, lng, spec);
    if spec.in_bounds(cell) {
        Ok(cell)
    } else {
        Err(AreaError::OutOfBoundsCell {
            row: cell.row as i64,
            col: cell.col as i64,
        })
    }
}

pub fn to_code(cell: CellIndex, spec: &GridSpec) -> Result<SquareCode, AreaError> {
    if !spec.in_bounds(cell) {
        return Err(AreaError::OutOfBoundsCell {
            row: cell.row as i64,
            col: cell.col as i64,
        });
    }
    let col_letter = column_letter(cell.col as usize).ok_or(AreaError::OutOfBoundsCell {
        row: cell.row as i64,
        col: cell.col as i64,
    })?;
    Ok(SquareCode {
        col_letter,
        row: cell.row as u8,
    })
}

/// Inverse of [`to_code`]. Accepts exactly one letter and two digits.
///
/// A row that is not two digits is `InvalidNumber`; two digits naming a row
/// past the last one (e.g. `H44`) is `RowOutOfRange`, not `InvalidNumber`.
pub fn from_code(code: &str, spec: &GridSpec) -> Result<CellIndex, AreaError> {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != 3 {
        return Err(AreaError::MalformedCode(code.to_string()));
    }
    let col = decode_letter(chars[0], spec)?;
    let row = decode_row(chars[1], chars[2], spec)?;
    Ok(CellIndex::new(row as i32, col as i32))
}

/// Column for a letter, rejecting letters outside the alphabet and letters
/// past the last grid column.
pub(crate) fn decode_letter(letter: char, spec: &GridSpec) -> Result<usize, AreaError> {
    match column_index(letter) {
        Some(col) if col < spec.col_count => Ok(col),
        _ => Err(AreaError::InvalidLetter(letter)),
    }
}

pub(crate) fn decode_row(tens: char, ones: char, spec: &GridSpec) -> Result<usize, AreaError> {
    let (Some(t), Some(o)) = (tens.to_digit(10), ones.to_digit(10)) else {
        return Err(AreaError::InvalidNumber(format!("{tens}{ones}")));
    };
    let row = (t * 10 + o) as usize;
    if row >= spec.row_count {
        return Err(AreaError::RowOutOfRange {
            row,
            row_count: spec.row_count,
        });
    }
    Ok(row)
}

/// Corners of a cell in NW, NE, SE, SW order.
pub fn cell_bounds(cell: CellIndex, spec: &GridSpec) -> [LatLng; 4] {
    let north = spec.north_lat + cell.row as f64 * spec.row_step();
    let south = north + spec.row_step();
    let west = spec.west_lng + cell.col as f64 * spec.col_step();
    let east = west + spec.col_step();
    [
        LatLng::new(north, west),
        LatLng::new(north, east),
        LatLng::new(south, east),
        LatLng::new(south, west),
    ]
}

pub fn cell_centroid(cell: CellIndex, spec: &GridSpec) -> LatLng {
    LatLng::new(
        spec.north_lat + (cell.row as f64 + 0.5) * spec.row_step(),
        spec.west_lng + (cell.col as f64 + 0.5) * spec.col_step(),
    )
}
