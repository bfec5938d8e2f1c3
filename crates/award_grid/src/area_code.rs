//! Compound area codes: a square code followed by a district suffix, e.g. `H08HF`.
//!
//! The canonical form is five characters, uppercase, matching
//! `[A-Z]\d{2}[A-Z]{2}`. The award rules print the same code as `H-08-HF`;
//! [`normalize`] folds that display form back to canonical.

use crate::config::NO_DISTRICT_SUFFIX;
use crate::districts::{District, DistrictStore};
use crate::error::AreaError;
use crate::geo::LatLng;
use crate::grid_spec::{CellIndex, GridSpec};
use crate::membership::district_containing;
use crate::squares::{decode_letter, decode_row, locate, to_code};

/// Uppercases and drops hyphens and whitespace.
pub fn normalize(code: &str) -> String {
    code.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn matches_shape(chars: &[char]) -> bool {
    chars.len() == 5
        && chars[0].is_ascii_uppercase()
        && chars[1].is_ascii_digit()
        && chars[2].is_ascii_digit()
        && chars[3].is_ascii_uppercase()
        && chars[4].is_ascii_uppercase()
}

/// Parses a compound code into its cell and district.
///
/// Letters are case-insensitive. Checks run in order: shape
/// (`MalformedCode`), column letter (`InvalidLetter`), row
/// (`RowOutOfRange`), district (`UnknownDistrict`).
pub fn parse_compound<'a>(
    code: &str,
    spec: &GridSpec,
    districts: &'a DistrictStore,
) -> Result<(CellIndex, &'a District), AreaError> {
    let upper = code.to_ascii_uppercase();
    let chars: Vec<char> = upper.chars().collect();
    if !matches_shape(&chars) {
        return Err(AreaError::MalformedCode(code.to_string()));
    }
    let col = decode_letter(chars[0], spec)?;
    let row = decode_row(chars[1], chars[2], spec)?;
    let suffix: String = chars[3..].iter().collect();
    let district = districts
        .get(&suffix)
        .ok_or(AreaError::UnknownDistrict(suffix))?;
    Ok((CellIndex::new(row as i32, col as i32), district))
}

/// [`parse_compound`] after [`normalize`], for manual entry such as `h-08-hf`.
pub fn parse_lenient<'a>(
    code: &str,
    spec: &GridSpec,
    districts: &'a DistrictStore,
) -> Result<(CellIndex, &'a District), AreaError> {
    parse_compound(&normalize(code), spec, districts)
}

/// Canonical form, e.g. `H08HF`.
pub fn format(cell: CellIndex, district: &District, spec: &GridSpec) -> Result<String, AreaError> {
    let square = to_code(cell, spec)?;
    Ok(format!("{square}{}", district.name.to_ascii_uppercase()))
}

/// Display form used by the award rules, e.g. `H-08-HF`.
pub fn format_display(
    cell: CellIndex,
    district: &District,
    spec: &GridSpec,
) -> Result<String, AreaError> {
    let square = to_code(cell, spec)?;
    Ok(format!(
        "{}-{:02}-{}",
        square.col_letter,
        square.row,
        district.name.to_ascii_uppercase()
    ))
}

/// Compound code for a coordinate. The suffix is `XX` when no district
/// contains the point.
pub fn area_code_at(
    lat: f64,
    lng: f64,
    spec: &GridSpec,
    districts: &DistrictStore,
) -> Result<String, AreaError> {
    let square = to_code(locate(lat, lng, spec)?, spec)?;
    let suffix = district_containing(LatLng::new(lat, lng), districts)
        .map_or(NO_DISTRICT_SUFFIX, |d| d.name.as_str());
    Ok(format!("{square}{suffix}"))
}

/// Square part and district part of a canonical code, without validation
/// beyond length.
pub fn split(code: &str) -> Option<(&str, &str)> {
    if code.len() != 5 || !code.is_ascii() {
        return None;
    }
    Some(code.split_at(3))
}
