//! Six-character grid locator (field, square, subsquare), e.g. `KM71OS`.
//!
//! Unrelated to award squares: longitude is split into 20° fields, 2°
//! squares and 5' subsquares, latitude into 10°, 1° and 2.5'.

use crate::error::AreaError;

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Field size, square size and subsquares per square for one axis.
struct Axis {
    field: f64,
    square: f64,
    subdivisions: f64,
}

const LNG_AXIS: Axis = Axis {
    field: 20.0,
    square: 2.0,
    subdivisions: 24.0,
};
const LAT_AXIS: Axis = Axis {
    field: 10.0,
    square: 1.0,
    subdivisions: 24.0,
};

/// Splits a non-negative offset into (field, square, subsquare) indices. The
/// top edge (lng 180 / lat 90) is folded into the last subsquare.
fn decompose(offset: f64, axis: &Axis) -> (usize, usize, usize) {
    let field = ((offset / axis.field).floor() as usize).min(17);
    let rest = offset - field as f64 * axis.field;
    let square = ((rest / axis.square).floor() as usize).min(9);
    let rest = rest - square as f64 * axis.square;
    let sub = ((rest / axis.square * axis.subdivisions).floor() as usize).min(23);
    (field, square, sub)
}

pub fn to_locator(lat: f64, lng: f64) -> Result<String, AreaError> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(AreaError::CoordinateOutOfRange { lat, lng });
    }
    let (lng_field, lng_square, lng_sub) = decompose(lng + 180.0, &LNG_AXIS);
    let (lat_field, lat_square, lat_sub) = decompose(lat + 90.0, &LAT_AXIS);

    let mut out = String::with_capacity(6);
    out.push(LETTERS[lng_field] as char);
    out.push(LETTERS[lat_field] as char);
    out.push(char::from(b'0' + lng_square as u8));
    out.push(char::from(b'0' + lat_square as u8));
    out.push(LETTERS[lng_sub] as char);
    out.push(LETTERS[lat_sub] as char);
    Ok(out)
}
