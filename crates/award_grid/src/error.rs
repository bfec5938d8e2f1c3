use thiserror::Error;

/// Recoverable failures raised while mapping coordinates, parsing area codes
/// or loading district data. None of these is fatal: batch callers skip the
/// offending input and carry on with the rest.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AreaError {
    /// Input does not have the `[A-Z]\d{2}[A-Z]{2}` shape (or `[A-Z]\d{2}` for squares).
    #[error("malformed area code {0:?}")]
    MalformedCode(String),
    /// Column letter is not part of the 25-letter alphabet ('I' included).
    #[error("invalid column letter {0:?}")]
    InvalidLetter(char),
    /// Row part is not exactly two ASCII digits.
    #[error("invalid row number {0:?}")]
    InvalidNumber(String),
    #[error("row {row} outside 0..{row_count}")]
    RowOutOfRange { row: usize, row_count: usize },
    #[error("unknown district {0:?}")]
    UnknownDistrict(String),
    #[error("coordinate ({lat}, {lng}) outside the valid range")]
    CoordinateOutOfRange { lat: f64, lng: f64 },
    /// Coordinate maps to a row/column outside the grid rectangle.
    #[error("coordinate maps to cell ({row}, {col}) outside the grid")]
    OutOfBoundsCell { row: i64, col: i64 },
    #[error("degenerate polygon for {0}")]
    DegeneratePolygon(String),
    #[error("district dataset: {0}")]
    Dataset(String),
}

impl From<serde_json::Error> for AreaError {
    fn from(e: serde_json::Error) -> Self {
        AreaError::Dataset(e.to_string())
    }
}

impl AreaError {
    /// Parse-stage failures, as opposed to geometry or dataset problems.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            AreaError::MalformedCode(_)
                | AreaError::InvalidLetter(_)
                | AreaError::InvalidNumber(_)
                | AreaError::RowOutOfRange { .. }
                | AreaError::UnknownDistrict(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_input() {
        let e = AreaError::InvalidLetter('I');
        assert_eq!(e.to_string(), "invalid column letter 'I'");
        let e = AreaError::RowOutOfRange {
            row: 44,
            row_count: 44,
        };
        assert_eq!(e.to_string(), "row 44 outside 0..44");
    }

    #[test]
    fn test_parse_errors_are_distinguished() {
        assert!(AreaError::UnknownDistrict("ZZ".into()).is_parse_error());
        assert!(!AreaError::DegeneratePolygon("HF".into()).is_parse_error());
        assert!(!AreaError::OutOfBoundsCell { row: -1, col: 3 }.is_parse_error());
    }

    #[test]
    fn test_json_error_converts_to_dataset() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let e: AreaError = err.into();
        assert!(matches!(e, AreaError::Dataset(_)));
    }
}
