//! Award progress: distinct areas and districts worked, measured against the
//! requirement for the operator's IARU region.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::area_code::parse_compound;
use crate::districts::DistrictStore;
use crate::engine_params::EngineParams;
use crate::error::AreaError;
use crate::grid_spec::GridSpec;
use crate::intersection::intersect_cell;
use crate::squares::{to_code, SquareCode};

/// Award category, keyed by the IARU region the operator gave in their
/// profile. Region 0 is an operator inside the award area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwardCategory {
    Home,
    Region1,
    Region2,
    Region3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub areas: usize,
    pub districts: usize,
}

impl AwardCategory {
    pub fn from_region(region: u8) -> Option<Self> {
        match region {
            0 => Some(AwardCategory::Home),
            1 => Some(AwardCategory::Region1),
            2 => Some(AwardCategory::Region2),
            3 => Some(AwardCategory::Region3),
            _ => None,
        }
    }

    /// Home has no fixed requirement.
    pub fn requirement(self) -> Requirement {
        match self {
            AwardCategory::Home => Requirement {
                areas: 0,
                districts: 0,
            },
            AwardCategory::Region1 => Requirement {
                areas: 150,
                districts: 18,
            },
            AwardCategory::Region2 => Requirement {
                areas: 100,
                districts: 13,
            },
            AwardCategory::Region3 => Requirement {
                areas: 50,
                districts: 13,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AwardProgress {
    /// Canonical compound codes.
    pub areas: BTreeSet<String>,
    pub districts: BTreeSet<String>,
    pub squares: BTreeSet<SquareCode>,
    /// Codes that parsed but whose square does not overlap its district.
    /// They count toward nothing.
    pub no_overlap: Vec<String>,
    /// Codes that failed to parse; they count toward nothing.
    pub rejected: Vec<(String, AreaError)>,
}

impl AwardProgress {
    /// Counts each distinct code whose square overlaps its district.
    pub fn from_codes<S: AsRef<str>>(
        codes: &[S],
        spec: &GridSpec,
        districts: &DistrictStore,
        params: &EngineParams,
    ) -> Self {
        let mut progress = AwardProgress::default();
        for code in codes {
            let code = code.as_ref().trim().to_ascii_uppercase();
            if progress.areas.contains(&code) || progress.no_overlap.contains(&code) {
                continue;
            }
            let parsed = parse_compound(&code, spec, districts)
                .and_then(|(cell, district)| Ok((cell, district, to_code(cell, spec)?)));
            match parsed {
                Ok((cell, district, square)) => {
                    if intersect_cell(cell, district, spec, params).is_empty() {
                        progress.no_overlap.push(code);
                        continue;
                    }
                    progress.squares.insert(square);
                    progress.districts.insert(district.name.clone());
                    progress.areas.insert(code);
                }
                Err(e) => progress.rejected.push((code, e)),
            }
        }
        progress
    }

    /// Grid squares with no worked area, in row-major order.
    pub fn missing_squares(&self, spec: &GridSpec) -> Vec<SquareCode> {
        spec.cells()
            .filter_map(|cell| to_code(cell, spec).ok())
            .filter(|square| !self.squares.contains(square))
            .collect()
    }

    pub fn meets(&self, requirement: Requirement) -> bool {
        self.areas.len() >= requirement.areas && self.districts.len() >= requirement.districts
    }

    /// Lower of the area and district ratios, clamped to `[0, 1]`. A zero
    /// requirement counts as met.
    pub fn completion(&self, requirement: Requirement) -> f64 {
        fn ratio(have: usize, need: usize) -> f64 {
            if need == 0 {
                1.0
            } else {
                (have as f64 / need as f64).clamp(0.0, 1.0)
            }
        }
        ratio(self.areas.len(), requirement.areas)
            .min(ratio(self.districts.len(), requirement.districts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::fixture_store;

    fn progress_of(codes: &[&str]) -> AwardProgress {
        AwardProgress::from_codes(
            codes,
            &GridSpec::default(),
            &fixture_store(),
            &EngineParams::default(),
        )
    }

    #[test]
    fn test_requirements_by_region() {
        assert_eq!(
            AwardCategory::from_region(1).map(AwardCategory::requirement),
            Some(Requirement {
                areas: 150,
                districts: 18
            })
        );
        assert_eq!(
            AwardCategory::from_region(3).map(|c| c.requirement().areas),
            Some(50)
        );
        assert_eq!(AwardCategory::from_region(4), None);
        assert_eq!(AwardCategory::Home.requirement().districts, 0);
    }

    #[test]
    fn test_counts_distinct_areas_and_districts() {
        let progress = progress_of(&["H08HF", "h08hf", "G08HF", "E25BS", "C15TA", "I08HF", "H08"]);
        assert_eq!(progress.areas.len(), 4);
        let districts: Vec<&str> = progress.districts.iter().map(String::as_str).collect();
        assert_eq!(districts, vec!["BS", "HF", "TA"]);
        assert_eq!(progress.squares.len(), 4);
        assert_eq!(progress.rejected.len(), 2);
        assert!(progress.no_overlap.is_empty());
    }

    #[test]
    fn test_code_without_overlap_counts_toward_nothing() {
        // A00 is far from HF; H08 lies in HF, not BS.
        let progress = progress_of(&["A00HF", "H08BS", "a00hf"]);
        assert!(progress.areas.is_empty());
        assert!(progress.districts.is_empty());
        assert!(progress.squares.is_empty());
        assert!(progress.rejected.is_empty());
        assert_eq!(progress.no_overlap, vec!["A00HF".to_string(), "H08BS".to_string()]);
    }

    #[test]
    fn test_missing_squares() {
        let spec = GridSpec::default();
        let progress = progress_of(&["F06HF", "H08HF"]);
        let missing = progress.missing_squares(&spec);
        assert_eq!(missing.len(), spec.cell_count() - 2);
        assert_eq!(missing[0].to_string(), "A00");
        assert!(!missing.iter().any(|s| s.to_string() == "H08" || s.to_string() == "F06"));
    }

    #[test]
    fn test_completion_is_clamped() {
        let progress = progress_of(&["H08HF", "C15TA"]);
        let req = Requirement {
            areas: 4,
            districts: 4,
        };
        assert!((progress.completion(req) - 0.5).abs() < 1e-12);
        assert!(!progress.meets(req));

        let easy = Requirement {
            areas: 1,
            districts: 1,
        };
        assert_eq!(progress.completion(easy), 1.0);
        assert!(progress.meets(easy));
        assert_eq!(
            AwardProgress::default().completion(AwardCategory::Home.requirement()),
            1.0
        );
        assert_eq!(
            AwardProgress::default().completion(AwardCategory::Region2.requirement()),
            0.0
        );
    }
}
