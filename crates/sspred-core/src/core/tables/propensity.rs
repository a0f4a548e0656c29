use super::{TableLoadError, parse_residue_code};
use crate::core::models::residue::Residue;
use once_cell::sync::Lazy;
use phf::{Map, phf_map};
use serde::Deserialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AminoAcidPropensity {
    pub alpha_helix: f64,
    pub beta_sheet: f64,
    pub turn: f64,
}

impl AminoAcidPropensity {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(alpha_helix: f64, beta_sheet: f64, turn: f64) -> Self {
        Self {
            alpha_helix,
            beta_sheet,
            turn,
        }
    }
}

/// Probability of a residue occupying each of the four positions of a
/// beta-turn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BendProbability {
    pub positions: [f64; 4],
}

impl BendProbability {
    pub const ZERO: Self = Self::new([0.0; 4]);

    pub const fn new(positions: [f64; 4]) -> Self {
        Self { positions }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResidueParameters {
    pub propensity: AminoAcidPropensity,
    pub bend: BendProbability,
}

impl ResidueParameters {
    pub const ZERO: Self = Self {
        propensity: AminoAcidPropensity::ZERO,
        bend: BendProbability::ZERO,
    };

    const fn new(alpha_helix: f64, beta_sheet: f64, turn: f64, bend: [f64; 4]) -> Self {
        Self {
            propensity: AminoAcidPropensity::new(alpha_helix, beta_sheet, turn),
            bend: BendProbability::new(bend),
        }
    }
}

/// Returned for every residue code a [`PropensityTable`] does not contain.
///
/// All fields are zero: an unknown residue counts as a helix and sheet breaker,
/// adds nothing to window sums and zeroes the turn detector's positional
/// product. This mirrors the classical reference tables rather than any
/// biological rationale.
pub const UNKNOWN_RESIDUE_PARAMETERS: ResidueParameters = ResidueParameters::ZERO;

// Chou & Fasman (1978) conformational parameters: (P(a), P(b), P(turn)) followed
// by the bend frequencies f(i), f(i+1), f(i+2), f(i+3).
static CHOU_FASMAN_PARAMETERS: Map<char, ResidueParameters> = phf_map! {
    'A' => ResidueParameters::new(1.42, 0.83, 0.66, [0.060, 0.076, 0.035, 0.058]),
    'R' => ResidueParameters::new(0.98, 0.93, 0.95, [0.070, 0.106, 0.099, 0.085]),
    'N' => ResidueParameters::new(0.67, 0.89, 1.56, [0.161, 0.083, 0.191, 0.091]),
    'D' => ResidueParameters::new(1.01, 0.54, 1.46, [0.147, 0.110, 0.179, 0.081]),
    'C' => ResidueParameters::new(0.70, 1.19, 1.19, [0.149, 0.050, 0.117, 0.128]),
    'Q' => ResidueParameters::new(1.11, 1.10, 0.98, [0.074, 0.098, 0.037, 0.098]),
    'E' => ResidueParameters::new(1.51, 0.37, 0.74, [0.056, 0.060, 0.077, 0.064]),
    'G' => ResidueParameters::new(0.57, 0.75, 1.64, [0.102, 0.085, 0.190, 0.152]),
    'H' => ResidueParameters::new(1.00, 0.87, 0.95, [0.140, 0.047, 0.093, 0.054]),
    'I' => ResidueParameters::new(1.08, 1.60, 0.47, [0.043, 0.034, 0.013, 0.056]),
    'L' => ResidueParameters::new(1.21, 1.30, 0.59, [0.061, 0.025, 0.036, 0.070]),
    'K' => ResidueParameters::new(1.16, 0.74, 1.01, [0.055, 0.115, 0.072, 0.095]),
    'M' => ResidueParameters::new(1.45, 1.05, 0.60, [0.068, 0.082, 0.014, 0.055]),
    'F' => ResidueParameters::new(1.13, 1.38, 0.60, [0.059, 0.041, 0.065, 0.065]),
    'P' => ResidueParameters::new(0.57, 0.55, 1.52, [0.102, 0.301, 0.034, 0.068]),
    'S' => ResidueParameters::new(0.77, 0.75, 1.43, [0.120, 0.139, 0.125, 0.106]),
    'T' => ResidueParameters::new(0.83, 1.19, 0.96, [0.086, 0.108, 0.065, 0.079]),
    'W' => ResidueParameters::new(1.08, 1.37, 0.96, [0.089, 0.073, 0.064, 0.167]),
    'Y' => ResidueParameters::new(0.69, 1.47, 1.14, [0.082, 0.065, 0.114, 0.125]),
    'V' => ResidueParameters::new(1.06, 1.70, 0.50, [0.062, 0.048, 0.028, 0.053]),
};

static CHOU_FASMAN: Lazy<PropensityTable> = Lazy::new(|| {
    CHOU_FASMAN_PARAMETERS
        .entries()
        .map(|(code, params)| (*code, *params))
        .collect()
});

#[derive(Debug, Deserialize)]
struct PropensityRecord {
    code: String,
    alpha_helix: f64,
    beta_sheet: f64,
    turn: f64,
    bend_0: f64,
    bend_1: f64,
    bend_2: f64,
    bend_3: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropensityTable {
    entries: HashMap<char, ResidueParameters>,
}

impl PropensityTable {
    /// The built-in Chou-Fasman table, constructed on first use.
    pub fn chou_fasman() -> &'static Self {
        &CHOU_FASMAN
    }

    /// Loads a table from a CSV file with the header
    /// `code,alpha_helix,beta_sheet,turn,bend_0,bend_1,bend_2,bend_3`.
    pub fn load(path: &Path) -> Result<Self, TableLoadError> {
        let path_str = path.to_string_lossy().to_string();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| TableLoadError::Csv {
                path: path_str.clone(),
                source: e,
            })?;

        let mut entries = HashMap::new();
        for result in reader.deserialize::<PropensityRecord>() {
            let record = result.map_err(|e| TableLoadError::Csv {
                path: path_str.clone(),
                source: e,
            })?;
            let code = parse_residue_code(&path_str, &record.code)?;
            let params = ResidueParameters::new(
                record.alpha_helix,
                record.beta_sheet,
                record.turn,
                [record.bend_0, record.bend_1, record.bend_2, record.bend_3],
            );
            match entries.entry(code) {
                Entry::Occupied(_) => {
                    return Err(TableLoadError::DuplicateResidue {
                        path: path_str,
                        code,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(params);
                }
            }
        }
        Ok(Self { entries })
    }

    /// Parameters for `residue`, or [`UNKNOWN_RESIDUE_PARAMETERS`] when the code
    /// is not in the table.
    pub fn parameters(&self, residue: Residue) -> &ResidueParameters {
        self.entries
            .get(&residue.code())
            .unwrap_or(&UNKNOWN_RESIDUE_PARAMETERS)
    }

    pub fn propensity(&self, residue: Residue) -> &AminoAcidPropensity {
        &self.parameters(residue).propensity
    }

    pub fn bend(&self, residue: Residue) -> &BendProbability {
        &self.parameters(residue).bend
    }

    pub fn contains(&self, residue: Residue) -> bool {
        self.entries.contains_key(&residue.code())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(char, ResidueParameters)> for PropensityTable {
    fn from_iter<I: IntoIterator<Item = (char, ResidueParameters)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "code,alpha_helix,beta_sheet,turn,bend_0,bend_1,bend_2,bend_3";

    #[test]
    fn built_in_table_covers_the_twenty_standard_residues() {
        let table = PropensityTable::chou_fasman();
        assert_eq!(table.len(), 20);
        for code in "ACDEFGHIKLMNPQRSTVWY".chars() {
            assert!(table.contains(Residue::new(code)), "missing {}", code);
        }
    }

    #[test]
    fn built_in_table_returns_literature_values() {
        let table = PropensityTable::chou_fasman();
        assert_eq!(
            *table.propensity(Residue::new('E')),
            AminoAcidPropensity::new(1.51, 0.37, 0.74)
        );
        assert_eq!(
            table.bend(Residue::new('P')).positions,
            [0.102, 0.301, 0.034, 0.068]
        );
    }

    #[test]
    fn unknown_codes_resolve_to_the_zero_default() {
        let table = PropensityTable::chou_fasman();
        assert_eq!(*table.parameters(Residue::new('X')), UNKNOWN_RESIDUE_PARAMETERS);
        assert_eq!(*table.parameters(Residue::new('a')), ResidueParameters::ZERO);
        assert!(!table.contains(Residue::new('a')));
    }

    #[test]
    fn load_succeeds_with_valid_csv() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("table.csv");
        fs::write(
            &file_path,
            format!("{HEADER}\nA, 1.5, 0.5, 0.25, 0.1, 0.2, 0.3, 0.4\nX,1.0,1.0,1.0,0.0,0.0,0.0,0.0\n"),
        )
        .unwrap();

        let table = PropensityTable::load(&file_path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            *table.parameters(Residue::new('A')),
            ResidueParameters::new(1.5, 0.5, 0.25, [0.1, 0.2, 0.3, 0.4])
        );
        assert!(table.contains(Residue::new('X')));
        assert_eq!(*table.parameters(Residue::new('G')), UNKNOWN_RESIDUE_PARAMETERS);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = PropensityTable::load(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(TableLoadError::Csv { .. })));
    }

    #[test]
    fn load_fails_for_malformed_csv() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("malformed.csv");
        fs::write(&file_path, format!("{HEADER}\nA,not-a-number,1,1,1,1,1,1\n")).unwrap();
        let result = PropensityTable::load(&file_path);
        assert!(matches!(result, Err(TableLoadError::Csv { .. })));
    }

    #[test]
    fn load_fails_for_multi_character_code() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("three_letter.csv");
        fs::write(&file_path, format!("{HEADER}\nALA,1,1,1,1,1,1,1\n")).unwrap();
        let result = PropensityTable::load(&file_path);
        assert!(matches!(result, Err(TableLoadError::InvalidResidueCode { .. })));
    }

    #[test]
    fn load_fails_for_duplicate_code() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("duplicate.csv");
        fs::write(
            &file_path,
            format!("{HEADER}\nA,1,1,1,1,1,1,1\nA,2,2,2,2,2,2,2\n"),
        )
        .unwrap();
        let result = PropensityTable::load(&file_path);
        assert!(matches!(
            result,
            Err(TableLoadError::DuplicateResidue { code: 'A', .. })
        ));
    }
}
