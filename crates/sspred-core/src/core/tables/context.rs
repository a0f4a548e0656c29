use super::{TableLoadError, parse_residue_code};
use crate::core::models::residue::Residue;
use crate::core::models::structure::SecondaryStructure;
use once_cell::sync::Lazy;
use phf::{Map, phf_map};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Score contributed by a residue code absent from a context matrix.
pub const UNKNOWN_RESIDUE_SCORE: f64 = 0.0;

// Simplified GOR matrices. Only A, C, D, E and F carry values; every other
// residue scores UNKNOWN_RESIDUE_SCORE.
static GOR_HELIX: Map<char, f64> = phf_map! {
    'A' => 1.2, 'C' => 0.5, 'D' => 0.8, 'E' => 1.3, 'F' => 0.9,
};

static GOR_SHEET: Map<char, f64> = phf_map! {
    'A' => 0.8, 'C' => 1.3, 'D' => 0.7, 'E' => 0.6, 'F' => 1.4,
};

static GOR_TURN: Map<char, f64> = phf_map! {
    'A' => 0.9, 'C' => 0.7, 'D' => 1.4, 'E' => 0.8, 'F' => 0.5,
};

static GOR: Lazy<ContextMatrixTable> = Lazy::new(|| {
    let collect = |matrix: &Map<char, f64>| -> HashMap<char, f64> {
        matrix.entries().map(|(code, score)| (*code, *score)).collect()
    };
    ContextMatrixTable {
        helix: collect(&GOR_HELIX),
        sheet: collect(&GOR_SHEET),
        turn: collect(&GOR_TURN),
    }
});

/// The three classes scored by the context method. Coil is never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextClass {
    Helix,
    Sheet,
    Turn,
}

impl ContextClass {
    pub const fn structure(self) -> SecondaryStructure {
        match self {
            ContextClass::Helix => SecondaryStructure::Helix,
            ContextClass::Sheet => SecondaryStructure::Sheet,
            ContextClass::Turn => SecondaryStructure::Turn,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContextMatrixFile {
    #[serde(default)]
    helix: HashMap<String, f64>,
    #[serde(default)]
    sheet: HashMap<String, f64>,
    #[serde(default)]
    turn: HashMap<String, f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMatrixTable {
    helix: HashMap<char, f64>,
    sheet: HashMap<char, f64>,
    turn: HashMap<char, f64>,
}

impl ContextMatrixTable {
    pub fn new(
        helix: HashMap<char, f64>,
        sheet: HashMap<char, f64>,
        turn: HashMap<char, f64>,
    ) -> Self {
        Self { helix, sheet, turn }
    }

    /// The built-in simplified GOR matrices, constructed on first use.
    pub fn gor() -> &'static Self {
        &GOR
    }

    /// Loads matrices from a TOML file with optional `[helix]`, `[sheet]` and
    /// `[turn]` tables, each mapping a one-letter code to a score.
    pub fn load(path: &Path) -> Result<Self, TableLoadError> {
        let path_str = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| TableLoadError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        let file: ContextMatrixFile =
            toml::from_str(&content).map_err(|e| TableLoadError::Toml {
                path: path_str.clone(),
                source: e,
            })?;

        let convert = |matrix: HashMap<String, f64>| -> Result<HashMap<char, f64>, TableLoadError> {
            matrix
                .into_iter()
                .map(|(code, score)| Ok((parse_residue_code(&path_str, &code)?, score)))
                .collect()
        };
        Ok(Self {
            helix: convert(file.helix)?,
            sheet: convert(file.sheet)?,
            turn: convert(file.turn)?,
        })
    }

    fn matrix(&self, class: ContextClass) -> &HashMap<char, f64> {
        match class {
            ContextClass::Helix => &self.helix,
            ContextClass::Sheet => &self.sheet,
            ContextClass::Turn => &self.turn,
        }
    }

    /// Score of `residue` in the `class` matrix, or [`UNKNOWN_RESIDUE_SCORE`]
    /// when the code is absent.
    pub fn score(&self, class: ContextClass, residue: Residue) -> f64 {
        self.matrix(class)
            .get(&residue.code())
            .copied()
            .unwrap_or(UNKNOWN_RESIDUE_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn built_in_matrices_hold_the_simplified_gor_values() {
        let table = ContextMatrixTable::gor();
        assert_eq!(table.score(ContextClass::Helix, Residue::new('E')), 1.3);
        assert_eq!(table.score(ContextClass::Sheet, Residue::new('F')), 1.4);
        assert_eq!(table.score(ContextClass::Turn, Residue::new('D')), 1.4);
    }

    #[test]
    fn residues_outside_the_matrices_score_zero() {
        let table = ContextMatrixTable::gor();
        for class in [ContextClass::Helix, ContextClass::Sheet, ContextClass::Turn] {
            assert_eq!(table.score(class, Residue::new('G')), UNKNOWN_RESIDUE_SCORE);
            assert_eq!(table.score(class, Residue::new('a')), UNKNOWN_RESIDUE_SCORE);
        }
    }

    #[test]
    fn context_class_maps_to_secondary_structure() {
        assert_eq!(ContextClass::Helix.structure(), SecondaryStructure::Helix);
        assert_eq!(ContextClass::Sheet.structure(), SecondaryStructure::Sheet);
        assert_eq!(ContextClass::Turn.structure(), SecondaryStructure::Turn);
    }

    #[test]
    fn load_succeeds_with_valid_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("gor.toml");
        fs::write(
            &file_path,
            r#"
            [helix]
            A = 2.0
            G = 0.1

            [sheet]
            V = 1.5
            "#,
        )
        .unwrap();

        let table = ContextMatrixTable::load(&file_path).unwrap();
        assert_eq!(table.score(ContextClass::Helix, Residue::new('A')), 2.0);
        assert_eq!(table.score(ContextClass::Helix, Residue::new('G')), 0.1);
        assert_eq!(table.score(ContextClass::Sheet, Residue::new('V')), 1.5);
        assert_eq!(table.score(ContextClass::Turn, Residue::new('A')), 0.0);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = ContextMatrixTable::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(TableLoadError::Io { .. })));
    }

    #[test]
    fn load_fails_for_unknown_section() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("coil.toml");
        fs::write(&file_path, "[coil]\nA = 1.0\n").unwrap();
        let result = ContextMatrixTable::load(&file_path);
        assert!(matches!(result, Err(TableLoadError::Toml { .. })));
    }

    #[test]
    fn load_fails_for_multi_character_code() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bad_code.toml");
        fs::write(&file_path, "[turn]\nGLY = 1.0\n").unwrap();
        let result = ContextMatrixTable::load(&file_path);
        assert!(matches!(result, Err(TableLoadError::InvalidResidueCode { .. })));
    }
}
