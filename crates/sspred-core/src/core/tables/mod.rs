//! # Tables Module
//!
//! Fixed per-residue lookup tables consulted by the prediction engine.
//!
//! ## Overview
//!
//! - **Propensity Table** ([`propensity`]) - Chou-Fasman helix, sheet and turn
//!   propensities plus the four positional bend probabilities used by the turn
//!   detector
//! - **Context Matrices** ([`context`]) - Helix, sheet and turn scores used by
//!   the GOR context-window method
//!
//! The literature values are compiled in and materialized once per process.
//! Replacement tables can be loaded from CSV (propensities) or TOML (context
//! matrices); once loaded, a table is never modified.
//!
//! ## Lookup Policy
//!
//! Every lookup is total. A residue code absent from a table resolves to a
//! documented zero-valued default instead of an error, so unknown residues take
//! part in window arithmetic as neutral zeros.

use thiserror::Error;

pub mod context;
pub mod propensity;

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid residue code '{code}' in '{path}': expected a single character")]
    InvalidResidueCode { path: String, code: String },
    #[error("Residue '{code}' is defined more than once in '{path}'")]
    DuplicateResidue { path: String, code: char },
}

pub(crate) fn parse_residue_code(path: &str, code: &str) -> Result<char, TableLoadError> {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TableLoadError::InvalidResidueCode {
            path: path.to_string(),
            code: code.to_string(),
        }),
    }
}
