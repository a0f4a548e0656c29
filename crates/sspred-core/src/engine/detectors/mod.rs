//! Fixed-length window detectors of the Chou-Fasman method.
//!
//! Each detector is a pure predicate over an exact-length window (`&[Residue; N]`)
//! and a [`PropensityTable`]. The `predict_*` functions are checked entry points
//! over text that use the built-in table and reject windows of the wrong length.

pub mod helix;
pub mod sheet;
pub mod turn;

use crate::core::models::residue::Residue;
use crate::core::models::sequence::Sequence;
use crate::core::tables::propensity::PropensityTable;
use crate::engine::error::EngineError;

pub use helix::{HELIX_WINDOW, is_helix};
pub use sheet::{SHEET_WINDOW, is_sheet};
pub use turn::{TURN_WINDOW, is_turn};

pub(crate) fn exact_window<'a, const N: usize>(
    detector: &'static str,
    residues: &'a [Residue],
) -> Result<&'a [Residue; N], EngineError> {
    residues
        .try_into()
        .map_err(|_| EngineError::WindowLength {
            detector,
            expected: N,
            actual: residues.len(),
        })
}

pub fn predict_helix(segment: &str) -> Result<bool, EngineError> {
    let sequence = Sequence::from(segment);
    let window = exact_window::<HELIX_WINDOW>("Helix", sequence.residues())?;
    Ok(is_helix(window, PropensityTable::chou_fasman()))
}

pub fn predict_beta_sheet(segment: &str) -> Result<bool, EngineError> {
    let sequence = Sequence::from(segment);
    let window = exact_window::<SHEET_WINDOW>("Sheet", sequence.residues())?;
    Ok(is_sheet(window, PropensityTable::chou_fasman()))
}

pub fn predict_turn(segment: &str) -> Result<bool, EngineError> {
    let sequence = Sequence::from(segment);
    let window = exact_window::<TURN_WINDOW>("Turn", sequence.residues())?;
    Ok(is_turn(window, PropensityTable::chou_fasman()))
}
