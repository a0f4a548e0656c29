use super::detectors::exact_window;
use super::error::EngineError;
use crate::core::models::residue::Residue;
use crate::core::models::sequence::Sequence;
use crate::core::models::structure::SecondaryStructure;
use crate::core::tables::propensity::PropensityTable;

pub const OVERLAP_WINDOW: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapClass {
    Helix,
    Sheet,
    Turn,
    /// No class has a strictly largest sum.
    Undefined,
}

impl OverlapClass {
    /// The label to write, or `None` when the window must not override
    /// existing labels.
    pub const fn structure(self) -> Option<SecondaryStructure> {
        match self {
            OverlapClass::Helix => Some(SecondaryStructure::Helix),
            OverlapClass::Sheet => Some(SecondaryStructure::Sheet),
            OverlapClass::Turn => Some(SecondaryStructure::Turn),
            OverlapClass::Undefined => None,
        }
    }
}

/// Picks the dominant class of a four-residue window by summed propensity.
///
/// Turn wins outright when its sum exceeds both others; otherwise helix and
/// sheet are compared, and a tie between them is [`OverlapClass::Undefined`].
pub fn resolve_overlap(window: &[Residue; OVERLAP_WINDOW], table: &PropensityTable) -> OverlapClass {
    let (mut helix, mut sheet, mut turn) = (0.0, 0.0, 0.0);
    for &residue in window {
        let p = table.propensity(residue);
        helix += p.alpha_helix;
        sheet += p.beta_sheet;
        turn += p.turn;
    }

    if turn > helix && turn > sheet {
        OverlapClass::Turn
    } else if helix > sheet {
        OverlapClass::Helix
    } else if sheet > helix {
        OverlapClass::Sheet
    } else {
        OverlapClass::Undefined
    }
}

/// Checked entry point over text using the built-in Chou-Fasman table.
pub fn classify_overlap(segment: &str) -> Result<OverlapClass, EngineError> {
    let sequence = Sequence::from(segment);
    let window = exact_window::<OVERLAP_WINDOW>("Overlap", sequence.residues())?;
    Ok(resolve_overlap(window, PropensityTable::chou_fasman()))
}
