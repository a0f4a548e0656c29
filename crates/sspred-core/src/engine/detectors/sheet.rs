use crate::core::models::residue::Residue;
use crate::core::tables::propensity::PropensityTable;

pub const SHEET_WINDOW: usize = 5;

const FORMER_MIN: f64 = 1.0;
const BREAKER_MAX: f64 = 0.75;

const MIN_AVERAGE_PROPENSITY: f64 = 1.05;
const MAX_BREAKERS: usize = 1;

/// Chou-Fasman beta-sheet test over a five-residue window.
///
/// Formers (`P(b) >= 1.0`) and breakers (`P(b) <= 0.75`) contribute their
/// propensity to the sum; residues in between are ignored. Only breakers are
/// counted: the verdict depends on the average and the breaker count, so no
/// former tally is kept.
pub fn is_sheet(window: &[Residue; SHEET_WINDOW], table: &PropensityTable) -> bool {
    let mut propensity_sum = 0.0;
    let mut breakers = 0;

    for &residue in window {
        let p = table.propensity(residue).beta_sheet;
        if p >= FORMER_MIN {
            propensity_sum += p;
        } else if p <= BREAKER_MAX {
            propensity_sum += p;
            breakers += 1;
        }
    }

    let average = propensity_sum / SHEET_WINDOW as f64;
    average >= MIN_AVERAGE_PROPENSITY && breakers <= MAX_BREAKERS
}
