use crate::core::models::residue::Residue;
use crate::core::tables::propensity::PropensityTable;

pub const TURN_WINDOW: usize = 4;

const MIN_POSITIONAL_PRODUCT: f64 = 0.000075;
const MAX_WEAK_AVERAGE_TURN: f64 = 1.0;
const MIN_CENTRAL_TURN: f64 = 0.5;

/// Chou-Fasman beta-turn test over a four-residue window.
///
/// Window position `i` is weighted by the residue's bend probability at slot
/// `i`. A window is rejected when the positional product is below 7.5e-5 while
/// the mean turn propensity is at most 1.0, or when either central residue
/// has a turn propensity below 0.5.
pub fn is_turn(window: &[Residue; TURN_WINDOW], table: &PropensityTable) -> bool {
    let mut positional_product = 1.0;
    let mut turn_sum = 0.0;

    for (slot, &residue) in window.iter().enumerate() {
        let params = table.parameters(residue);
        positional_product *= params.bend.positions[slot];
        turn_sum += params.propensity.turn;
    }
    let average_turn = turn_sum / TURN_WINDOW as f64;

    if positional_product < MIN_POSITIONAL_PRODUCT && average_turn <= MAX_WEAK_AVERAGE_TURN {
        return false;
    }

    window[1..3]
        .iter()
        .all(|&residue| table.propensity(residue).turn >= MIN_CENTRAL_TURN)
}
