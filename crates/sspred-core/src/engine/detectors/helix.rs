use crate::core::models::residue::Residue;
use crate::core::tables::propensity::PropensityTable;

pub const HELIX_WINDOW: usize = 6;

const STRONG_FORMER_MIN: f64 = 1.05;
const WEAK_FORMER_MIN: f64 = 1.00;
const BREAKER_MAX: f64 = 0.69;

const MIN_AVERAGE_PROPENSITY: f64 = 1.03;
const MAX_BREAKERS: usize = 2;
const MIN_NUCLEATION: f64 = 4.0;
const MIN_FORMERS: usize = 3;

/// Chou-Fasman helix nucleation test over a six-residue window.
///
/// Strong formers (`P(a) >= 1.05`) add a full nucleation point, weak formers
/// (`1.00 <= P(a) < 1.05`) add half a point, and breakers (`P(a) <= 0.69`) are
/// counted. Only formers and breakers contribute to the propensity sum;
/// indifferent residues are left out of it but still count towards the window
/// length when averaging.
pub fn is_helix(window: &[Residue; HELIX_WINDOW], table: &PropensityTable) -> bool {
    let mut nucleation = 0.0;
    let mut propensity_sum = 0.0;
    let mut formers = 0;
    let mut breakers = 0;

    for &residue in window {
        let p = table.propensity(residue).alpha_helix;
        if p >= STRONG_FORMER_MIN {
            nucleation += 1.0;
            propensity_sum += p;
            formers += 1;
        } else if p >= WEAK_FORMER_MIN {
            nucleation += 0.5;
            propensity_sum += p;
            formers += 1;
        } else if p <= BREAKER_MAX {
            propensity_sum += p;
            breakers += 1;
        }
    }

    let average = propensity_sum / HELIX_WINDOW as f64;
    average >= MIN_AVERAGE_PROPENSITY
        && breakers <= MAX_BREAKERS
        && nucleation >= MIN_NUCLEATION
        && formers >= MIN_FORMERS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sequence::Sequence;
    use crate::core::tables::propensity::{AminoAcidPropensity, ResidueParameters};

    fn window(text: &str) -> [Residue; HELIX_WINDOW] {
        Sequence::from(text).residues().try_into().unwrap()
    }

    fn accepts(text: &str) -> bool {
        is_helix(&window(text), PropensityTable::chou_fasman())
    }

    #[test]
    fn strong_formers_nucleate_a_helix() {
        assert!(accepts("AAAAAA"));
        assert!(accepts("AKLVRA"));
    }

    #[test]
    fn breaker_rich_window_is_rejected() {
        assert!(!accepts("PPPPPP"));
    }

    #[test]
    fn two_breakers_are_tolerated_but_three_are_not() {
        assert!(accepts("EEEEGG"));
        assert!(!accepts("EEEGGG"));
    }

    #[test]
    fn indifferent_residues_do_not_raise_the_average() {
        // Counting R (0.98) would lift the average to ~1.27; leaving it out
        // drops it to ~0.95.
        assert!(!accepts("AAAARR"));
    }

    #[test]
    fn weak_formers_count_half_towards_nucleation() {
        // 4 x H (weak) + 2 x E (strong) = 2.0 + 2.0 nucleation.
        assert!(accepts("HHHHEE"));
        // 5 x H (weak) + 1 x E (strong) = 2.5 + 1.0 nucleation.
        assert!(!accepts("HHHHHE"));
    }

    #[test]
    fn weak_formers_alone_fall_below_the_average_threshold() {
        assert!(!accepts("DDDDDD"));
    }

    #[test]
    fn unknown_residues_count_as_breakers() {
        assert!(!accepts("AXAXAA"));
    }

    #[test]
    fn custom_table_drives_the_verdict() {
        let strong_former = ResidueParameters {
            propensity: AminoAcidPropensity::new(2.0, 0.0, 0.0),
            ..ResidueParameters::ZERO
        };
        let table: PropensityTable = [('Z', strong_former)].into_iter().collect();
        assert!(is_helix(&window("ZZZZZZ"), &table));
        assert!(!is_helix(&window("AAAAAA"), &table));
    }
}
