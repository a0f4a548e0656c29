use super::detectors::{HELIX_WINDOW, SHEET_WINDOW, TURN_WINDOW, is_helix, is_sheet, is_turn};
use super::overlap::{OVERLAP_WINDOW, resolve_overlap};
use crate::core::models::sequence::Sequence;
use crate::core::models::structure::{SecondaryStructure, StructureAssignment};
use crate::core::tables::propensity::PropensityTable;
use tracing::{debug, trace};

/// Per-residue labels under construction; `None` means not yet assigned.
struct LabelBuffer {
    labels: Vec<Option<SecondaryStructure>>,
}

impl LabelBuffer {
    fn new(len: usize) -> Self {
        Self {
            labels: vec![None; len],
        }
    }

    /// Overwrites `[start, start + width)`, clipped to the sequence end.
    fn paint(&mut self, start: usize, width: usize, label: SecondaryStructure) {
        let end = start.saturating_add(width).min(self.labels.len());
        if start >= end {
            return;
        }
        self.labels[start..end].fill(Some(label));
    }

    fn finish(self) -> StructureAssignment {
        self.labels
            .into_iter()
            .map(|label| label.unwrap_or(SecondaryStructure::Coil))
            .collect()
    }
}

/// Runs the Chou-Fasman window checks at every offset and merges the verdicts.
///
/// For each offset, left to right, the helix, sheet, turn and overlap checks
/// run in that order and each accepted check overwrites the labels it covers.
/// Residues that no check ever labels become [`SecondaryStructure::Coil`].
pub fn assemble(sequence: &Sequence, table: &PropensityTable) -> StructureAssignment {
    let mut buffer = LabelBuffer::new(sequence.len());

    for start in 0..sequence.len() {
        if sequence
            .window::<HELIX_WINDOW>(start)
            .is_some_and(|window| is_helix(window, table))
        {
            trace!(start, "Helix window accepted.");
            buffer.paint(start, HELIX_WINDOW, SecondaryStructure::Helix);
        }
        if sequence
            .window::<SHEET_WINDOW>(start)
            .is_some_and(|window| is_sheet(window, table))
        {
            trace!(start, "Sheet window accepted.");
            buffer.paint(start, SHEET_WINDOW, SecondaryStructure::Sheet);
        }
        if sequence
            .window::<TURN_WINDOW>(start)
            .is_some_and(|window| is_turn(window, table))
        {
            trace!(start, "Turn window accepted.");
            buffer.paint(start, TURN_WINDOW, SecondaryStructure::Turn);
        }
        if let Some(window) = sequence.window::<OVERLAP_WINDOW>(start) {
            if let Some(label) = resolve_overlap(window, table).structure() {
                trace!(start, label = %label, "Overlap window resolved.");
                buffer.paint(start, OVERLAP_WINDOW, label);
            }
        }
    }

    let assignment = buffer.finish();
    debug!(
        residues = assignment.len(),
        composition = %assignment.composition(),
        "Chou-Fasman assembly finished."
    );
    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::Residue;
    use crate::engine::detectors::{predict_helix, predict_turn};
    use crate::core::tables::propensity::{AminoAcidPropensity, ResidueParameters};

    fn predict(text: &str) -> String {
        assemble(&Sequence::from(text), PropensityTable::chou_fasman()).to_string()
    }

    #[test]
    fn empty_sequence_yields_empty_assignment() {
        assert_eq!(predict(""), "");
    }

    #[test]
    fn sequences_shorter_than_every_window_are_all_coil() {
        assert_eq!(predict("A"), "C");
        assert_eq!(predict("AAA"), "CCC");
    }

    #[test]
    fn unknown_residues_are_left_as_coil() {
        assert_eq!(predict("XXXX"), "CCCC");
        assert_eq!(predict("XXXXXXXX"), "CCCCCCCC");
    }

    #[test]
    fn reference_sequence_is_reproduced() {
        assert_eq!(predict("MVLSPADKTNVKAAW"), "EETTTHTEEHHHHHH");
    }

    #[test]
    fn homopolymers_take_their_dominant_class() {
        assert_eq!(predict("AAAAAA"), "HHHHHH");
        assert_eq!(predict("VVVVVV"), "EEEEEE");
        assert_eq!(predict("CCCCC"), "EEEEE");
        assert_eq!(predict("PPPPP"), "TTTTT");
        assert_eq!(predict("GGGG"), "TTTT");
    }

    #[test]
    fn later_offset_overrides_earlier_helix() {
        // The helix at offset 0 covers positions 0..6, but the overlap
        // verdict at offset 4 (AAGG, turn-dominant) rewrites positions 4 and 5.
        assert!(predict_helix("AAAAAA").unwrap());
        assert_eq!(predict("AAAAAAGGGG"), "HHHHTTTTTT");
    }

    #[test]
    fn overlap_verdict_overrides_turn_at_the_same_offset() {
        assert!(predict_turn("ADDA").unwrap());
        assert_eq!(predict("ADDA"), "HHHH");
    }

    #[test]
    fn last_write_wins_with_custom_table() {
        // 'S' forms sheets on its own and 'T' is turn-dominant. Sheet windows at
        // offsets 0 and 1 label every position, then the turn and overlap
        // verdicts at offset 2 relabel positions 2..6.
        let sheet = ResidueParameters {
            propensity: AminoAcidPropensity::new(0.8, 2.0, 0.8),
            ..ResidueParameters::ZERO
        };
        let turn = ResidueParameters {
            propensity: AminoAcidPropensity::new(0.8, 0.8, 9.0),
            ..ResidueParameters::ZERO
        };
        let table: PropensityTable = [('S', sheet), ('T', turn)].into_iter().collect();
        let sequence: Sequence = "SSSSST".chars().map(Residue::new).collect();
        assert_eq!(assemble(&sequence, &table).to_string(), "EETTTT");
    }

    #[test]
    fn output_length_matches_input_length() {
        for text in ["", "M", "MV", "MVLSPA", "MVLSPADKTNVKAAWGKVGAHAGEYGAEALERMFLSFPTTKTYFPHF"] {
            assert_eq!(predict(text).chars().count(), text.chars().count());
        }
    }

    #[test]
    fn paint_clips_at_sequence_end() {
        let mut buffer = LabelBuffer::new(3);
        buffer.paint(1, 6, SecondaryStructure::Helix);
        buffer.paint(5, 4, SecondaryStructure::Sheet);
        assert_eq!(buffer.finish().to_string(), "CHH");
    }
}
