use crate::core::models::sequence::Sequence;
use crate::core::models::structure::{SecondaryStructure, StructureAssignment};
use crate::core::tables::context::{ContextClass, ContextMatrixTable};
use tracing::debug;

/// Residues considered on each side of the scored position.
pub const CONTEXT_HALF_WIDTH: usize = 2;

/// Sum of `class` scores over positions `index - 2 ..= index + 2` that fall
/// inside the sequence, added in ascending position order.
pub fn context_score(
    sequence: &Sequence,
    index: usize,
    class: ContextClass,
    table: &ContextMatrixTable,
) -> f64 {
    let start = index.saturating_sub(CONTEXT_HALF_WIDTH);
    let end = index
        .saturating_add(CONTEXT_HALF_WIDTH + 1)
        .min(sequence.len());
    sequence
        .residues()
        .get(start..end)
        .unwrap_or_default()
        .iter()
        .map(|&residue| table.score(class, residue))
        .sum()
}

/// GOR-style prediction: each residue takes the class with the strictly
/// largest context score, with helix checked before sheet and turn as the
/// fallback. The sequence is upper-cased (ASCII only) before scoring, and coil
/// is never produced.
pub fn predict_by_context(sequence: &Sequence, table: &ContextMatrixTable) -> StructureAssignment {
    let normalized = sequence.to_ascii_uppercase();

    let assignment: StructureAssignment = (0..normalized.len())
        .map(|index| {
            let helix = context_score(&normalized, index, ContextClass::Helix, table);
            let sheet = context_score(&normalized, index, ContextClass::Sheet, table);
            let turn = context_score(&normalized, index, ContextClass::Turn, table);

            if helix > sheet && helix > turn {
                SecondaryStructure::Helix
            } else if sheet > helix && sheet > turn {
                SecondaryStructure::Sheet
            } else {
                SecondaryStructure::Turn
            }
        })
        .collect();

    debug!(
        residues = assignment.len(),
        composition = %assignment.composition(),
        "Context scoring finished."
    );
    assignment
}
