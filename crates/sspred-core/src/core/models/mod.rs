pub mod residue;
pub mod sequence;
pub mod structure;
