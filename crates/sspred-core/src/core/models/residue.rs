use phf::{Map, phf_map};
use std::fmt;

static STANDARD_RESIDUE_NAMES: Map<char, &'static str> = phf_map! {
    // --- Aliphatic, Nonpolar ---
    'A' => "Alanine",
    'G' => "Glycine",
    'I' => "Isoleucine",
    'L' => "Leucine",
    'P' => "Proline",
    'V' => "Valine",

    // --- Aromatic ---
    'F' => "Phenylalanine",
    'W' => "Tryptophan",
    'Y' => "Tyrosine",

    // --- Polar, Uncharged ---
    'N' => "Asparagine",
    'C' => "Cysteine",
    'Q' => "Glutamine",
    'S' => "Serine",
    'T' => "Threonine",
    'M' => "Methionine",

    // --- Positively Charged (Basic) ---
    'R' => "Arginine",
    'K' => "Lysine",
    'H' => "Histidine",

    // --- Negatively Charged (Acidic) ---
    'D' => "Aspartic Acid",
    'E' => "Glutamic Acid",
};

/// A single residue of a protein sequence, identified by its one-letter code.
///
/// Any `char` is accepted. Codes outside the 20 standard amino acids are kept
/// verbatim and resolve to zero-valued table entries during prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Residue(char);

impl Residue {
    pub const fn new(code: char) -> Self {
        Self(code)
    }

    pub const fn code(self) -> char {
        self.0
    }

    pub fn is_standard(self) -> bool {
        STANDARD_RESIDUE_NAMES.contains_key(&self.0)
    }

    pub fn name(self) -> Option<&'static str> {
        STANDARD_RESIDUE_NAMES.get(&self.0).copied()
    }

    /// ASCII-only case folding; non-ASCII codes are returned unchanged.
    pub fn to_ascii_uppercase(self) -> Self {
        Self(self.0.to_ascii_uppercase())
    }
}

impl From<char> for Residue {
    fn from(code: char) -> Self {
        Self(code)
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
