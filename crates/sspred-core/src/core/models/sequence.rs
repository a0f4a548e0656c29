use super::residue::Residue;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An ordered, read-only list of residues.
///
/// Positions are 0-indexed. A sequence built from text has one residue per
/// `char`, so its length is the character count of the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    residues: Vec<Residue>,
}

impl Sequence {
    pub fn new(residues: Vec<Residue>) -> Self {
        Self { residues }
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Residue> {
        self.residues.get(index).copied()
    }

    /// Returns the fixed-length window starting at `start`, or `None` if fewer
    /// than `N` residues remain.
    pub fn window<const N: usize>(&self, start: usize) -> Option<&[Residue; N]> {
        let end = start.checked_add(N)?;
        self.residues.get(start..end)?.try_into().ok()
    }

    pub fn to_ascii_uppercase(&self) -> Self {
        self.residues
            .iter()
            .map(|residue| residue.to_ascii_uppercase())
            .collect()
    }

    /// Positions (0-indexed) and codes of every residue outside the standard
    /// twenty.
    pub fn non_standard_residues(&self) -> Vec<(usize, Residue)> {
        self.residues
            .iter()
            .enumerate()
            .filter(|(_, residue)| !residue.is_standard())
            .map(|(index, residue)| (index, *residue))
            .collect()
    }
}

impl FromIterator<Residue> for Sequence {
    fn from_iter<I: IntoIterator<Item = Residue>>(iter: I) -> Self {
        Self {
            residues: iter.into_iter().collect(),
        }
    }
}

impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        text.chars().map(Residue::new).collect()
    }
}

impl FromStr for Sequence {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            write!(f, "{}", residue)?;
        }
        Ok(())
    }
}
