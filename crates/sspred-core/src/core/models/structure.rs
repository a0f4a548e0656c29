use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryStructure {
    Helix,
    Sheet,
    Turn,
    Coil,
}

impl SecondaryStructure {
    pub const ALL: [SecondaryStructure; 4] = [
        SecondaryStructure::Helix,
        SecondaryStructure::Sheet,
        SecondaryStructure::Turn,
        SecondaryStructure::Coil,
    ];

    /// One-letter code: `H`, `E` (beta strand), `T` or `C`.
    pub const fn code(self) -> char {
        match self {
            SecondaryStructure::Helix => 'H',
            SecondaryStructure::Sheet => 'E',
            SecondaryStructure::Turn => 'T',
            SecondaryStructure::Coil => 'C',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'H' => Some(SecondaryStructure::Helix),
            'E' => Some(SecondaryStructure::Sheet),
            'T' => Some(SecondaryStructure::Turn),
            'C' => Some(SecondaryStructure::Coil),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SecondaryStructure::Helix => "Helix",
            SecondaryStructure::Sheet => "Beta Sheet",
            SecondaryStructure::Turn => "Turn",
            SecondaryStructure::Coil => "Coil",
        }
    }
}

impl fmt::Display for SecondaryStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The finished per-residue labelling of a sequence.
///
/// Produced once by a prediction method and never mutated afterwards; its
/// length always equals the length of the sequence it was predicted from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructureAssignment {
    labels: Vec<SecondaryStructure>,
}

impl StructureAssignment {
    pub fn labels(&self) -> &[SecondaryStructure] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<SecondaryStructure> {
        self.labels.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = SecondaryStructure> + '_ {
        self.labels.iter().copied()
    }

    pub fn composition(&self) -> Composition {
        let mut composition = Composition::default();
        for label in &self.labels {
            match label {
                SecondaryStructure::Helix => composition.helix += 1,
                SecondaryStructure::Sheet => composition.sheet += 1,
                SecondaryStructure::Turn => composition.turn += 1,
                SecondaryStructure::Coil => composition.coil += 1,
            }
        }
        composition
    }
}

impl FromIterator<SecondaryStructure> for StructureAssignment {
    fn from_iter<I: IntoIterator<Item = SecondaryStructure>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for StructureAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.labels {
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

/// Residue counts per structural class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Composition {
    pub helix: usize,
    pub sheet: usize,
    pub turn: usize,
    pub coil: usize,
}

impl Composition {
    pub fn total(&self) -> usize {
        self.helix + self.sheet + self.turn + self.coil
    }

    pub fn count(&self, structure: SecondaryStructure) -> usize {
        match structure {
            SecondaryStructure::Helix => self.helix,
            SecondaryStructure::Sheet => self.sheet,
            SecondaryStructure::Turn => self.turn,
            SecondaryStructure::Coil => self.coil,
        }
    }

    /// Fraction in `[0, 1]`; an empty assignment yields `0.0` for every class.
    pub fn fraction(&self, structure: SecondaryStructure) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(structure) as f64 / total as f64
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = SecondaryStructure::ALL
            .iter()
            .map(|s| format!("{} {:.1}%", s.code(), self.fraction(*s) * 100.0))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
