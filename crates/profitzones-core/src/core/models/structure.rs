use super::atom::Atom;
use super::ids::ResidueSpecifier;

/// An ordered list of atoms making up one molecular structure.
///
/// Atom order is the record order of the source file and is never changed by
/// any operation in this crate, so positions returned by the lookup methods stay
/// valid for the lifetime of the structure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    atoms: Vec<Atom>,
}

impl Structure {
    /// Creates a new, empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a structure from atoms already in file order.
    pub fn from_atoms(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atoms_mut(&mut self) -> &mut [Atom] {
        &mut self.atoms
    }

    pub fn push(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Copies out every atom whose name matches `atom_name`, preserving order.
    ///
    /// The structure itself is left untouched.
    ///
    /// # Arguments
    ///
    /// * `atom_name` - The atom name to select; padding is ignored.
    ///
    /// # Return
    ///
    /// A new vector with clones of the matching atoms.
    pub fn select_atoms_named(&self, atom_name: &str) -> Vec<Atom> {
        self.atoms
            .iter()
            .filter(|atom| atom.is_named(atom_name))
            .cloned()
            .collect()
    }

    /// Finds the position of the first atom belonging to `spec`.
    ///
    /// # Return
    ///
    /// Returns `Some(position)` of the first matching atom, otherwise `None`.
    pub fn find_residue(&self, spec: &ResidueSpecifier) -> Option<usize> {
        self.atoms
            .iter()
            .position(|atom| atom.residue_spec() == *spec)
    }

    /// Steps from the atom at `from` to the first atom of the following residue.
    ///
    /// A residue is a run of consecutive atoms sharing the same identifier. The
    /// returned position equals [`Structure::len`] when `from` lies in the last
    /// residue, which makes it usable as an exclusive range end.
    pub fn next_residue(&self, from: usize) -> usize {
        let Some(current) = self.atoms.get(from).map(Atom::residue_spec) else {
            return self.atoms.len();
        };
        self.atoms[from..]
            .iter()
            .position(|atom| atom.residue_spec() != current)
            .map_or(self.atoms.len(), |offset| from + offset)
    }

    /// Sets the B-value of every atom to `value`.
    pub fn fill_b_factors(&mut self, value: f64) {
        for atom in &mut self.atoms {
            atom.b_factor = value;
        }
    }
}
