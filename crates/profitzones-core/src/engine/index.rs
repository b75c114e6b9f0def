use crate::core::models::ids::{ResidueSpecifier, StructureSlot};
use crate::core::models::structure::Structure;
use crate::engine::error::EngineError;
use tracing::debug;

/// Positional index over the residues carrying the reference atom.
///
/// ProFit numbers residues sequentially over the C-alpha atoms it read, so
/// `entries[k]` is the residue ProFit calls `k + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceIndex {
    slot: StructureSlot,
    entries: Vec<ResidueSpecifier>,
}

impl ReferenceIndex {
    /// Builds the index for one structure.
    ///
    /// Atoms named `reference_atom` are copied out of the structure in file
    /// order. When a residue carries several matching atoms (alternate
    /// locations) only the first one is indexed, so each residue occupies
    /// exactly one position.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoReferenceAtoms`] if no atom matches.
    pub fn build(
        structure: &Structure,
        slot: StructureSlot,
        reference_atom: &str,
    ) -> Result<Self, EngineError> {
        let mut entries: Vec<ResidueSpecifier> = Vec::new();

        for atom in structure.select_atoms_named(reference_atom) {
            let spec = atom.residue_spec();
            if entries.last() != Some(&spec) {
                entries.push(spec);
            }
        }

        if entries.is_empty() {
            return Err(EngineError::NoReferenceAtoms {
                slot,
                atom_name: reference_atom.trim().to_string(),
            });
        }

        debug!(
            %slot,
            residues = entries.len(),
            reference_atom,
            "Built reference-atom index."
        );
        Ok(Self { slot, entries })
    }

    pub fn slot(&self) -> StructureSlot {
        self.slot
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the residue at the 0-based offset `k`.
    pub fn get(&self, k: usize) -> Option<&ResidueSpecifier> {
        self.entries.get(k)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResidueSpecifier> {
        self.entries.iter()
    }

    /// Resolves a 1-based ProFit position to a residue identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PositionOutOfRange`] for positions below 1 or past
    /// the last indexed residue. `zone` is the 1-based zone number reported in
    /// the error.
    pub fn resolve(&self, position: isize, zone: usize) -> Result<ResidueSpecifier, EngineError> {
        usize::try_from(position)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .and_then(|k| self.entries.get(k))
            .copied()
            .ok_or(EngineError::PositionOutOfRange {
                slot: self.slot,
                zone,
                position,
                len: self.entries.len(),
            })
    }
}
