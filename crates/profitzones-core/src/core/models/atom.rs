use super::ids::ResidueSpecifier;
use nalgebra::Point3;
use std::str::FromStr;

/// The PDB record type an atom was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordKind {
    /// Standard polymer atom (`ATOM`).
    #[default]
    Atom,
    /// Hetero atom (`HETATM`), e.g. ligands, ions, waters.
    Hetatm,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Atom => "ATOM",
            RecordKind::Hetatm => "HETATM",
        }
    }
}

impl FromStr for RecordKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ATOM" => Ok(RecordKind::Atom),
            "HETATM" => Ok(RecordKind::Hetatm),
            _ => Err(()),
        }
    }
}

/// Represents a single atom record of a structure file.
///
/// The residue identity is kept flat on the atom (chain, number, insertion code)
/// so that a structure is simply an ordered list of atoms, mirroring the record
/// order of the file. The `b_factor` field doubles as the annotation scalar
/// used to flag atoms that belong to an aligned core.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Whether the atom came from an `ATOM` or `HETATM` record.
    pub record: RecordKind,
    /// The atom serial number from the source file.
    pub serial: i64,
    /// The atom name with surrounding whitespace removed (e.g. "CA", "OG1").
    pub name: String,
    /// Alternate location indicator, `' '` when absent.
    pub alt_loc: char,
    /// The three-letter residue name (e.g. "ALA").
    pub residue_name: String,
    /// Single-character chain identifier.
    pub chain_id: char,
    /// Residue sequence number.
    pub residue_number: isize,
    /// Residue insertion code, `' '` when absent.
    pub insertion_code: char,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Occupancy of this atom position.
    pub occupancy: f64,
    /// Temperature factor; repurposed as the in-core / out-of-core flag.
    pub b_factor: f64,
}

impl Atom {
    /// Creates a new `Atom` with default values for the non-identifying fields.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `residue` - The residue the atom belongs to.
    /// * `residue_name` - The three-letter residue name.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(
        name: &str,
        residue: ResidueSpecifier,
        residue_name: &str,
        position: Point3<f64>,
    ) -> Self {
        Self {
            record: RecordKind::default(),
            serial: 0,
            name: name.trim().to_string(),
            alt_loc: ' ',
            residue_name: residue_name.to_string(),
            chain_id: residue.chain_id,
            residue_number: residue.residue_number,
            insertion_code: residue.insertion_code,
            position,
            occupancy: 1.0,
            b_factor: 0.0,
        }
    }

    /// Returns the identifier of the residue this atom belongs to.
    #[inline]
    pub fn residue_spec(&self) -> ResidueSpecifier {
        ResidueSpecifier::new(self.chain_id, self.residue_number, self.insertion_code)
    }

    /// Returns `true` if this atom's name matches `name`, ignoring padding.
    ///
    /// PDB atom names are column-aligned (" CA " vs "CA  "), so both sides are
    /// trimmed before the comparison.
    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.trim() == name.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> ResidueSpecifier {
        ResidueSpecifier::new('A', 112, ' ')
    }

    #[test]
    fn new_atom_has_expected_default_fields() {
        let atom = Atom::new(" CA ", spec(), "ALA", Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.name, "CA");
        assert_eq!(atom.residue_name, "ALA");
        assert_eq!(atom.record, RecordKind::Atom);
        assert_eq!(atom.alt_loc, ' ');
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.occupancy, 1.0);
        assert_eq!(atom.b_factor, 0.0);
    }

    #[test]
    fn residue_spec_reassembles_identifier() {
        let atom = Atom::new("N", spec(), "ALA", Point3::origin());
        assert_eq!(atom.residue_spec(), spec());
    }

    #[test]
    fn is_named_ignores_column_padding() {
        let atom = Atom::new("CA", spec(), "ALA", Point3::origin());
        assert!(atom.is_named("CA"));
        assert!(atom.is_named(" CA "));
        assert!(atom.is_named("CA  "));
        assert!(!atom.is_named("C"));
        assert!(!atom.is_named("ca"));
    }

    #[test]
    fn record_kind_parses_padded_names() {
        assert_eq!(RecordKind::from_str("ATOM  "), Ok(RecordKind::Atom));
        assert_eq!(RecordKind::from_str("HETATM"), Ok(RecordKind::Hetatm));
        assert_eq!(RecordKind::from_str("REMARK"), Err(()));
        assert_eq!(RecordKind::Hetatm.as_str(), "HETATM");
    }
}
