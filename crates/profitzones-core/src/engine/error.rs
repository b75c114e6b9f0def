use thiserror::Error;

use crate::core::models::ids::{ResidueSpecifier, StructureSlot};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("No zones found in the zone listing")]
    EmptyZoneList,

    #[error("No '{atom_name}' atoms found in the {slot}")]
    NoReferenceAtoms {
        slot: StructureSlot,
        atom_name: String,
    },

    #[error(
        "Zone {zone}: position {position} is outside the {len} residues indexed for the {slot}"
    )]
    PositionOutOfRange {
        slot: StructureSlot,
        zone: usize,
        position: isize,
        len: usize,
    },

    #[error("Zone {zone} has not been mapped onto the {slot}")]
    UnmappedZone { slot: StructureSlot, zone: usize },

    #[error("Residue {spec} not found in the {slot}")]
    ResidueNotFound {
        slot: StructureSlot,
        spec: ResidueSpecifier,
    },
}
