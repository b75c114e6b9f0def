//! Provides input/output functionality for the files this crate consumes.
//!
//! Structure files are handled through the [`traits::StructureFile`] interface,
//! with [`pdb`] as the concrete fixed-column PDB implementation. Zone listings
//! produced by ProFit are read by [`zones`].

pub mod pdb;
pub mod traits;
pub mod zones;
