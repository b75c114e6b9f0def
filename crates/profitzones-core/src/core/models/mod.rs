//! # Core Models Module
//!
//! This module contains the data structures used to represent structures and
//! alignment zones in profitzones.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom records with residue identity and the B-value annotation field
//! - [`structure`] - An ordered, file-faithful list of atoms with residue lookup helpers
//! - [`zone`] - Alignment zones, zone lists, and multi-group zone sets
//! - [`ids`] - Residue identifiers and structure slots
//!
//! ## Usage
//!
//! ```ignore
//! use profitzones::core::models::{ids::{ResidueSpecifier, StructureSlot}, zone::Zone};
//!
//! let mut zone = Zone::new((12, 45), (8, 41));
//! zone.set_identifiers(
//!     StructureSlot::First,
//!     ResidueSpecifier::new('A', 112, ' '),
//!     ResidueSpecifier::new('A', 145, ' '),
//! );
//! assert!(zone.is_mapped(StructureSlot::First));
//! ```

pub mod atom;
pub mod ids;
pub mod structure;
pub mod zone;
