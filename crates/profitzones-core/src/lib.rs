//! # profitzones
//!
//! Converts the sequential zone listing printed by the ProFit structural
//! superposition program into stable residue identifiers for the two fitted
//! structures, and marks the aligned core of each structure in its B-value
//! column.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Structure`, `Zone`,
//!   `ResidueSpecifier`) and file I/O for PDB files and zone listings.
//!
//! - **[`engine`]: The Logic Core.** Reference-atom indexing, bounds-checked
//!   zone mapping, core annotation and zone reporting.
//!
//! - **[`workflows`]: The Public API.** The end-to-end pipeline that takes
//!   parsed inputs through mapping and annotation in one call.

pub mod core;
pub mod engine;
pub mod workflows;
