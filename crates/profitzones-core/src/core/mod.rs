//! # Core Module
//!
//! This module provides the stateless building blocks of profitzones: the data
//! models for structures and alignment zones, and the readers and writers for
//! the files they come from.
//!
//! ## Architecture
//!
//! - **Representation** ([`models`]) - Atoms, structures, residue identifiers and zones
//! - **File I/O** ([`io`]) - PDB reading/writing and ProFit zone-listing parsing
//!
//! Nothing in this module knows how zones relate to structures; that logic
//! lives in [`crate::engine`].

pub mod io;
pub mod models;
