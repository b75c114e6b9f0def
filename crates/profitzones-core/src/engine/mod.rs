//! # Engine Module
//!
//! This module implements the algorithms that turn ProFit's positional zones into
//! residue identifiers and apply them to structures.
//!
//! ## Architecture
//!
//! - **Indexing** ([`index`]) - One entry per residue carrying the reference atom, in file order
//! - **Mapping** ([`mapper`]) - Bounds-checked translation of zone positions into identifiers
//! - **Annotation** ([`annotate`]) - Writing the in-core flag into the B-value column
//! - **Reporting** ([`report`]) - Human-readable rendering of mapped zones
//! - **Configuration** ([`config`]) - Reference atom and annotation values
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Each step fails fast: an out-of-range position or a residue missing from a
//! structure stops the run before any zone or atom is modified.

pub mod annotate;
pub mod config;
pub mod error;
pub mod index;
pub mod mapper;
pub mod report;
