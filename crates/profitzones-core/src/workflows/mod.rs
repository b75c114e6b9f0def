//! # Workflows Module
//!
//! High-level entry points that run the complete zone pipeline.
//!
//! - **Zone mapping** ([`zones`]) - Parse check, index, map both structures, annotate.
//!
//! Workflows never touch the filesystem. Callers read the inputs, run the
//! workflow, and write output only once it has returned successfully.

pub mod zones;
