//! Provides input/output functionality for packed atom lists.
//!
//! This module contains writers and readers for the flat file formats produced by
//! molpack: the points format consumed by visualization scripts, standard XYZ,
//! and a CSV listing of inferred bonds. The formats share a trait-based
//! interface so callers can swap them without touching the packing code.

pub mod bonds;
pub mod points;
pub mod traits;
pub mod xyz;
