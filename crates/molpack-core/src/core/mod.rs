//! # Core Module
//!
//! This module provides the fundamental building blocks of molpack: the data
//! models for atoms and molecular units, the element property table, pure
//! geometric primitives, and file I/O.
//!
//! ## Overview
//!
//! Everything in `core` is stateless. Models are plain values, geometry functions
//! are pure, and the element table is a read-only lookup injected wherever it is
//! needed. The stateful packing loop lives in [`crate::engine`].
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, rigid units, templates, the atom pool and bonds
//! - **Element Data** ([`elements`]) - Covalent and van der Waals radii, valency, electronegativity
//! - **Geometry** ([`utils::geometry`]) - Distances, rigid rotations and translations
//! - **File I/O** ([`io`]) - Points, XYZ and bond CSV formats

pub mod elements;
pub mod io;
pub mod models;
pub mod utils;
