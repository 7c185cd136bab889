//! # molpack Core Library
//!
//! Random rigid-body packing of small molecules into a cubic simulation cell,
//! with overlap validation, distance-based bond inference and a density-based
//! capacity estimate.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so each concern can be tested on its own.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Atom`, `MolecularUnit`,
//!   `AtomPool`, `Template`), the element property table, geometry helpers and
//!   file I/O for the points, XYZ and bond CSV formats.
//!
//! - **[`engine`]: The Logic Core.** The rejection-sampling placement loop,
//!   random rigid transforms, overlap validation, bond inference, the capacity
//!   estimate and progress reporting.
//!
//! - **[`workflows`]: The Public API.** [`workflows::pack::run`] executes a
//!   complete packing run and returns a report ready to be written out.

pub mod core;
pub mod engine;
pub mod workflows;
