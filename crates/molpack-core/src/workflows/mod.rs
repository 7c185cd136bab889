//! # Workflows Module
//!
//! High-level entry points that tie [`crate::core`] and [`crate::engine`]
//! together into complete procedures.
//!
//! - **Packing Workflow** ([`pack`]) - Capacity estimate, rigid-body placement
//!   and bond inference for one template in a cubic cell.

pub mod pack;
