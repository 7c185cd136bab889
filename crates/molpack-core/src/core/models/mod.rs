//! # Core Models Module
//!
//! This module contains the data structures used to represent a packed molecular
//! system in molpack.
//!
//! ## Overview
//!
//! The models describe a single molecular species replicated many times inside a
//! cubic cell. They are deliberately small and immutable in spirit: transforms
//! produce new values instead of mutating existing ones, and the accumulated pool
//! only ever grows.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom with element symbol, position and electronegativity
//! - [`unit`] - One rigid molecular instance and the append-only pool of accepted atoms
//! - [`template`] - The canonical unit every placement starts from, and its TOML spec
//! - [`cell`] - The cubic simulation cell that bounds placement offsets
//! - [`topology`] - Distance-inferred bonds between pool atoms
//!
//! ## Usage
//!
//! ```ignore
//! use molpack::core::elements::ElementTable;
//! use molpack::core::models::{template::Template, unit::AtomPool};
//!
//! let template = Template::water(&ElementTable::builtin());
//! let mut pool = AtomPool::new();
//! pool.push_unit(template.unit().clone());
//! ```

pub mod atom;
pub mod cell;
pub mod template;
pub mod topology;
pub mod unit;
