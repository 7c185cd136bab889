//! # Engine Module
//!
//! The stateful packing layer. It turns a resolved template and a
//! [`config::PackingConfig`] into a pool of non-overlapping rigid units, and
//! analyses that pool afterwards.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Validated placement, bond and capacity parameters
//! - **Transforms** ([`transform`]) - Random rotation and translation of template copies
//! - **Validation** ([`validator`]) - Minimum-distance overlap checks against the pool
//! - **Placement** ([`placement`]) - The rejection-sampling loop and its outcome
//! - **Bonds** ([`bonds`]) - Distance-based bond inference over the final pool
//! - **Capacity** ([`capacity`]) - Density-based estimate of how many units fit
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod bonds;
pub mod capacity;
pub mod config;
pub mod error;
pub mod placement;
pub mod progress;
pub mod transform;
pub mod validator;
