//! Core types, units, and errors for grid guide placement.
//!
//! This crate provides the foundational types shared by the other gridguide crates:
//! - Axis, orientation and alignment types
//! - Grid parameters (`GridAxisSpec`) and the per-invocation `GridRequest`
//! - Length units and their scale to user units
//! - Error types

pub mod errors;
pub mod types;
pub mod units;

pub use errors::*;
pub use types::*;
pub use units::*;
