//! Infrastructure adapters for weighbridge.
//!
//! This crate implements the port defined in
//! `weighbridge-core::application::ports`. Concrete scales live here; the
//! core never knows which one it is reading from.

pub mod scale;

// Re-export commonly used adapters
pub use scale::{FixedScale, InfantScale};
