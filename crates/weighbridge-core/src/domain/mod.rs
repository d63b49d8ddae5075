//! Core domain layer for weighbridge.
//!
//! Pure business logic: the unit value objects and the conversion factor.
//! No I/O, no async, no external calls. Everything here is immutable once
//! constructed.

pub mod units;

// Re-exports for convenience
pub use units::{Kilograms, POUND_TO_KILOGRAM, Pounds};
