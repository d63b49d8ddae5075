//! Application port (trait) for the weight source.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `weighbridge-adapters` implement
//! them.

use crate::domain::Pounds;

/// Port for anything that can report a weight in pounds.
///
/// Implemented by:
/// - `weighbridge_adapters::scale::InfantScale` (production)
/// - `weighbridge_adapters::scale::FixedScale` (testing / substitution)
///
/// ## Design Notes
///
/// - Readings are pound-denominated; converting to other units is the
///   application's job, never the source's
/// - No error channel: a source either has a reading or doesn't exist
#[cfg_attr(test, mockall::automock)]
pub trait WeightSource: Send + Sync {
    /// Take one reading in the source's native unit.
    ///
    /// Must be free of side effects; repeated calls on the same source
    /// return the same value.
    fn weight_in_pounds(&self) -> Pounds;
}
