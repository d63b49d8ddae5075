//! Scale implementations of the `WeightSource` port.

pub mod fixed;
pub mod infant;

pub use fixed::FixedScale;
pub use infant::InfantScale;
