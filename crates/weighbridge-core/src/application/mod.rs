//! Application layer for weighbridge.
//!
//! This layer contains:
//! - **Ports**: the [`WeightSource`] trait implemented by infrastructure
//! - **Adapter**: [`MetricWeightAdapter`], the one use case (read + convert)
//!
//! The application layer coordinates the domain layer but contains no unit
//! arithmetic itself. The conversion rule lives in `crate::domain`.

pub mod adapter;
pub mod ports;

// Re-export the adapter and the port trait
pub use adapter::MetricWeightAdapter;
pub use ports::WeightSource;
