//! Weighbridge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the weighbridge
//! unit-conversion tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        weighbridge-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          MetricWeightAdapter            │
//! │      (the single use case: convert)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Port (Trait)           │
//! │        (Driven: WeightSource)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   weighbridge-adapters (Infrastructure) │
//! │       (InfantScale, FixedScale)         │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │   (Pounds, Kilograms, the factor)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use weighbridge_core::prelude::*;
//!
//! // 1. Obtain a source (any impl of WeightSource)
//! let source: Box<dyn WeightSource> = some_scale();
//!
//! // 2. Wrap it in the metric adapter and read
//! let adapter = MetricWeightAdapter::new(source);
//! let kg = adapter.weight_in_kilograms();
//! # fn some_scale() -> Box<dyn weighbridge_core::prelude::WeightSource> { unimplemented!() }
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (the port and the adapter over it)
pub mod application;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{MetricWeightAdapter, WeightSource};
    pub use crate::domain::{Kilograms, POUND_TO_KILOGRAM, Pounds};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
