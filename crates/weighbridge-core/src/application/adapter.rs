//! Metric Weight Adapter - the single application use case.
//!
//! Wraps a pound-denominated [`WeightSource`] and presents the reading in
//! kilograms. This is the classic object-adapter shape: the adaptee is held
//! behind the port trait, so any source can be substituted.

use tracing::{debug, instrument};

use crate::{application::ports::WeightSource, domain::Kilograms};

/// Adapter exposing a pound-native source in kilograms.
///
/// The source is injected at construction rather than built internally, so
/// callers (and tests) choose the adaptee.
pub struct MetricWeightAdapter {
    source: Box<dyn WeightSource>,
}

impl MetricWeightAdapter {
    /// Create an adapter over the given source.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use weighbridge_core::prelude::*;
    ///
    /// # fn scale() -> Box<dyn WeightSource> { unimplemented!() }
    /// let adapter = MetricWeightAdapter::new(scale());
    /// println!("{}", adapter.weight_in_kilograms());
    /// ```
    pub fn new(source: Box<dyn WeightSource>) -> Self {
        Self { source }
    }

    /// Read the source once and return the reading in kilograms.
    ///
    /// Pure with respect to the adapter: no state is mutated, and repeated
    /// calls return the same value for a well-behaved source.
    #[instrument(skip_all)]
    pub fn weight_in_kilograms(&self) -> Kilograms {
        let pounds = self.source.weight_in_pounds();
        debug!(%pounds, "Raw reading taken");

        let kilograms = pounds.to_kilograms();
        debug!(%kilograms, "Converted to metric");

        kilograms
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockWeightSource;
    use crate::domain::Pounds;

    const EPS: f64 = 1e-9;

    fn adapter_over(pounds: f64) -> MetricWeightAdapter {
        let mut source = MockWeightSource::new();
        source
            .expect_weight_in_pounds()
            .return_const(Pounds::new(pounds));
        MetricWeightAdapter::new(Box::new(source))
    }

    #[test]
    fn converts_pounds_to_kilograms() {
        let adapter = adapter_over(28.0);
        assert!((adapter.weight_in_kilograms().value() - 12.6).abs() < EPS);
    }

    #[test]
    fn zero_reading_stays_zero() {
        let adapter = adapter_over(0.0);
        assert_eq!(adapter.weight_in_kilograms().value(), 0.0);
    }

    #[test]
    fn substitute_source_is_honoured() {
        // The adapter must work against any WeightSource, not one fixed scale.
        let adapter = adapter_over(100.0);
        assert!((adapter.weight_in_kilograms().value() - 45.0).abs() < EPS);
    }

    #[test]
    fn repeated_reads_are_idempotent() {
        let mut source = MockWeightSource::new();
        source
            .expect_weight_in_pounds()
            .times(3)
            .return_const(Pounds::new(28.0));
        let adapter = MetricWeightAdapter::new(Box::new(source));

        let first = adapter.weight_in_kilograms();
        assert_eq!(adapter.weight_in_kilograms(), first);
        assert_eq!(adapter.weight_in_kilograms(), first);
    }
}
