//! Fixed-value scale for tests and substitution.

use weighbridge_core::{application::ports::WeightSource, domain::Pounds};

/// A scale that reports whatever reading it was built with.
///
/// The in-memory counterpart of [`super::InfantScale`]: handy in tests and
/// anywhere a caller needs to exercise the adapter against an arbitrary
/// reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedScale {
    reading: Pounds,
}

impl FixedScale {
    /// Create a scale pinned to the given reading.
    pub fn new(reading: Pounds) -> Self {
        Self { reading }
    }
}

impl WeightSource for FixedScale {
    fn weight_in_pounds(&self) -> Pounds {
        self.reading
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
