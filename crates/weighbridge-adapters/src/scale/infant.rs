//! Infant scale adaptee.

use tracing::trace;

use weighbridge_core::{application::ports::WeightSource, domain::Pounds};

/// Reading the infant scale always reports, in its native unit.
const INFANT_READING_LB: f64 = 28.0;

/// The production adaptee: a baby scale that reports in pounds.
///
/// There is no real sensor behind this; the scale reports a fixed 28 lb
/// reading, matching the hardware unit this tool demonstrates against.
#[derive(Debug, Clone, Copy)]
pub struct InfantScale;

impl InfantScale {
    /// Create a new infant scale.
    pub fn new() -> Self {
        Self
    }
}

impl Default for InfantScale {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightSource for InfantScale {
    fn weight_in_pounds(&self) -> Pounds {
        trace!(reading = INFANT_READING_LB, "Infant scale read");
        Pounds::new(INFANT_READING_LB)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
