//! Weight units as dedicated value types.
//!
//! A raw `f64` says nothing about its unit; wrapping the reading in
//! [`Pounds`] or [`Kilograms`] makes mixing them a compile error. Both are
//! plain `Copy` newtypes with no identity and no mutation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Multiplier applied to a pound reading to express it in kilograms.
///
/// Deliberately the rounded trade factor rather than the exact 0.45359237:
/// the scale hardware converts with 0.45 on its own display, and our output
/// must match what the display shows.
pub const POUND_TO_KILOGRAM: f64 = 0.45;

/// A weight reading in pounds (avoirdupois).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(f64);

impl Pounds {
    /// Wrap a raw pound value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw numeric value.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Express this reading in kilograms using [`POUND_TO_KILOGRAM`].
    pub fn to_kilograms(self) -> Kilograms {
        Kilograms(self.0 * POUND_TO_KILOGRAM)
    }
}

impl From<f64> for Pounds {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Pounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lb", self.0)
    }
}

/// A weight reading in kilograms.
///
/// Only ever produced by [`Pounds::to_kilograms`] or constructed directly in
/// tests; there is no kilogram-native source in the system.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(f64);

impl Kilograms {
    /// Wrap a raw kilogram value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw numeric value.
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.0)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn factor_is_the_rounded_one() {
        // 0.45, not 0.45359237 - output compatibility with the scale display.
        assert_eq!(POUND_TO_KILOGRAM, 0.45);
    }

    #[test]
    fn converts_the_reference_reading() {
        let kg = Pounds::new(28.0).to_kilograms();
        assert!((kg.value() - 12.6).abs() < EPS);
    }

    #[test]
    fn zero_pounds_is_zero_kilograms() {
        assert_eq!(Pounds::new(0.0).to_kilograms().value(), 0.0);
    }

    #[test]
    fn hundred_pounds_is_forty_five_kilograms() {
        let kg = Pounds::new(100.0).to_kilograms();
        assert!((kg.value() - 45.0).abs() < EPS);
    }

    #[test]
    fn conversion_does_not_consume_anything_observable() {
        let lb = Pounds::new(28.0);
        let first = lb.to_kilograms();
        let second = lb.to_kilograms();
        assert_eq!(first, second);
    }

    #[test]
    fn display_includes_units() {
        assert_eq!(Pounds::new(28.0).to_string(), "28 lb");
        assert_eq!(Kilograms::new(12.6).to_string(), "12.6 kg");
    }

    #[test]
    fn pounds_from_f64() {
        assert_eq!(Pounds::from(28.0), Pounds::new(28.0));
    }
}
