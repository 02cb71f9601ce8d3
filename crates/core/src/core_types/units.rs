//! Semantic unit types for the kinematics layer
//!
//! Mass and time step are the two scalars the free-fall loop divides or
//! multiplies by. Wrapping them keeps a mass from being passed where a time step
//! is expected, and their constructors are the single place where "strictly
//! positive and finite" is checked.
//!
//! # Usage
//! ```
//! use freefall_core::core_types::units::{Kilograms, Seconds};
//!
//! let mass = Kilograms::new(5.0).unwrap();
//! assert_eq!(*mass, 5.0);
//! assert!(Kilograms::new(0.0).is_none());
//! assert!(Seconds::new(-1.0).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

#[inline]
fn is_strictly_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Mass in kilograms, always finite and > 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Kilograms(f64);

impl Deref for Kilograms {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kilograms {
    /// Create a mass, or `None` if `value` is not finite and strictly positive
    #[inline]
    pub fn new(value: f64) -> Option<Self> {
        is_strictly_positive(value).then_some(Kilograms(value))
    }

    /// Reciprocal mass (1/kg), always finite for a valid mass
    #[inline]
    pub fn inverse(self) -> f64 {
        1.0 / self.0
    }
}

impl TryFrom<f64> for Kilograms {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, String> {
        Kilograms::new(value).ok_or_else(|| format!("mass must be finite and positive, got {value}"))
    }
}

impl From<Kilograms> for f64 {
    fn from(m: Kilograms) -> f64 {
        m.0
    }
}

impl fmt::Display for Kilograms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.0)
    }
}

/// Time span in seconds, always finite and > 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Seconds(f64);

impl Deref for Seconds {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Seconds {
    /// Create a time span, or `None` if `value` is not finite and strictly positive
    #[inline]
    pub fn new(value: f64) -> Option<Self> {
        is_strictly_positive(value).then_some(Seconds(value))
    }
}

impl TryFrom<f64> for Seconds {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, String> {
        Seconds::new(value).ok_or_else(|| format!("time step must be finite and positive, got {value}"))
    }
}

impl From<Seconds> for f64 {
    fn from(s: Seconds) -> f64 {
        s.0
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilograms_validation() {
        assert!(Kilograms::new(0.001).is_some());
        assert!(Kilograms::new(0.0).is_none());
        assert!(Kilograms::new(-5.0).is_none());
        assert!(Kilograms::new(f64::NAN).is_none());
        assert!(Kilograms::new(f64::INFINITY).is_none());
    }

    #[test]
    fn test_kilograms_inverse() {
        let m = Kilograms::new(4.0).unwrap();
        assert_eq!(m.inverse(), 0.25);
    }

    #[test]
    fn test_display() {
        assert_eq!(Seconds::new(1.0).unwrap().to_string(), "1 s");
        assert_eq!(Kilograms::new(5.0).unwrap().to_string(), "5 kg");
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<Kilograms>("-1.0").is_err());
        let s: Seconds = serde_json::from_str("0.25").unwrap();
        assert_eq!(*s, 0.25);
    }
}
