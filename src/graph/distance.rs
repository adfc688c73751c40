//! Path costs that may be infinite.
//!
//! Shortest-path and spanning-tree engines start every tentative cost at infinity. JSON has no
//! infinity literal, so [`Distance`] serializes infinite values as the strings `"Infinity"`
//! and `"-Infinity"` (what JavaScript's `Number()` parses back) and finite values as plain
//! numbers.

use std::{fmt, ops::Add};

use serde::{Serialize, Serializer};

/// A tentative or final path cost.
///
/// Ordering follows `f64`; the graph validation guarantees weights are finite, so no `NaN`
/// can ever be produced by adding weights to distances.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    /// Cost of an unreached node.
    pub const INFINITY: Distance = Distance(f64::INFINITY);

    /// Cost of the start node.
    pub const ZERO: Distance = Distance(0.0);

    /// Wraps a raw cost.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Distance(value)
    }

    /// Returns the raw cost.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` if the cost is a real number.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Returns `true` for positive or negative infinity.
    #[must_use]
    pub fn is_infinite(self) -> bool {
        self.0.is_infinite()
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::INFINITY
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        Distance(value)
    }
}

impl Add<f64> for Distance {
    type Output = Distance;

    fn add(self, weight: f64) -> Distance {
        Distance(self.0 + weight)
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, other: Distance) -> Distance {
        Distance(self.0 + other.0)
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({self})")
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == f64::INFINITY {
            write!(f, "∞")
        } else if self.0 == f64::NEG_INFINITY {
            write!(f, "-∞")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 == f64::INFINITY {
            serializer.serialize_str("Infinity")
        } else if self.0 == f64::NEG_INFINITY {
            serializer.serialize_str("-Infinity")
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinity_absorbs_weights() {
        assert_eq!(Distance::INFINITY + 5.0, Distance::INFINITY);
        assert_eq!(Distance::INFINITY + -5.0, Distance::INFINITY);
        assert!(!(Distance::INFINITY + 1.0 < Distance::INFINITY));
    }

    #[test]
    fn test_ordering() {
        assert!(Distance::ZERO < Distance::new(1.0));
        assert!(Distance::new(1e12) < Distance::INFINITY);
        assert!(Distance::new(-1.0) < Distance::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Distance::new(3.0).to_string(), "3");
        assert_eq!(Distance::new(2.5).to_string(), "2.5");
        assert_eq!(Distance::INFINITY.to_string(), "∞");
        assert_eq!(Distance::new(f64::NEG_INFINITY).to_string(), "-∞");
    }

    #[test]
    fn test_default_is_unreached() {
        assert!(Distance::default().is_infinite());
        assert!(Distance::ZERO.is_finite());
    }
}
