//! Closed ranges over `f64` and the small numeric helpers the engine leans on.
//!
//! Either side of a [`Bounds`] may be infinite. Containment, clamping and
//! "is exactly a bound" checks all behave as expected with infinities.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Closed range `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    lower: f64,
    upper: f64,
}

impl Bounds {
    /// Create a range, rejecting `lower > upper` and NaN.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(Error::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// `(-inf, +inf)`
    pub const fn unbounded() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    /// Build without validation. Callers guarantee `lower <= upper`.
    pub(crate) const fn new_unchecked(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    #[inline]
    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.lower).min(self.upper)
    }

    /// `x` equals one of the two ends exactly.
    #[inline]
    pub fn is_bound(&self, x: f64) -> bool {
        x == self.lower || x == self.upper
    }

    /// The end closest to `x`. Ties go to the lower end.
    pub fn nearest_bound(&self, x: f64) -> f64 {
        let delta_low = x - self.lower;
        let delta_up = self.upper - x;
        if delta_low <= delta_up {
            self.lower
        } else {
            self.upper
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Round to six decimal places, hiding float noise around grid boundaries.
#[inline]
pub fn approximated(x: f64) -> f64 {
    (x * 1_000_000.0).round() / 1_000_000.0
}

/// Smallest odd number `>= n`.
#[inline]
pub fn next_odd(n: usize) -> usize {
    if n % 2 == 0 {
        n + 1
    } else {
        n
    }
}
