//! Flick inertia following the scroll-view deceleration model.
//!
//! `rate` is the fraction of velocity kept per elapsed millisecond, so the
//! velocity after `t` seconds is `v0 * rate^(1000 t)`. Integrating gives the
//! travelled distance, whose limit is the total flick distance.

use crate::error::{Error, Result};

/// Per-millisecond deceleration used by the ruler.
pub const RULER_DECELERATION_RATE: f64 = 0.9972;

/// Velocity (px/s) under which a flick is considered finished.
pub const DEFAULT_STOP_VELOCITY: f64 = 0.5;

/// Deceleration parameters for a flick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deceleration {
    rate: f64,
    stop_velocity: f64,
}

impl Default for Deceleration {
    fn default() -> Self {
        Self {
            rate: RULER_DECELERATION_RATE,
            stop_velocity: DEFAULT_STOP_VELOCITY,
        }
    }
}

impl Deceleration {
    /// `rate` must lie strictly between 0 and 1.
    pub fn new(rate: f64) -> Result<Self> {
        if !(rate > 0.0 && rate < 1.0) {
            return Err(Error::InvalidPhysics(format!(
                "deceleration rate {rate} must be in (0, 1)"
            )));
        }
        Ok(Self {
            rate,
            stop_velocity: DEFAULT_STOP_VELOCITY,
        })
    }

    /// Override the velocity threshold that ends a flick.
    pub fn with_stop_velocity(mut self, stop_velocity: f64) -> Result<Self> {
        if !(stop_velocity > 0.0 && stop_velocity.is_finite()) {
            return Err(Error::InvalidPhysics(format!(
                "stop velocity {stop_velocity} must be a positive number"
            )));
        }
        self.stop_velocity = stop_velocity;
        Ok(self)
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[inline]
    pub fn stop_velocity(&self) -> f64 {
        self.stop_velocity
    }

    /// `1000 * ln(rate)`, the (negative) exponent per second.
    #[inline]
    fn coefficient(&self) -> f64 {
        1000.0 * self.rate.ln()
    }

    /// Velocity after `t` seconds.
    pub fn velocity(&self, t: f64, v0: f64) -> f64 {
        v0 * self.rate.powf(1000.0 * t)
    }

    /// Distance travelled after `t` seconds. Zero at `t = 0`, increasing in
    /// magnitude towards [`total_distance`](Self::total_distance).
    pub fn distance(&self, t: f64, v0: f64) -> f64 {
        v0 * (self.rate.powf(1000.0 * t) - 1.0) / self.coefficient()
    }

    /// Distance travelled once the flick has fully decayed.
    pub fn total_distance(&self, v0: f64) -> f64 {
        -v0 / self.coefficient()
    }

    /// Time until the velocity falls to the stop threshold.
    pub fn duration(&self, v0: f64) -> f64 {
        let speed = v0.abs();
        if speed <= self.stop_velocity {
            return 0.0;
        }
        (self.stop_velocity / speed).ln() / self.coefficient()
    }

    /// Time needed to travel `d` when launched at `v0`.
    ///
    /// Distances pointing against `v0` take no time. Distances at or past the
    /// total flick distance are never reached, so the flick duration is
    /// returned instead.
    pub fn time_to_reach(&self, d: f64, v0: f64) -> f64 {
        if d == 0.0 || v0 == 0.0 || d.signum() != v0.signum() {
            return 0.0;
        }
        let arg = 1.0 + self.coefficient() * d / v0;
        if arg <= 0.0 {
            return self.duration(v0);
        }
        (arg.ln() / self.coefficient()).max(0.0)
    }
}
