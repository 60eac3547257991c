//! Pure kinematics used by the ruler's animations.
//!
//! - `inertia` - exponential velocity decay for flicks
//! - `spring` - critically damped return-to-target spring
//!
//! Everything here is stateless and deterministic. Time is in seconds,
//! distances in pixels, velocities in pixels per second.

pub mod inertia;
pub mod spring;

use std::time::Duration;

use crate::config::EasingType;
use crate::error::{Error, Result};

pub use inertia::Deceleration;

/// Release speed (px/s) above which a drag becomes a flick.
pub const FLICK_VELOCITY_THRESHOLD: f64 = 90.0;

/// Rubber band stiffness.
pub const RUBBER_COEFFICIENT: f64 = 0.55;

/// Length of the snap ease-out.
pub const SNAP_DURATION: Duration = Duration::from_millis(100);

/// Engine tunables, validated once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub deceleration: Deceleration,
    pub flick_velocity_threshold: f64,
    pub rubber_coefficient: f64,
    pub snap_duration: Duration,
    pub snap_easing: EasingType,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            deceleration: Deceleration::default(),
            flick_velocity_threshold: FLICK_VELOCITY_THRESHOLD,
            rubber_coefficient: RUBBER_COEFFICIENT,
            snap_duration: SNAP_DURATION,
            snap_easing: EasingType::EaseOut,
        }
    }
}

impl Physics {
    pub fn new(
        deceleration: Deceleration,
        flick_velocity_threshold: f64,
        rubber_coefficient: f64,
        snap_duration: Duration,
        snap_easing: EasingType,
    ) -> Result<Self> {
        if !(flick_velocity_threshold >= 0.0 && flick_velocity_threshold.is_finite()) {
            return Err(Error::InvalidPhysics(format!(
                "flick velocity threshold {flick_velocity_threshold} must be a finite number >= 0"
            )));
        }
        if !(rubber_coefficient > 0.0 && rubber_coefficient.is_finite()) {
            return Err(Error::InvalidPhysics(format!(
                "rubber coefficient {rubber_coefficient} must be a positive number"
            )));
        }
        Ok(Self {
            deceleration,
            flick_velocity_threshold,
            rubber_coefficient,
            snap_duration,
            snap_easing,
        })
    }
}
