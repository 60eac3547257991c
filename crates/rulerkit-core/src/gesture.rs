//! Gesture input fed to the ruler by the host.
//!
//! Hosts translate whatever pointer system they have into a single stream of
//! [`GestureEvent`]s and hand each one to
//! [`SlidingRuler::handle_gesture`](crate::SlidingRuler::handle_gesture).

use serde::{Deserialize, Serialize};

/// Two-component vector in virtual pixels (or pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Direction the scale runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// Component of `v` along this axis.
    #[inline]
    pub fn primary(self, v: Vec2) -> f64 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Vector with `value` on this axis and zero on the other one.
    pub fn vector(self, value: f64) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(value, 0.0),
            Axis::Vertical => Vec2::new(0.0, value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
}

/// One drag sample. `translation` is cumulative since the drag began.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    pub phase: GesturePhase,
    pub translation: Vec2,
    pub velocity: Vec2,
    pub location: Vec2,
}

impl GestureSample {
    pub fn new(phase: GesturePhase, translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase,
            translation,
            velocity,
            location: Vec2::ZERO,
        }
    }

    pub fn at(mut self, location: Vec2) -> Self {
        self.location = location;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GestureEvent {
    /// Finger down, delivered before any sample
    TouchDown,
    Sample(GestureSample),
    /// Finger lifted without the drag ever starting
    EndedWithoutDrag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_primary() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(Axis::Horizontal.primary(v), 3.0);
        assert_eq!(Axis::Vertical.primary(v), -4.0);
        assert_eq!(Axis::Vertical.vector(2.0), Vec2::new(0.0, 2.0));
    }
}
