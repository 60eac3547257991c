//! Haptic feedback rendered as short visual pulses.
//!
//! Light impacts (ticks) light up the cursor, anything stronger (bounds)
//! lights up the border and may ring the bell.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use rulerkit_core::{Haptics, Impact};

/// Pulse length at full intensity.
const PULSE_DURATION: Duration = Duration::from_millis(150);

#[derive(Debug, Default)]
struct Pulses {
    cursor_until: Option<Instant>,
    border_until: Option<Instant>,
    bell: bool,
}

/// Shared handle: one clone goes into the engine, the app keeps another.
#[derive(Debug, Clone, Default)]
pub struct TerminalHaptics {
    pulses: Rc<RefCell<Pulses>>,
    bell_on_boundary: bool,
}

impl TerminalHaptics {
    pub fn new(bell_on_boundary: bool) -> Self {
        Self {
            pulses: Rc::default(),
            bell_on_boundary,
        }
    }

    pub fn pulse(&self, style: Impact, intensity: f64, now: Instant) {
        let length = PULSE_DURATION.mul_f64(intensity.clamp(0.1, 1.0));
        let mut pulses = self.pulses.borrow_mut();
        match style {
            Impact::Light | Impact::Soft => pulses.cursor_until = Some(now + length),
            Impact::Medium | Impact::Heavy | Impact::Rigid => {
                pulses.border_until = Some(now + length);
                pulses.bell |= self.bell_on_boundary;
            }
        }
    }

    pub fn cursor_lit(&self, now: Instant) -> bool {
        self.pulses.borrow().cursor_until.is_some_and(|until| now < until)
    }

    pub fn border_lit(&self, now: Instant) -> bool {
        self.pulses.borrow().border_until.is_some_and(|until| now < until)
    }

    /// Whether a pulse still needs redraws to fade out.
    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.cursor_lit(now) || self.border_lit(now)
    }

    /// Consume a pending bell request.
    pub fn take_bell(&self) -> bool {
        std::mem::take(&mut self.pulses.borrow_mut().bell)
    }
}

impl Haptics for TerminalHaptics {
    fn impact(&mut self, style: Impact, intensity: f64) {
        self.pulse(style, intensity, Instant::now());
    }
}
