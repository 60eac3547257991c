//! Duration-bounded, cancellable frame timer.
//!
//! The host drives time by calling [`AnimationTimer::advance`] once per frame
//! with the elapsed delta. While the accumulated time is below the duration
//! each call yields a [`TimerEvent::Frame`]; the first call at or past it
//! yields [`TimerEvent::Completed`] and the timer stops. [`cancel`] stops it
//! early. A timer resolves exactly once, either way.
//!
//! [`cancel`]: AnimationTimer::cancel

use std::time::Duration;

use super::timing::is_complete;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerEvent {
    /// Still running. Both values are in seconds.
    Frame { elapsed: f64, interval: f64 },
    /// Reached its duration on this advance.
    Completed,
    /// Already completed or cancelled.
    Inactive,
}

/// Frame timer carrying what it animates as `payload`.
#[derive(Debug, Clone)]
pub struct AnimationTimer<A> {
    duration: Duration,
    elapsed: Duration,
    running: bool,
    payload: A,
}

impl<A> AnimationTimer<A> {
    pub fn new(duration: Duration, payload: A) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            running: true,
            payload,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn payload(&self) -> &A {
        &self.payload
    }

    pub fn into_payload(self) -> A {
        self.payload
    }

    pub fn advance(&mut self, delta: Duration) -> TimerEvent {
        if !self.running {
            return TimerEvent::Inactive;
        }
        self.elapsed = self.elapsed.saturating_add(delta);
        if !is_complete(self.elapsed, self.duration) {
            TimerEvent::Frame {
                elapsed: self.elapsed.as_secs_f64(),
                interval: delta.as_secs_f64(),
            }
        } else {
            self.running = false;
            TimerEvent::Completed
        }
    }

    /// Stop the timer. Returns `true` only for the call that actually stopped it.
    pub fn cancel(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }
}
