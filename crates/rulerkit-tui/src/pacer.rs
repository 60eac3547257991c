use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// Frame clock for animations.
///
/// Yields the time elapsed since the previous frame so the engine can
/// advance by real time even when frames are dropped.
#[derive(Debug)]
pub struct FramePacer {
    interval: Interval,
    last: Instant,
}

impl FramePacer {
    pub fn new(frame_interval: Duration) -> Self {
        let mut interval = time::interval(frame_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            interval,
            last: Instant::now(),
        }
    }

    /// Wait for the next frame.
    pub async fn tick(&mut self) -> Duration {
        let now = self.interval.tick().await;
        let delta = now.saturating_duration_since(self.last);
        self.last = now;
        delta
    }

    /// Forget the time spent idle so the next frame does not jump.
    pub fn resume(&mut self) {
        self.interval.reset();
        self.last = Instant::now();
    }
}
