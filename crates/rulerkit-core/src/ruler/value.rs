use super::SlidingRuler;
use crate::haptics::BOUNDARY_IMPACT;
use crate::range::approximated;

impl SlidingRuler {
    pub(super) fn clamped_value(&self) -> f64 {
        self.bounds.clamp(self.binding.get())
    }

    /// Write a value, clamped to the bounds.
    ///
    /// Reaching a bound from inside fires the boundary haptic once. The
    /// binding is only written when the value actually changes.
    pub(super) fn set_value(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        let clamped = self.bounds.clamp(value);
        if !clamped.is_finite() {
            return;
        }

        let current = self.binding.get();
        if self.bounds.is_bound(clamped) && !self.bounds.is_bound(current) {
            self.boundary_met();
        }

        self.last_value_set = clamped;
        if current != clamped {
            self.binding.set(clamped);
        }
    }

    fn boundary_met(&mut self) {
        let (style, intensity) = BOUNDARY_IMPACT;
        tracing::debug!(value = self.binding.get(), "Boundary met");
        self.haptics.impact(style, intensity);
    }

    /// Settle the value on the snap grid when it is close enough.
    pub(super) fn snap_if_needed(&mut self) {
        let value = self.binding.get();
        let Some(nearest) = self.nearest_snap_value(value) else {
            return;
        };
        if nearest == value {
            return;
        }

        let delta = (nearest - value).abs();
        let fractional_value = self.step / self.style.fractions as f64;
        if delta >= fractional_value {
            return;
        }

        self.drag_offset = self.mapper.offset_from_value(nearest);
        self.set_value(nearest);

        let animation_threshold = self.step / 200.0;
        if delta > animation_threshold && !self.physics.snap_duration.is_zero() {
            let easing = self.physics.snap_easing;
            self.start_ease(value, nearest, self.physics.snap_duration, easing);
        }
        tracing::debug!(from = value, to = nearest, "Snapped");
    }

    /// Closest grid value. Equal distances resolve to the lower candidate.
    pub(super) fn nearest_snap_value(&self, value: f64) -> Option<f64> {
        let t = self.snap.grid(self.step, self.style.fractions)?;

        let lower = approximated((value / t).floor() * t);
        let upper = approximated((value / t).ceil() * t);
        let delta_down = approximated((value - lower).abs());
        let delta_up = approximated((value - upper).abs());

        Some(if delta_down <= delta_up { lower } else { upper })
    }
}
