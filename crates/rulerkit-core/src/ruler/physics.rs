use tracing::debug;

use super::{Animation, SlidingRuler};
use crate::animation::timing::seconds;
use crate::kinematics::spring;
use crate::state::ControlState;

impl SlidingRuler {
    /// Start a flick with `v0` (offset px/s) from the current drag offset.
    pub(super) fn apply_inertia(&mut self, v0: f64) {
        self.reference_offset = self.drag_offset;

        let deceleration = self.physics.deceleration;
        let total = deceleration.total_distance(v0);
        let final_offset = self.reference_offset + total;
        let drag_bounds = self.drag_bounds();

        if drag_bounds.contains(final_offset) {
            let duration = deceleration.duration(v0);
            debug!(v0, total, duration, "Flick inside bounds");
            self.start_timer(seconds(duration), Animation::Inertia { v0, total });
        } else {
            let allowed = drag_bounds.clamp(final_offset) - self.reference_offset;
            let duration = deceleration.time_to_reach(allowed, v0);
            debug!(v0, allowed, duration, "Flick will hit a bound");
            self.start_timer(
                seconds(duration),
                Animation::BoundedInertia {
                    v0,
                    allowed,
                    duration,
                },
            );
        }
        self.set_state(ControlState::Flicking);
    }

    /// Move the scale to `reference + distance`, updating value and ticks.
    pub(super) fn shift_offset(&mut self, distance: f64) {
        let new_offset = self.reference_offset + distance;
        let new_value = self.mapper.value_from_offset(new_offset);

        self.tick_if_needed(self.drag_offset, new_offset);
        self.set_value(new_value);
        self.drag_offset = new_offset;
    }

    pub(super) fn is_rubber_band_needing_release(&self) -> bool {
        !self.drag_bounds().contains(self.drag_offset)
    }

    /// Compress an out-of-bounds offset towards its bound.
    ///
    /// The overshoot approaches but never reaches the control extent. Until
    /// the extent is known offsets are passed through unchanged.
    pub(super) fn apply_rubber(&self, offset: f64) -> f64 {
        let drag_bounds = self.drag_bounds();
        if drag_bounds.contains(offset) {
            return offset;
        }
        let Some(extent) = self.control_extent else {
            return offset;
        };

        let limit = drag_bounds.clamp(offset);
        let delta = (offset - limit).abs();
        let sign = if offset < limit { -1.0 } else { 1.0 };
        let c = self.physics.rubber_coefficient;
        let rubber_delta = (1.0 - 1.0 / (c * delta / extent + 1.0)) * extent * sign;

        limit + rubber_delta
    }

    /// Spring the scale back inside the drag bounds.
    pub(super) fn release_rubber_band(&mut self) {
        let target = self.drag_bounds().clamp(self.drag_offset);
        let displacement = self.drag_offset - target;
        let duration = spring::duration(0.0, displacement.abs());

        self.set_state(ControlState::Springing);
        self.start_timer(
            seconds(duration),
            Animation::Rubber {
                target,
                v0: 0.0,
                displacement,
            },
        );
    }

    /// Let a flick that hit a bound overshoot with its remaining speed, then
    /// spring back to that bound.
    pub(super) fn apply_inertial_rubber(&mut self, residual_velocity: f64) {
        let duration = spring::duration(residual_velocity.abs(), 0.0);
        let target = self.drag_bounds().nearest_bound(self.drag_offset);

        self.set_state(ControlState::Springing);
        self.start_timer(
            seconds(duration),
            Animation::Rubber {
                target,
                v0: residual_velocity,
                displacement: 0.0,
            },
        );
    }
}
