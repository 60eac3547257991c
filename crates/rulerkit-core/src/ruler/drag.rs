use tracing::debug;

use super::SlidingRuler;
use crate::gesture::GestureSample;
use crate::state::ControlState;

impl SlidingRuler {
    /// First contact, before any drag sample. Stops a flick or spring in place.
    pub(super) fn touch_down(&mut self) {
        match self.state {
            ControlState::Flicking => {
                self.cancel_timer();
                self.set_state(ControlState::StoppedFlick);
            }
            ControlState::Springing => {
                self.cancel_timer();
                self.set_state(ControlState::StoppedSpring);
            }
            _ => {}
        }
    }

    /// The finger lifted without the drag starting.
    pub(super) fn gesture_ended_without_drag(&mut self) {
        match self.state {
            ControlState::StoppedFlick => {
                self.set_state(ControlState::Idle);
                self.snap_if_needed();
            }
            ControlState::StoppedSpring => self.release_rubber_band(),
            _ => {}
        }
    }

    pub(super) fn drag_began(&mut self) {
        // A touch has already stopped flicks and springs, only eases remain.
        self.cancel_timer();
        (self.on_editing_changed)(true);
        if self.state != ControlState::StoppedSpring {
            let value = self.clamped_value();
            if value.is_finite() {
                self.drag_offset = self.mapper.offset_from_value(value);
            }
        }
        self.reference_offset = self.drag_offset;
        debug!(reference_offset = self.reference_offset, "Drag began");
        self.set_state(ControlState::Dragging);
    }

    pub(super) fn drag_changed(&mut self, sample: &GestureSample) {
        if self.state != ControlState::Dragging {
            return;
        }
        let translation = self
            .mapper
            .axis
            .primary(self.mapper.directional_vector(sample.translation));
        let new_offset = self.reference_offset + translation;
        if !new_offset.is_finite() {
            return;
        }
        let new_value = self.mapper.value_from_offset(new_offset);

        self.tick_if_needed(self.drag_offset, new_offset);
        self.set_value(new_value);
        self.drag_offset = self.apply_rubber(new_offset);
    }

    pub(super) fn drag_ended(&mut self, sample: &GestureSample) {
        if self.state != ControlState::Dragging {
            return;
        }
        let velocity = self
            .mapper
            .axis
            .primary(self.mapper.directional_vector(sample.velocity));

        if self.is_rubber_band_needing_release() {
            self.release_rubber_band();
            self.end_drag_session();
        } else if velocity.abs() > self.physics.flick_velocity_threshold {
            self.apply_inertia(velocity);
        } else {
            self.set_state(ControlState::Idle);
            self.end_drag_session();
            self.snap_if_needed();
        }
    }

    pub(super) fn end_drag_session(&mut self) {
        self.reference_offset = 0.0;
        debug!(value = self.binding.get(), "Drag session ended");
        (self.on_editing_changed)(false);
    }
}
