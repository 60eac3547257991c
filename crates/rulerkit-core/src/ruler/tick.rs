use super::SlidingRuler;
use crate::haptics::TICK_IMPACT;
use crate::range::approximated;
use crate::style::RulerStyle;

impl SlidingRuler {
    /// Light haptic when the move from `offset0` to `offset1` crosses a
    /// graduation. Moves touching or leaving the drag bounds never tick.
    pub(super) fn tick_if_needed(&mut self, offset0: f64, offset1: f64) {
        let drag_bounds = self.drag_bounds();
        if !drag_bounds.contains(offset0)
            || !drag_bounds.contains(offset1)
            || drag_bounds.is_bound(offset0)
            || drag_bounds.is_bound(offset1)
        {
            return;
        }

        let Some(t) = self.tick.spacing(
            self.style.cell_width,
            self.style.fractions,
            self.style.has_half(),
        ) else {
            return;
        };

        if offset1 == 0.0
            || (offset0 < 0.0) != (offset1 < 0.0)
            || approximated(offset0 / t).trunc() != approximated(offset1 / t).trunc()
        {
            let (style, intensity) = TICK_IMPACT;
            tracing::trace!(offset0, offset1, "Tick");
            self.haptics.impact(style, intensity);
        }
    }
}
