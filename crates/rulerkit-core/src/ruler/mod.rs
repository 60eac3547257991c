//! The sliding ruler engine.
//!
//! [`SlidingRuler`] owns the offsets, the control state and the one running
//! animation. The host feeds it gestures ([`SlidingRuler::handle_gesture`]),
//! frame ticks ([`SlidingRuler::on_frame`]) and its visible extent
//! ([`SlidingRuler::set_control_extent`]), and draws whatever
//! [`SlidingRuler::render`] returns.
//!
//! The behaviour is split by concern:
//!
//! - `drag` - gesture session: touch, began, changed, ended
//! - `physics` - inertia, rubber banding and the springs that release it
//! - `value` - writing the bound value and snapping it to the grid
//! - `tick` - graduation haptics

mod drag;
mod physics;
mod tick;
mod value;

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, trace};

use crate::animation::{timing, AnimationTimer, EasingType, TimerEvent};
use crate::binding::ValueBinding;
use crate::cells::{CellConfiguration, CellWindow};
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::gesture::{GestureEvent, GesturePhase};
use crate::haptics::{Haptics, NoHaptics};
use crate::kinematics::{spring, Physics};
use crate::mapping::{LayoutDirection, Mapper};
use crate::policy::{SnapPolicy, TickPolicy};
use crate::range::Bounds;
use crate::state::ControlState;
use crate::style::{RulerStyle, StyleMetrics};

/// Default number of extra cells rendered past each edge.
pub const DEFAULT_CELL_OVERFLOW: u32 = 3;

type EditingCallback = Box<dyn FnMut(bool)>;
type Formatter = Box<dyn Fn(f64) -> String>;

/// What the running timer animates.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Animation {
    /// Flick whose projected end lies inside the drag bounds.
    Inertia { v0: f64, total: f64 },
    /// Flick cut short at a bound, handing its residual speed to a spring.
    BoundedInertia { v0: f64, allowed: f64, duration: f64 },
    /// Spring from `target + displacement` back to `target`.
    Rubber { target: f64, v0: f64, displacement: f64 },
    /// Eased rendered value, the bound value is already at `to`.
    Ease { from: f64, to: f64, easing: EasingType },
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    /// Value under the cursor
    pub value: f64,
    /// Scale offset along the axis, mirrored for right-to-left layouts
    pub offset: f64,
    /// `offset` wrapped to the cell strip's period
    pub wrapped_offset: f64,
    /// Whole cells the labels are shifted by
    pub mark_offset: f64,
    pub state: ControlState,
    #[serde(skip)]
    pub cells: Vec<CellConfiguration>,
}

pub struct SlidingRuler {
    binding: Box<dyn ValueBinding>,
    bounds: Bounds,
    step: f64,
    snap: SnapPolicy,
    tick: TickPolicy,
    style: StyleMetrics,
    mapper: Mapper,
    physics: Physics,
    haptics: Box<dyn Haptics>,
    on_editing_changed: EditingCallback,
    formatter: Option<Formatter>,

    cells: CellWindow,
    control_extent: Option<f64>,

    state: ControlState,
    pending_state: Option<ControlState>,
    reference_offset: f64,
    drag_offset: f64,
    animated_value: f64,
    last_value_set: f64,
    timer: Option<AnimationTimer<Animation>>,
}

impl std::fmt::Debug for SlidingRuler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlidingRuler")
            .field("value", &self.binding.get())
            .field("bounds", &self.bounds)
            .field("step", &self.step)
            .field("state", &self.state)
            .field("drag_offset", &self.drag_offset)
            .finish_non_exhaustive()
    }
}

impl SlidingRuler {
    pub fn builder(binding: impl ValueBinding + 'static) -> RulerBuilder {
        RulerBuilder::new(binding)
    }

    #[inline]
    pub fn state(&self) -> ControlState {
        self.state
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.binding.get()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn snap_policy(&self) -> SnapPolicy {
        self.snap
    }

    pub fn tick_policy(&self) -> TickPolicy {
        self.tick
    }

    pub fn style(&self) -> &StyleMetrics {
        &self.style
    }

    pub fn physics(&self) -> &Physics {
        &self.physics
    }

    pub fn direction(&self) -> LayoutDirection {
        self.mapper.direction
    }

    pub fn drag_offset(&self) -> f64 {
        self.drag_offset
    }

    pub fn control_extent(&self) -> Option<f64> {
        self.control_extent
    }

    /// Whether a timer-driven animation is running.
    pub fn is_animating(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| t.is_running())
    }

    /// Offsets the scale may rest at.
    pub fn drag_bounds(&self) -> Bounds {
        self.mapper.drag_bounds(&self.bounds)
    }

    /// Label for a mark or value, using the host formatter when one is set.
    pub fn format(&self, value: f64) -> String {
        match &self.formatter {
            Some(formatter) => formatter(value),
            None => format_mark(value, self.step),
        }
    }

    /// Visible size of the control along its axis, in virtual pixels.
    pub fn set_control_extent(&mut self, extent: f64) {
        if !(extent > 0.0 && extent.is_finite()) {
            return;
        }
        self.control_extent = Some(extent);
        self.cells.update_cells_if_needed(extent);
    }

    /// Feed one gesture event.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        self.apply_pending_state();
        match event {
            GestureEvent::TouchDown => self.touch_down(),
            GestureEvent::EndedWithoutDrag => self.gesture_ended_without_drag(),
            GestureEvent::Sample(sample) => match sample.phase {
                GesturePhase::Began => self.drag_began(),
                GesturePhase::Changed => self.drag_changed(&sample),
                GesturePhase::Ended => self.drag_ended(&sample),
            },
        }
    }

    /// Advance the running animation by `delta`.
    ///
    /// Returns `true` while another frame is wanted.
    pub fn on_frame(&mut self, delta: Duration) -> bool {
        self.apply_pending_state();

        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        match timer.advance(delta) {
            TimerEvent::Frame { elapsed, .. } => {
                let animation = *timer.payload();
                let duration = timer.duration();
                trace!(elapsed, state = %self.state, "Animation frame");
                self.step_animation(animation, elapsed, duration);
            }
            TimerEvent::Completed => {
                if let Some(timer) = self.timer.take() {
                    let animation = timer.into_payload();
                    debug!(?animation, "Animation completed");
                    self.finish_animation(animation);
                }
            }
            TimerEvent::Inactive => {
                self.timer = None;
            }
        }
        self.is_animating()
    }

    /// Move the value to `target`, easing the rendered value over `duration`.
    ///
    /// Ignored while a finger is on the ruler.
    pub fn animate_to(&mut self, target: f64, duration: Duration) {
        self.apply_pending_state();
        if self.is_touching() || target.is_nan() {
            return;
        }

        let from = self.rendered_value();
        self.cancel_timer();

        let to = self.bounds.clamp(target);
        if !to.is_finite() {
            return;
        }
        self.set_value(to);
        self.drag_offset = self.mapper.offset_from_value(to);

        if duration.is_zero() || from == to || !from.is_finite() {
            self.set_state(ControlState::Idle);
            return;
        }
        self.start_ease(from, to, duration, EasingType::Cubic);
    }

    /// Snapshot for the renderer.
    ///
    /// When the host changed the value behind a running animation the
    /// animation is abandoned and the fresh value is rendered; the state
    /// falls back to idle at the next event.
    pub fn render(&mut self) -> RenderSnapshot {
        let external_change = self.binding.get() != self.last_value_set;

        let (value, offset) = match self.state {
            ControlState::Flicking | ControlState::Springing | ControlState::Animating
                if external_change =>
            {
                debug!(
                    value = self.binding.get(),
                    last_value_set = self.last_value_set,
                    "Value changed externally, abandoning animation"
                );
                self.cancel_timer();
                self.pending_state = Some(ControlState::Idle);
                let value = self.clamped_value();
                (value, self.mapper.offset_from_value(value))
            }
            ControlState::Animating => {
                let value = self.animated_value;
                (value, self.mapper.offset_from_value(value))
            }
            ControlState::Idle => {
                let value = self.clamped_value();
                (value, self.mapper.offset_from_value(value))
            }
            ControlState::Dragging
            | ControlState::StoppedFlick
            | ControlState::StoppedSpring
            | ControlState::Flicking
            | ControlState::Springing => {
                let offset = self.drag_offset;
                (self.mapper.value_from_offset(offset), offset)
            }
        };

        let offset = self.mapper.directional(offset);
        let mark_offset = self.cells.mark_offset(value, self.step);
        RenderSnapshot {
            value,
            offset,
            wrapped_offset: self.cells.wrapped_offset(offset),
            mark_offset,
            state: self.state,
            cells: self
                .cells
                .cell_configurations(mark_offset, self.step, self.bounds),
        }
    }

    fn is_touching(&self) -> bool {
        matches!(
            self.state,
            ControlState::Dragging | ControlState::StoppedFlick | ControlState::StoppedSpring
        )
    }

    fn rendered_value(&self) -> f64 {
        match self.state {
            ControlState::Animating => self.animated_value,
            ControlState::Idle => self.clamped_value(),
            _ => self.mapper.value_from_offset(self.drag_offset),
        }
    }

    fn set_state(&mut self, state: ControlState) {
        if self.state != state {
            debug!(from = %self.state, to = %state, "Ruler state changed");
            self.state = state;
        }
    }

    fn apply_pending_state(&mut self) {
        if let Some(state) = self.pending_state.take() {
            self.set_state(state);
        }
    }

    /// Start a timer, resolving any previous one as cancelled first.
    fn start_timer(&mut self, duration: Duration, animation: Animation) {
        self.cancel_timer();
        debug!(?animation, duration_ms = duration.as_millis() as u64, "Animation started");
        self.timer = Some(AnimationTimer::new(duration, animation));
    }

    /// Cancel the running timer, if any. Safe to call repeatedly.
    fn cancel_timer(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            if timer.cancel() {
                let animation = timer.into_payload();
                debug!(?animation, "Animation cancelled");
                self.cancel_animation(animation);
            }
        }
    }

    fn start_ease(&mut self, from: f64, to: f64, duration: Duration, easing: EasingType) {
        self.animated_value = from;
        self.start_timer(duration, Animation::Ease { from, to, easing });
        self.set_state(ControlState::Animating);
    }

    fn step_animation(&mut self, animation: Animation, elapsed: f64, duration: Duration) {
        match animation {
            Animation::Inertia { v0, .. } | Animation::BoundedInertia { v0, .. } => {
                let distance = self.physics.deceleration.distance(elapsed, v0);
                self.shift_offset(distance);
            }
            Animation::Rubber {
                target,
                v0,
                displacement,
            } => {
                self.drag_offset = target + spring::value(elapsed, v0, displacement);
            }
            Animation::Ease { from, to, easing } => {
                let t = timing::progress(timing::seconds(elapsed), duration);
                self.animated_value = timing::lerp(from, to, easing.apply(t));
            }
        }
    }

    fn finish_animation(&mut self, animation: Animation) {
        match animation {
            Animation::Inertia { total, .. } => {
                self.set_state(ControlState::Idle);
                self.shift_offset(total);
                self.snap_if_needed();
                self.end_drag_session();
            }
            Animation::BoundedInertia {
                v0,
                allowed,
                duration,
            } => {
                self.shift_offset(allowed);
                let residual = self.physics.deceleration.velocity(duration, v0);
                self.apply_inertial_rubber(residual);
                self.end_drag_session();
            }
            Animation::Rubber { target, .. } => {
                self.drag_offset = target;
                self.set_state(ControlState::Idle);
                let value = self.mapper.value_from_offset(target);
                self.set_value(value);
            }
            Animation::Ease { to, .. } => {
                self.animated_value = to;
                self.set_state(ControlState::Idle);
            }
        }
    }

    fn cancel_animation(&mut self, animation: Animation) {
        match animation {
            Animation::Inertia { .. } | Animation::BoundedInertia { .. } => self.end_drag_session(),
            Animation::Rubber { .. } | Animation::Ease { .. } => {}
        }
    }
}

/// Compact label: as many decimals as the step needs, trailing zeros trimmed.
pub fn format_mark(value: f64, step: f64) -> String {
    let decimals = decimals_for(step);
    let text = format!("{:.*}", decimals, value);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

fn decimals_for(step: f64) -> usize {
    let mut decimals = 0;
    let mut scaled = step.abs();
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    // One more digit so fraction marks stay distinct.
    (decimals + 1).min(6)
}

/// Builds a [`SlidingRuler`], validating its configuration.
pub struct RulerBuilder {
    binding: Box<dyn ValueBinding>,
    lower: f64,
    upper: f64,
    step: f64,
    snap: SnapPolicy,
    tick: TickPolicy,
    style: StyleMetrics,
    direction: LayoutDirection,
    cell_overflow: u32,
    physics: Physics,
    haptics: Box<dyn Haptics>,
    on_editing_changed: EditingCallback,
    formatter: Option<Formatter>,
}

impl RulerBuilder {
    pub fn new(binding: impl ValueBinding + 'static) -> Self {
        Self {
            binding: Box::new(binding),
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
            step: 1.0,
            snap: SnapPolicy::None,
            tick: TickPolicy::None,
            style: StyleMetrics::default(),
            direction: LayoutDirection::LeftToRight,
            cell_overflow: DEFAULT_CELL_OVERFLOW,
            physics: Physics::default(),
            haptics: Box::new(NoHaptics),
            on_editing_changed: Box::new(|_| {}),
            formatter: None,
        }
    }

    /// Apply the `[ruler]`, `[style]` and `[physics]` sections of a config.
    pub fn configure(mut self, config: &AppConfig) -> Result<Self> {
        self.lower = config.ruler.min.unwrap_or(f64::NEG_INFINITY);
        self.upper = config.ruler.max.unwrap_or(f64::INFINITY);
        self.step = config.ruler.step;
        self.snap = config.ruler.snap;
        self.tick = config.ruler.tick;
        self.direction = config.ruler.direction;
        self.style = StyleMetrics::from_config(&config.style, config.ruler.axis);
        self.cell_overflow = config.style.cell_overflow;
        self.physics = config.physics.physics()?;
        Ok(self)
    }

    pub fn bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn snap(mut self, snap: SnapPolicy) -> Self {
        self.snap = snap;
        self
    }

    pub fn tick(mut self, tick: TickPolicy) -> Self {
        self.tick = tick;
        self
    }

    /// Take the metrics of any style.
    pub fn style(mut self, style: &dyn RulerStyle) -> Self {
        self.style = StyleMetrics::of(style);
        self
    }

    pub fn direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn cell_overflow(mut self, overflow: u32) -> Self {
        self.cell_overflow = overflow;
        self
    }

    pub fn physics(mut self, physics: Physics) -> Self {
        self.physics = physics;
        self
    }

    pub fn haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    pub fn on_editing_changed(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_editing_changed = Box::new(callback);
        self
    }

    pub fn formatter(mut self, formatter: impl Fn(f64) -> String + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    pub fn build(self) -> Result<SlidingRuler> {
        if !(self.step > 0.0 && self.step.is_finite()) {
            return Err(Error::InvalidStep(self.step));
        }
        let bounds = Bounds::new(self.lower, self.upper)?;
        if !(self.style.cell_width > 0.0 && self.style.cell_width.is_finite()) {
            return Err(Error::InvalidCellWidth(self.style.cell_width));
        }
        if self.style.fractions == 0 {
            return Err(Error::InvalidFractions(self.style.fractions));
        }

        let mapper = Mapper {
            cell_width: self.style.cell_width,
            step: self.step,
            direction: self.direction,
            axis: self.style.axis,
        };
        let initial = self.binding.get();
        let clamped = bounds.clamp(initial);
        let drag_offset = if clamped.is_finite() {
            mapper.offset_from_value(clamped)
        } else {
            0.0
        };

        debug!(
            lower = bounds.lower(),
            upper = bounds.upper(),
            step = self.step,
            snap = self.snap.name(),
            tick = self.tick.name(),
            "Sliding ruler built"
        );

        Ok(SlidingRuler {
            binding: self.binding,
            bounds,
            step: self.step,
            snap: self.snap,
            tick: self.tick,
            style: self.style,
            mapper,
            physics: self.physics,
            haptics: self.haptics,
            on_editing_changed: self.on_editing_changed,
            formatter: self.formatter,
            cells: CellWindow::new(self.style.cell_width, self.cell_overflow),
            control_extent: None,
            state: ControlState::Idle,
            pending_state: None,
            reference_offset: 0.0,
            drag_offset,
            animated_value: clamped,
            last_value_set: initial,
            timer: None,
        })
    }
}

#[cfg(test)]
mod tests;
