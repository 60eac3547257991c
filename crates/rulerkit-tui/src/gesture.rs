//! Mouse to gesture bridging.
//!
//! Terminals report pointer positions in cells. The bridge scales them to
//! the engine's virtual pixels and turns press/drag/release into the
//! touch-down, began/changed/ended and ended-without-drag events a
//! touchscreen pan would produce.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use rulerkit_core::{GestureEvent, GesturePhase, GestureSample, Vec2};

/// Only samples this recent contribute to the release velocity.
const VELOCITY_HORIZON: Duration = Duration::from_millis(100);

/// Pointer velocity over a short trailing window.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: VecDeque<(Instant, Vec2)>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, at: Instant, position: Vec2) {
        self.samples.push_back((at, position));
        self.prune(at);
    }

    /// Velocity in pixels per second as seen at `now`.
    ///
    /// Zero when fewer than two samples fall inside the horizon, which is
    /// what a pointer that stopped before release looks like.
    pub fn velocity(&self, now: Instant) -> Vec2 {
        let mut recent = self
            .samples
            .iter()
            .filter(|(at, _)| now.saturating_duration_since(*at) <= VELOCITY_HORIZON);

        let Some(&(first_at, first)) = recent.next() else {
            return Vec2::ZERO;
        };
        let Some(&(last_at, last)) = recent.last() else {
            return Vec2::ZERO;
        };

        let dt = last_at.saturating_duration_since(first_at).as_secs_f64();
        if dt <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new((last.x - first.x) / dt, (last.y - first.y) / dt)
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    fn prune(&mut self, now: Instant) {
        while let Some(&(at, _)) = self.samples.front() {
            if now.saturating_duration_since(at) > VELOCITY_HORIZON {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Vec2,
    dragging: bool,
}

/// Turns left-button mouse events into ruler gestures.
#[derive(Debug, Clone)]
pub struct MouseBridge {
    pixels_per_column: f64,
    pixels_per_row: f64,
    area: Rect,
    press: Option<Press>,
    last_position: Vec2,
    tracker: VelocityTracker,
}

impl MouseBridge {
    pub fn new(pixels_per_column: f64, pixels_per_row: f64) -> Self {
        Self {
            pixels_per_column,
            pixels_per_row,
            area: Rect::default(),
            press: None,
            last_position: Vec2::ZERO,
            tracker: VelocityTracker::new(),
        }
    }

    /// Screen area that accepts presses. Drags may leave it.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Cell position scaled to virtual pixels.
    pub fn to_pixels(&self, column: u16, row: u16) -> Vec2 {
        Vec2::new(
            column as f64 * self.pixels_per_column,
            row as f64 * self.pixels_per_row,
        )
    }

    /// Translate one mouse event observed at `now`.
    pub fn handle(&mut self, event: &MouseEvent, now: Instant) -> Vec<GestureEvent> {
        let position = self.to_pixels(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.area.contains(Position::new(event.column, event.row)) {
                    return Vec::new();
                }
                self.press = Some(Press {
                    origin: position,
                    dragging: false,
                });
                self.last_position = position;
                self.tracker.reset();
                self.tracker.add(now, position);
                vec![GestureEvent::TouchDown]
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(press) = self.press.as_mut() else {
                    return Vec::new();
                };
                if position == self.last_position {
                    return Vec::new();
                }
                self.last_position = position;
                self.tracker.add(now, position);

                let translation = delta(press.origin, position);
                let velocity = self.tracker.velocity(now);
                let mut events = Vec::with_capacity(2);
                if !press.dragging {
                    press.dragging = true;
                    events.push(GestureEvent::Sample(
                        GestureSample::new(GesturePhase::Began, Vec2::ZERO, Vec2::ZERO)
                            .at(press.origin),
                    ));
                }
                events.push(GestureEvent::Sample(
                    GestureSample::new(GesturePhase::Changed, translation, velocity).at(position),
                ));
                events
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(press) = self.press.take() else {
                    return Vec::new();
                };
                if !press.dragging {
                    return vec![GestureEvent::EndedWithoutDrag];
                }
                self.tracker.add(now, position);
                let velocity = self.tracker.velocity(now);
                let translation = delta(press.origin, position);
                tracing::debug!(
                    translation_x = translation.x,
                    velocity_x = velocity.x,
                    velocity_y = velocity.y,
                    "Pointer released"
                );
                vec![GestureEvent::Sample(
                    GestureSample::new(GesturePhase::Ended, translation, velocity).at(position),
                )]
            }
            _ => Vec::new(),
        }
    }
}

fn delta(from: Vec2, to: Vec2) -> Vec2 {
    Vec2::new(to.x - from.x, to.y - from.y)
}
