use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::*;
use crate::binding::SharedValue;
use crate::gesture::{Axis, GestureSample, Vec2};
use crate::haptics::{Impact, RecordingHaptics};

const FRAME: Duration = Duration::from_millis(16);

struct Harness {
    ruler: SlidingRuler,
    value: SharedValue,
    haptics: RecordingHaptics,
    editing: Rc<RefCell<Vec<bool>>>,
}

fn harness_with(
    value: f64,
    lower: f64,
    upper: f64,
    cell_width: f64,
    configure: impl FnOnce(RulerBuilder) -> RulerBuilder,
) -> Harness {
    let shared = SharedValue::new(value);
    let haptics = RecordingHaptics::new();
    let editing = Rc::new(RefCell::new(Vec::new()));
    let log = editing.clone();

    let builder = SlidingRuler::builder(shared.clone())
        .bounds(lower, upper)
        .step(1.0)
        .style(&StyleMetrics {
            cell_width,
            ..Default::default()
        })
        .haptics(haptics.clone())
        .on_editing_changed(move |editing| log.borrow_mut().push(editing));
    let ruler = configure(builder).build().unwrap();

    Harness {
        ruler,
        value: shared,
        haptics,
        editing,
    }
}

fn harness(value: f64, lower: f64, upper: f64, cell_width: f64) -> Harness {
    harness_with(value, lower, upper, cell_width, |b| b)
}

fn sample(phase: GesturePhase, translation: f64, velocity: f64) -> GestureEvent {
    GestureEvent::Sample(GestureSample::new(
        phase,
        Vec2::new(translation, 0.0),
        Vec2::new(velocity, 0.0),
    ))
}

impl Harness {
    fn drag(&mut self, translations: &[f64], release_velocity: f64) {
        self.ruler.handle_gesture(GestureEvent::TouchDown);
        self.ruler.handle_gesture(sample(GesturePhase::Began, 0.0, 0.0));
        let mut last = 0.0;
        for &t in translations {
            self.ruler.handle_gesture(sample(GesturePhase::Changed, t, 0.0));
            last = t;
        }
        self.ruler
            .handle_gesture(sample(GesturePhase::Ended, last, release_velocity));
    }

    /// Run frames until the ruler stops asking for them, recording states.
    fn settle(&mut self) -> Vec<ControlState> {
        let mut states = vec![self.ruler.state()];
        for _ in 0..2000 {
            let more = self.ruler.on_frame(FRAME);
            if states.last() != Some(&self.ruler.state()) {
                states.push(self.ruler.state());
            }
            if !more {
                break;
            }
        }
        states
    }
}

#[test]
fn test_build_validates_configuration() {
    let value = SharedValue::new(0.0);
    let err = SlidingRuler::builder(value.clone()).step(0.0).build().unwrap_err();
    assert!(matches!(err, Error::InvalidStep(_)));

    let err = SlidingRuler::builder(value.clone())
        .bounds(5.0, 1.0)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidBounds { .. }));

    let err = SlidingRuler::builder(value.clone())
        .style(&StyleMetrics {
            cell_width: 0.0,
            ..Default::default()
        })
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidCellWidth(_)));

    let err = SlidingRuler::builder(value)
        .style(&StyleMetrics {
            fractions: 0,
            ..Default::default()
        })
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidFractions(0)));
}

#[test]
fn test_configure_from_app_config() {
    let mut config = AppConfig::default();
    config.ruler.min = Some(0.0);
    config.ruler.max = Some(50.0);
    config.ruler.step = 5.0;
    config.ruler.snap = SnapPolicy::Half;
    config.style.cell_width = 80.0;

    let ruler = SlidingRuler::builder(SharedValue::new(10.0))
        .configure(&config)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(ruler.step(), 5.0);
    assert_eq!(ruler.snap_policy(), SnapPolicy::Half);
    assert_eq!(ruler.style().cell_width, 80.0);
    assert_eq!(ruler.drag_bounds().lower(), -800.0);
}

#[test]
fn test_drag_maps_translation_to_value() {
    let mut h = harness(0.0, 0.0, 10.0, 100.0);
    h.ruler.set_control_extent(400.0);
    h.drag(&[-100.0, -250.0], 0.0);

    assert!((h.value.get() - 2.5).abs() < 1e-9);
    assert!(h.haptics.impacts().is_empty());
    assert_eq!(h.ruler.state(), ControlState::Idle);
    assert_eq!(*h.editing.borrow(), vec![true, false]);
}

#[test]
fn test_value_never_leaves_bounds() {
    let mut h = harness(5.0, 0.0, 10.0, 100.0);
    h.ruler.set_control_extent(400.0);

    h.ruler.handle_gesture(sample(GesturePhase::Began, 0.0, 0.0));
    for t in [-5000.0, 3000.0, 12000.0, -40.0, f64::NAN] {
        h.ruler.handle_gesture(sample(GesturePhase::Changed, t, 0.0));
        let v = h.value.get();
        assert!((0.0..=10.0).contains(&v), "translation {t} gave {v}");
    }
}

#[test]
fn test_boundary_haptic_once_per_transition() {
    let mut h = harness(5.0, 0.0, 10.0, 100.0);
    h.ruler.set_control_extent(400.0);

    h.ruler.handle_gesture(sample(GesturePhase::Began, 0.0, 0.0));
    for t in [-600.0, -700.0, -800.0, -300.0, -650.0] {
        h.ruler.handle_gesture(sample(GesturePhase::Changed, t, 0.0));
    }
    assert_eq!(h.value.get(), 10.0);
    assert_eq!(h.haptics.count(Impact::Rigid), 2);
    assert!(h
        .haptics
        .impacts()
        .iter()
        .filter(|(s, _)| *s == Impact::Rigid)
        .all(|(_, i)| *i == 0.667));
}

#[test]
fn test_rubber_band_compresses_and_releases() {
    let mut h = harness(0.0, 0.0, 10.0, 100.0);
    h.ruler.set_control_extent(400.0);

    h.ruler.handle_gesture(sample(GesturePhase::Began, 0.0, 0.0));
    h.ruler.handle_gesture(sample(GesturePhase::Changed, -1400.0, 0.0));

    let overshoot = h.ruler.drag_offset() - -1000.0;
    assert!(overshoot < 0.0);
    assert!(overshoot.abs() < 400.0);
    let expected = (1.0 - 1.0 / (0.55 * 400.0 / 400.0 + 1.0)) * 400.0;
    assert!((overshoot.abs() - expected).abs() < 1e-9);

    h.ruler.handle_gesture(sample(GesturePhase::Ended, -1400.0, 0.0));
    assert_eq!(h.ruler.state(), ControlState::Springing);
    let states = h.settle();
    assert_eq!(states.last(), Some(&ControlState::Idle));
    assert_eq!(h.ruler.drag_offset(), -1000.0);
    assert_eq!(h.value.get(), 10.0);
}

#[test]
fn test_rubber_is_identity_inside_bounds() {
    let mut h = harness(0.0, 0.0, 10.0, 100.0);
    h.ruler.set_control_extent(400.0);
    for offset in [-1000.0, -500.0, 0.0] {
        assert_eq!(h.ruler.apply_rubber(offset), offset);
    }
}

#[test]
fn test_rubber_overshoot_stays_below_extent() {
    let extent = 400.0;
    let mut h = harness(0.0, 0.0, 10.0, 100.0);
    h.ruler.set_control_extent(extent);
    let (lower, upper) = (-1000.0, 0.0);

    let deltas = [1e-6, 0.5, 1.0, 10.0, 400.0, 1e4, 1e6, 1e9, 1e12];
    let mut previous = 0.0;
    for delta in deltas {
        let below = h.ruler.apply_rubber(lower - delta) - lower;
        let above = h.ruler.apply_rubber(upper + delta) - upper;

        assert!(below <= 0.0 && below.abs() < extent, "delta {delta}: {below}");
        assert!(above >= 0.0 && above.abs() < extent, "delta {delta}: {above}");
        assert!((below.abs() - above.abs()).abs() < 1e-6);
        assert!(above >= previous, "rubber shrank at delta {delta}");
        previous = above;
    }
}

#[test]
fn test_rubber_waits_for_layout() {
    let mut h = harness(0.0, 0.0, 10.0, 100.0);
    h.ruler.handle_gesture(sample(GesturePhase::Began, 0.0, 0.0));
    h.ruler.handle_gesture(sample(GesturePhase::Changed, -1400.0, 0.0));
    assert_eq!(h.ruler.drag_offset(), -1400.0);
    assert_eq!(h.value.get(), 10.0);
}

#[test]
fn test_flick_into_bound_springs_and_settles() {
    let mut h = harness(9.8, 0.0, 10.0, 100.0);
    h.ruler.set_control_extent(400.0);

    h.ruler.handle_gesture(GestureEvent::TouchDown);
    h.ruler.handle_gesture(sample(GesturePhase::Began, 0.0, 0.0));
    h.ruler.handle_gesture(sample(GesturePhase::Changed, 0.0, 0.0));
    h.ruler.handle_gesture(sample(GesturePhase::Ended, 0.0, -500.0));
    assert_eq!(h.ruler.state(), ControlState::Flicking);

    let states = h.settle();
    assert_eq!(
        states,
        vec![
            ControlState::Flicking,
            ControlState::Springing,
            ControlState::Idle
        ]
    );
    assert_eq!(h.value.get(), 10.0);
    assert_eq!(h.ruler.drag_offset(), -1000.0);
    assert_eq!(h.haptics.count(Impact::Rigid), 1);
    assert_eq!(*h.editing.borrow(), vec![true, false]);
}

#[test]
fn test_inertial_rubber_overshoots_past_bound() {
    let mut h = harness(9.8, 0.0, 10.0, 100.0);
    h.ruler.set_control_extent(400.0);
    h.drag(&[0.0], -500.0);

    let mut furthest: f64 = 0.0;
    for _ in 0..200 {
        let more = h.ruler.on_frame(FRAME);
        if h.ruler.state() == ControlState::Springing {
            furthest = furthest.min(h.ruler.drag_offset() + 1000.0);
        }
        if !more {
            break;
        }
    }
    assert!(furthest < 0.0, "spring never passed the bound");
    assert_eq!(h.ruler.state(), ControlState::Idle);
}

#[test]
fn test_flick_inside_bounds_decelerates_to_rest() {
    let mut h = harness(0.0, f64::NEG_INFINITY, f64::INFINITY, 120.0);
    h.ruler.set_control_extent(400.0);
    h.drag(&[-10.0], -300.0);
    assert_eq!(h.ruler.state(), ControlState::Flicking);
    assert_eq!(*h.editing.borrow(), vec![true]);

    let total = h.ruler.physics().deceleration.total_distance(-300.0);
    let states = h.settle();
    assert_eq!(states.last(), Some(&ControlState::Idle));

    let expected = h.ruler.mapper.value_from_offset(-10.0 + total);
    assert!((h.value.get() - expected).abs() < 1e-9);
    assert_eq!(*h.editing.borrow(), vec![true, false]);
}

#[test]
fn test_slow_release_does_not_flick() {
    let mut h = harness(0.0, f64::NEG_INFINITY, f64::INFINITY, 120.0);
    h.drag(&[-10.0], -90.0);
    assert_eq!(h.ruler.state(), ControlState::Idle);
}

#[test]
fn test_touch_stops_flick_then_snaps() {
    let mut h = harness_with(0.0, f64::NEG_INFINITY, f64::INFINITY, 100.0, |b| {
        b.snap(SnapPolicy::Unit)
    });
    h.drag(&[-10.0], -400.0);
    for _ in 0..3 {
        h.ruler.on_frame(FRAME);
    }

    h.ruler.handle_gesture(GestureEvent::TouchDown);
    assert_eq!(h.ruler.state(), ControlState::StoppedFlick);
    assert!(!h.ruler.is_animating());
    assert_eq!(*h.editing.borrow(), vec![true, false]);

    let stopped_at = h.value.get();
    h.ruler.handle_gesture(GestureEvent::EndedWithoutDrag);
    let nearest = stopped_at.round();
    if (nearest - stopped_at).abs() < 0.1 {
        assert_eq!(h.value.get(), nearest);
    } else {
        assert_eq!(h.value.get(), stopped_at);
        assert_eq!(h.ruler.state(), ControlState::Idle);
    }
}

#[test]
fn test_touch_stops_spring_then_releases() {
    let mut h = harness(0.0, 0.0, 10.0, 100.0);
    h.ruler.set_control_extent(400.0);
    h.drag(&[-1400.0], 0.0);
    h.ruler.on_frame(FRAME);
    assert_eq!(h.ruler.state(), ControlState::Springing);

    h.ruler.handle_gesture(GestureEvent::TouchDown);
    assert_eq!(h.ruler.state(), ControlState::StoppedSpring);
    let held = h.ruler.drag_offset();

    // Resuming a drag keeps the stretched offset.
    h.ruler.handle_gesture(sample(GesturePhase::Began, 0.0, 0.0));
    assert_eq!(h.ruler.drag_offset(), held);
    assert_eq!(h.ruler.state(), ControlState::Dragging);
}

#[test]
fn test_premature_end_releases_stopped_spring() {
    let mut h = harness(0.0, 0.0, 10.0, 100.0);
    h.ruler.set_control_extent(400.0);
    h.drag(&[-1400.0], 0.0);
    h.ruler.on_frame(FRAME);
    h.ruler.handle_gesture(GestureEvent::TouchDown);

    h.ruler.handle_gesture(GestureEvent::EndedWithoutDrag);
    assert_eq!(h.ruler.state(), ControlState::Springing);
    h.settle();
    assert_eq!(h.ruler.state(), ControlState::Idle);
    assert_eq!(h.ruler.drag_offset(), -1000.0);
}

#[test]
fn test_premature_end_is_noop_when_idle() {
    let mut h = harness(3.0, 0.0, 10.0, 100.0);
    h.ruler.handle_gesture(GestureEvent::EndedWithoutDrag);
    h.ruler.handle_gesture(GestureEvent::TouchDown);
    assert_eq!(h.ruler.state(), ControlState::Idle);
    assert_eq!(h.value.get(), 3.0);
}

#[test]
fn test_tick_fires_when_crossing_graduation() {
    let mut h = harness_with(0.0, f64::NEG_INFINITY, f64::INFINITY, 120.0, |b| {
        b.tick(TickPolicy::Unit)
    });
    h.ruler.handle_gesture(sample(GesturePhase::Began, 0.0, 0.0));
    h.ruler.handle_gesture(sample(GesturePhase::Changed, -119.0, 0.0));
    h.haptics.drain();

    h.ruler.handle_gesture(sample(GesturePhase::Changed, -121.0, 0.0));
    assert_eq!(h.haptics.drain(), vec![(Impact::Light, 0.5)]);

    h.ruler.handle_gesture(sample(GesturePhase::Changed, -125.0, 0.0));
    assert!(h.haptics.drain().is_empty());
}

#[test]
fn test_no_tick_on_or_past_bounds() {
    let mut h = harness_with(9.0, 0.0, 10.0, 100.0, |b| b.tick(TickPolicy::Fraction));
    h.ruler.set_control_extent(400.0);
    h.ruler.handle_gesture(sample(GesturePhase::Began, 0.0, 0.0));
    h.ruler.handle_gesture(sample(GesturePhase::Changed, -100.0, 0.0));
    h.ruler.handle_gesture(sample(GesturePhase::Changed, -150.0, 0.0));
    assert_eq!(h.haptics.count(Impact::Light), 0);
    assert_eq!(h.haptics.count(Impact::Rigid), 1);
}

#[test]
fn test_tick_none_never_fires() {
    let mut h = harness(0.0, f64::NEG_INFINITY, f64::INFINITY, 120.0);
    h.ruler.tick_if_needed(-119.0, -121.0);
    h.ruler.tick_if_needed(5.0, -5.0);
    assert!(h.haptics.impacts().is_empty());
}

#[test]
fn test_snap_eases_to_grid() {
    let mut h = harness_with(0.0, 0.0, 10.0, 100.0, |b| b.snap(SnapPolicy::Unit));
    h.ruler.set_control_extent(400.0);
    h.drag(&[-295.0], 0.0);

    assert_eq!(h.value.get(), 3.0);
    assert_eq!(h.ruler.state(), ControlState::Animating);
    let first = h.ruler.render();
    assert!((first.value - 2.95).abs() < 1e-9);

    h.settle();
    assert_eq!(h.ruler.state(), ControlState::Idle);
    assert_eq!(h.ruler.render().value, 3.0);

    // Already on the grid: nothing to do.
    h.ruler.snap_if_needed();
    assert_eq!(h.ruler.state(), ControlState::Idle);
    assert_eq!(h.value.get(), 3.0);
}

#[test]
fn test_tiny_snap_is_immediate() {
    let mut h = harness_with(0.0, 0.0, 10.0, 100.0, |b| b.snap(SnapPolicy::Unit));
    h.drag(&[-200.2], 0.0);
    assert_eq!(h.value.get(), 2.0);
    assert_eq!(h.ruler.state(), ControlState::Idle);
}

#[test]
fn test_far_values_are_not_snapped() {
    let mut h = harness_with(0.0, 0.0, 10.0, 100.0, |b| b.snap(SnapPolicy::Unit));
    h.drag(&[-250.0], 0.0);
    assert!((h.value.get() - 2.5).abs() < 1e-9);
}

#[test]
fn test_snap_ties_go_down() {
    let h = harness_with(0.0, 0.0, 10.0, 100.0, |b| b.snap(SnapPolicy::Half));
    assert_eq!(h.ruler.nearest_snap_value(2.25), Some(2.0));
    assert_eq!(h.ruler.nearest_snap_value(2.3), Some(2.5));
    assert_eq!(h.ruler.nearest_snap_value(2.2), Some(2.0));

    let off = harness(0.0, 0.0, 10.0, 100.0);
    assert_eq!(off.ruler.nearest_snap_value(2.2), None);
}

#[test]
fn test_fraction_snap_tie_lands_on_lower_grid_value() {
    let mut h = harness_with(0.0, 0.0, 10.0, 100.0, |b| b.snap(SnapPolicy::Fraction));
    h.ruler.set_control_extent(400.0);
    h.drag(&[-25.0], 0.0);
    h.settle();

    assert_eq!(h.value.get(), 0.2);
    assert_eq!(h.ruler.state(), ControlState::Idle);
}

#[test]
fn test_snapped_value_sits_exactly_on_grid() {
    let h = harness_with(0.0, 0.0, 10.0, 100.0, |b| b.snap(SnapPolicy::Fraction));
    assert_eq!(h.ruler.nearest_snap_value(0.27), Some(0.3));
    assert_eq!(h.ruler.nearest_snap_value(0.71), Some(0.7));
}

#[test]
fn test_external_change_abandons_flick() {
    let mut h = harness(0.0, f64::NEG_INFINITY, f64::INFINITY, 120.0);
    h.drag(&[-10.0], -800.0);
    h.ruler.on_frame(FRAME);
    assert_eq!(h.ruler.state(), ControlState::Flicking);

    h.value.set(3.0);
    let snapshot = h.ruler.render();
    assert_eq!(snapshot.value, 3.0);
    assert_eq!(snapshot.offset, -360.0);
    assert!(!h.ruler.is_animating());
    assert_eq!(*h.editing.borrow(), vec![true, false]);

    h.ruler.on_frame(FRAME);
    assert_eq!(h.ruler.state(), ControlState::Idle);
    assert_eq!(h.value.get(), 3.0);
}

#[test]
fn test_external_change_abandons_spring() {
    let mut h = harness(0.0, 0.0, 10.0, 100.0);
    h.ruler.set_control_extent(400.0);
    h.ruler.handle_gesture(sample(GesturePhase::Began, 0.0, 0.0));
    h.ruler.handle_gesture(sample(GesturePhase::Changed, -1400.0, 0.0));
    h.ruler.handle_gesture(sample(GesturePhase::Ended, -1400.0, 0.0));
    h.ruler.on_frame(FRAME);
    assert_eq!(h.ruler.state(), ControlState::Springing);

    h.value.set(4.0);
    let snapshot = h.ruler.render();
    assert_eq!(snapshot.value, 4.0);
    assert_eq!(snapshot.offset, -400.0);
    assert!(!h.ruler.is_animating());

    h.ruler.on_frame(FRAME);
    assert_eq!(h.ruler.state(), ControlState::Idle);
    assert_eq!(h.value.get(), 4.0);
    assert_eq!(h.ruler.render().value, 4.0);
}

#[test]
fn test_external_change_abandons_snap_ease() {
    let mut h = harness_with(0.0, 0.0, 10.0, 100.0, |b| b.snap(SnapPolicy::Unit));
    h.ruler.set_control_extent(400.0);
    h.drag(&[-295.0], 0.0);
    assert_eq!(h.ruler.state(), ControlState::Animating);

    h.value.set(7.0);
    let snapshot = h.ruler.render();
    assert_eq!(snapshot.value, 7.0);
    assert_eq!(snapshot.offset, -700.0);
    assert!(!h.ruler.is_animating());

    h.ruler.on_frame(FRAME);
    assert_eq!(h.ruler.state(), ControlState::Idle);
    assert_eq!(h.value.get(), 7.0);
}

#[test]
fn test_external_change_abandons_animate_to() {
    let mut h = harness(0.0, 0.0, 10.0, 100.0);
    h.ruler.animate_to(5.0, Duration::from_millis(200));
    h.ruler.on_frame(FRAME);
    assert_eq!(h.ruler.state(), ControlState::Animating);

    h.value.set(2.0);
    let snapshot = h.ruler.render();
    assert_eq!(snapshot.value, 2.0);
    assert_eq!(snapshot.offset, -200.0);
    assert!(!h.ruler.is_animating());

    assert!(!h.ruler.on_frame(FRAME));
    assert_eq!(h.ruler.state(), ControlState::Idle);
    assert_eq!(h.ruler.render().value, 2.0);
}

#[test]
fn test_idle_renders_external_value() {
    let mut h = harness(1.0, 0.0, 10.0, 100.0);
    h.value.set(42.0);
    let snapshot = h.ruler.render();
    assert_eq!(snapshot.value, 10.0);
    assert_eq!(snapshot.offset, -1000.0);
    assert_eq!(snapshot.state, ControlState::Idle);
}

#[test]
fn test_animate_to_eases_rendered_value() {
    let mut h = harness(0.0, 0.0, 10.0, 100.0);
    h.ruler.animate_to(5.0, Duration::from_millis(100));

    assert_eq!(h.value.get(), 5.0);
    assert_eq!(h.ruler.state(), ControlState::Animating);
    assert_eq!(h.ruler.render().value, 0.0);

    h.ruler.on_frame(FRAME);
    let mid = h.ruler.render().value;
    assert!(mid > 0.0 && mid < 5.0);

    h.settle();
    assert_eq!(h.ruler.state(), ControlState::Idle);
    assert_eq!(h.ruler.render().value, 5.0);
}

#[test]
fn test_animate_to_clamps_and_hits_bound() {
    let mut h = harness(2.0, 0.0, 10.0, 100.0);
    h.ruler.animate_to(99.0, Duration::ZERO);
    assert_eq!(h.value.get(), 10.0);
    assert_eq!(h.ruler.state(), ControlState::Idle);
    assert_eq!(h.haptics.count(Impact::Rigid), 1);
}

#[test]
fn test_animate_to_ignored_while_dragging() {
    let mut h = harness(2.0, 0.0, 10.0, 100.0);
    h.ruler.handle_gesture(sample(GesturePhase::Began, 0.0, 0.0));
    h.ruler.animate_to(8.0, Duration::from_millis(100));
    assert_eq!(h.value.get(), 2.0);
    assert_eq!(h.ruler.state(), ControlState::Dragging);
}

#[test]
fn test_right_to_left_drag_is_mirrored() {
    let mut h = harness_with(0.0, f64::NEG_INFINITY, f64::INFINITY, 100.0, |b| {
        b.direction(LayoutDirection::RightToLeft)
    });
    h.ruler.handle_gesture(sample(GesturePhase::Began, 0.0, 0.0));
    h.ruler.handle_gesture(sample(GesturePhase::Changed, 250.0, 0.0));

    assert!((h.value.get() - 2.5).abs() < 1e-9);
    let snapshot = h.ruler.render();
    assert_eq!(snapshot.offset, 250.0);
}

#[test]
fn test_vertical_ruler_uses_y_axis() {
    let mut h = harness_with(0.0, f64::NEG_INFINITY, f64::INFINITY, 100.0, |b| {
        b.style(&StyleMetrics {
            cell_width: 100.0,
            axis: Axis::Vertical,
            ..Default::default()
        })
        .direction(LayoutDirection::RightToLeft)
    });
    h.ruler.handle_gesture(sample(GesturePhase::Began, 0.0, 0.0));
    h.ruler.handle_gesture(GestureEvent::Sample(GestureSample::new(
        GesturePhase::Changed,
        Vec2::new(999.0, -300.0),
        Vec2::ZERO,
    )));
    assert!((h.value.get() - 3.0).abs() < 1e-9);
}

#[test]
fn test_render_reports_cells_and_marks() {
    let mut h = harness(4.0, f64::NEG_INFINITY, f64::INFINITY, 120.0);
    let before = h.ruler.render();
    assert_eq!(before.cells.len(), 1);

    h.ruler.set_control_extent(375.0);
    let snapshot = h.ruler.render();
    assert_eq!(snapshot.cells.len(), 11);
    assert_eq!(snapshot.mark_offset, 3.0);
    assert_eq!(snapshot.wrapped_offset, -120.0);
    let centre = snapshot.cells.iter().find(|c| c.mark == 0).unwrap();
    assert_eq!(centre.mark_value, 3.0);
}

#[test]
fn test_extent_ignored_until_valid() {
    let mut h = harness(0.0, 0.0, 10.0, 100.0);
    h.ruler.set_control_extent(0.0);
    h.ruler.set_control_extent(f64::NAN);
    assert_eq!(h.ruler.control_extent(), None);
    assert_eq!(h.ruler.render().cells.len(), 1);
}

#[test]
fn test_format_mark() {
    assert_eq!(format_mark(2.0, 1.0), "2");
    assert_eq!(format_mark(2.5, 1.0), "2.5");
    assert_eq!(format_mark(-0.0001, 1.0), "0");
    assert_eq!(format_mark(0.25, 0.25), "0.25");

    let h = harness_with(0.0, 0.0, 10.0, 100.0, |b| b.formatter(|v| format!("{v:.0} kg")));
    assert_eq!(h.ruler.format(3.0), "3 kg");
}
