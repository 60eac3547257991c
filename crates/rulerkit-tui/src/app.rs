use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::MouseEvent;
use ratatui::layout::Rect;
use rulerkit_core::{
    AppConfig, Axis, LayoutDirection, RenderSnapshot, SharedValue, SlidingRuler, SnapPolicy,
    StyleMetrics, TickPolicy,
};

use crate::gesture::MouseBridge;
use crate::haptics::TerminalHaptics;
use crate::input::Action;
use crate::theme::Theme;
use crate::widgets::{ScaleSkin, SkinKind};

/// Duration of keyboard-driven value changes.
const STEP_ANIMATION: Duration = Duration::from_millis(200);

/// Application state
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub ruler: SlidingRuler,
    pub value: SharedValue,
    pub skin: SkinKind,
    pub haptics: TerminalHaptics,
    pub mouse: MouseBridge,
    /// Mirrors the ruler's editing-changed callback
    pub editing: Rc<Cell<bool>>,
    pub should_quit: bool,
    pub status_message: Option<String>,
    skin_impl: Box<dyn ScaleSkin>,
    extent: Option<f64>,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme) -> Result<Self> {
        let skin = SkinKind::from_name(&config.ui.skin).unwrap_or_else(|| {
            tracing::warn!("Unknown skin '{}', using primary", config.ui.skin);
            SkinKind::Primary
        });
        let value = SharedValue::new(config.ruler.value);
        let haptics = TerminalHaptics::new(config.ui.bell_on_boundary);
        let editing = Rc::new(Cell::new(false));
        let skin_impl = skin.build(&config.style);
        let ruler = build_ruler(
            &config,
            skin_impl.as_ref(),
            &value,
            &haptics,
            &editing,
        )?;

        Ok(Self {
            mouse: MouseBridge::new(config.ui.pixels_per_column, config.ui.pixels_per_row),
            config,
            theme,
            ruler,
            value,
            skin,
            haptics,
            editing,
            should_quit: false,
            status_message: None,
            skin_impl,
            extent: None,
        })
    }

    pub fn axis(&self) -> Axis {
        self.config.ruler.axis
    }

    pub fn direction(&self) -> LayoutDirection {
        self.config.ruler.direction
    }

    pub fn skin(&self) -> &dyn ScaleSkin {
        self.skin_impl.as_ref()
    }

    pub fn snap_policy(&self) -> SnapPolicy {
        self.ruler.snap_policy()
    }

    pub fn tick_policy(&self) -> TickPolicy {
        self.ruler.tick_policy()
    }

    /// Tell the ruler and the mouse bridge where the scale was laid out.
    pub fn set_ruler_area(&mut self, inner: Rect) {
        self.mouse.set_area(inner);
        let ui = &self.config.ui;
        let extent = match self.axis() {
            Axis::Horizontal => inner.width as f64 * ui.pixels_per_column,
            Axis::Vertical => inner.height as f64 * ui.pixels_per_row,
        };
        if extent > 0.0 && self.extent != Some(extent) {
            self.extent = Some(extent);
            self.ruler.set_control_extent(extent);
        }
    }

    pub fn render_snapshot(&mut self) -> RenderSnapshot {
        self.ruler.render()
    }

    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Step(steps) => {
                let target = self.value.get() + steps as f64 * self.ruler.step();
                self.ruler.animate_to(target, STEP_ANIMATION);
            }
            Action::JumpToLower => {
                let lower = self.ruler.bounds().lower();
                if lower.is_finite() {
                    self.ruler.animate_to(lower, STEP_ANIMATION);
                }
            }
            Action::JumpToUpper => {
                let upper = self.ruler.bounds().upper();
                if upper.is_finite() {
                    self.ruler.animate_to(upper, STEP_ANIMATION);
                }
            }
            Action::CycleSnap => {
                self.config.ruler.snap = self.ruler.snap_policy().next();
                self.rebuild()?;
                self.status_message = Some(format!("snap: {}", self.config.ruler.snap.name()));
            }
            Action::CycleTick => {
                self.config.ruler.tick = self.ruler.tick_policy().next();
                self.rebuild()?;
                self.status_message = Some(format!("tick: {}", self.config.ruler.tick.name()));
            }
            Action::CycleSkin => {
                self.skin = self.skin.next();
                self.skin_impl = self.skin.build(&self.config.style);
                self.rebuild()?;
                self.status_message = Some(format!("skin: {}", self.skin_impl.name()));
            }
            Action::None => {}
        }
        Ok(())
    }

    pub fn handle_mouse(&mut self, event: &MouseEvent, now: Instant) {
        for gesture in self.mouse.handle(event, now) {
            self.status_message = None;
            self.ruler.handle_gesture(gesture);
        }
    }

    /// Advance animations. Returns `true` while more frames are wanted.
    pub fn on_frame(&mut self, delta: Duration) -> bool {
        let animating = self.ruler.on_frame(delta);
        animating || self.haptics.is_pulsing(Instant::now())
    }

    /// Whether the loop should keep producing frames.
    pub fn needs_frames(&self) -> bool {
        self.ruler.is_animating() || self.haptics.is_pulsing(Instant::now())
    }

    /// Replace the ruler after a policy or skin change, keeping the value.
    ///
    /// Policies are fixed per ruler, so a change means a new instance.
    fn rebuild(&mut self) -> Result<()> {
        self.config.ruler.value = self.value.get();
        self.ruler = build_ruler(
            &self.config,
            self.skin_impl.as_ref(),
            &self.value,
            &self.haptics,
            &self.editing,
        )?;
        self.editing.set(false);
        if let Some(extent) = self.extent {
            self.ruler.set_control_extent(extent);
        }
        Ok(())
    }
}

fn build_ruler(
    config: &AppConfig,
    skin: &dyn ScaleSkin,
    value: &SharedValue,
    haptics: &TerminalHaptics,
    editing: &Rc<Cell<bool>>,
) -> Result<SlidingRuler> {
    let metrics = StyleMetrics {
        axis: config.ruler.axis,
        ..StyleMetrics::of(skin)
    };
    let editing = Rc::clone(editing);
    let ruler = SlidingRuler::builder(value.clone())
        .configure(config)?
        .style(&metrics)
        .haptics(haptics.clone())
        .on_editing_changed(move |active| editing.set(active))
        .build()?;
    Ok(ruler)
}
