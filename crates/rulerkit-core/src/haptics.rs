//! Haptic feedback sink.

/// Impact style, mirroring the usual platform feedback generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Impact {
    Light,
    Medium,
    Heavy,
    Soft,
    Rigid,
}

/// Boundary hit: a rigid, fairly strong impact.
pub const BOUNDARY_IMPACT: (Impact, f64) = (Impact::Rigid, 0.667);

/// Graduation passed: a light impact.
pub const TICK_IMPACT: (Impact, f64) = (Impact::Light, 0.5);

/// Fire-and-forget haptic output. Implementations must not fail.
pub trait Haptics {
    fn impact(&mut self, style: Impact, intensity: f64);
}

/// Discards every impact.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn impact(&mut self, _style: Impact, _intensity: f64) {}
}

/// Keeps every impact, for hosts that batch feedback and for tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingHaptics {
    impacts: std::rc::Rc<std::cell::RefCell<Vec<(Impact, f64)>>>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn impacts(&self) -> Vec<(Impact, f64)> {
        self.impacts.borrow().clone()
    }

    pub fn count(&self, style: Impact) -> usize {
        self.impacts.borrow().iter().filter(|(s, _)| *s == style).count()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<(Impact, f64)> {
        std::mem::take(&mut *self.impacts.borrow_mut())
    }
}

impl Haptics for RecordingHaptics {
    fn impact(&mut self, style: Impact, intensity: f64) {
        self.impacts.borrow_mut().push((style, intensity));
    }
}
