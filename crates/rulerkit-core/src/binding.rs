//! Host-owned value the ruler reads and writes.

use std::cell::Cell;
use std::rc::Rc;

/// Two-way binding to the control value.
///
/// The host may change the value behind the ruler's back at any time; the
/// ruler detects this when rendering and abandons any running animation.
pub trait ValueBinding {
    fn get(&self) -> f64;
    fn set(&mut self, value: f64);
}

/// Shared, single-threaded value cell. Clones observe the same value.
#[derive(Debug, Clone, Default)]
pub struct SharedValue(Rc<Cell<f64>>);

impl SharedValue {
    pub fn new(value: f64) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, value: f64) {
        self.0.set(value)
    }
}

impl ValueBinding for SharedValue {
    fn get(&self) -> f64 {
        self.0.get()
    }

    fn set(&mut self, value: f64) {
        self.0.set(value)
    }
}
