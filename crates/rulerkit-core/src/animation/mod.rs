//! Frame-driven animation primitives.
//!
//! - `easing` - easing curves for short eased transitions
//! - `timing` - progress and interpolation helpers
//! - `timer` - the cancellable timer the ruler drives its animations with

pub mod easing;
pub mod timer;
pub mod timing;

pub use easing::EasingType;
pub use timer::{AnimationTimer, TimerEvent};
