pub mod animation;
pub mod binding;
pub mod cells;
pub mod config;
pub mod error;
pub mod gesture;
pub mod haptics;
pub mod kinematics;
pub mod mapping;
pub mod policy;
pub mod range;
pub mod ruler;
pub mod state;
pub mod style;

pub use binding::{SharedValue, ValueBinding};
pub use cells::CellConfiguration;
pub use config::{AppConfig, EasingType};
pub use error::{Error, Result};
pub use gesture::{Axis, GestureEvent, GesturePhase, GestureSample, Vec2};
pub use haptics::{Haptics, Impact, NoHaptics, RecordingHaptics};
pub use kinematics::Physics;
pub use mapping::LayoutDirection;
pub use policy::{SnapPolicy, TickPolicy};
pub use range::Bounds;
pub use ruler::{format_mark, RenderSnapshot, RulerBuilder, SlidingRuler};
pub use state::ControlState;
pub use style::{CursorAlignment, RulerStyle, StyleMetrics};
