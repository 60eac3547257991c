use serde::Serialize;

/// Control state of a sliding ruler.
///
/// ```text
/// Idle ──drag──▶ Dragging ──release fast──▶ Flicking ──out of bounds──▶ Springing
///   ▲               │  ▲                        │ touch                    │ touch
///   │               │  └──────drag──────── StoppedFlick / StoppedSpring ◀──┘
///   └──done / snap──┴─────────────────────────── Animating ◀── snap / animate_to
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlState {
    #[default]
    Idle,
    Dragging,
    Flicking,
    Springing,
    /// A flick was interrupted by a touch
    StoppedFlick,
    /// A spring was interrupted by a touch
    StoppedSpring,
    /// Easing the rendered value after a snap or programmatic change
    Animating,
}

impl ControlState {
    /// States driven by the animation timer.
    pub fn is_animated(self) -> bool {
        matches!(
            self,
            ControlState::Flicking | ControlState::Springing | ControlState::Animating
        )
    }

    /// States that render from the drag offset instead of the bound value.
    pub fn renders_drag_offset(self) -> bool {
        matches!(
            self,
            ControlState::Dragging
                | ControlState::StoppedFlick
                | ControlState::StoppedSpring
                | ControlState::Flicking
                | ControlState::Springing
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ControlState::Idle => "idle",
            ControlState::Dragging => "dragging",
            ControlState::Flicking => "flicking",
            ControlState::Springing => "springing",
            ControlState::StoppedFlick => "stopped_flick",
            ControlState::StoppedSpring => "stopped_spring",
            ControlState::Animating => "animating",
        }
    }
}

impl std::fmt::Display for ControlState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
