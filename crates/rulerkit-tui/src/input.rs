use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rulerkit_core::{Axis, LayoutDirection};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Animate by this many steps, negative towards the lower bound
    Step(i32),
    JumpToLower,
    JumpToUpper,
    CycleSnap,
    CycleTick,
    CycleSkin,
    None,
}

/// Handle a key event and return the corresponding action.
///
/// Arrow keys follow the scale: on a horizontal ruler the arrow pointing
/// at the larger marks increases the value, on a vertical one `↓` does.
pub fn handle_key_event(key: KeyEvent, axis: Axis, direction: LayoutDirection) -> Action {
    let mirrored = axis == Axis::Horizontal && direction == LayoutDirection::RightToLeft;

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        // Stepping along the scale
        (KeyCode::Right | KeyCode::Char('l'), KeyModifiers::NONE) if axis == Axis::Horizontal => {
            Action::Step(if mirrored { -1 } else { 1 })
        }
        (KeyCode::Left | KeyCode::Char('h'), KeyModifiers::NONE) if axis == Axis::Horizontal => {
            Action::Step(if mirrored { 1 } else { -1 })
        }
        (KeyCode::Down | KeyCode::Char('j'), KeyModifiers::NONE) if axis == Axis::Vertical => {
            Action::Step(1)
        }
        (KeyCode::Up | KeyCode::Char('k'), KeyModifiers::NONE) if axis == Axis::Vertical => {
            Action::Step(-1)
        }
        (KeyCode::Char('+'), _) => Action::Step(1),
        (KeyCode::Char('-'), _) => Action::Step(-1),
        (KeyCode::Char(']'), _) => Action::Step(10),
        (KeyCode::Char('['), _) => Action::Step(-10),

        // Jump to bounds
        (KeyCode::Home, _) => Action::JumpToLower,
        (KeyCode::End, _) => Action::JumpToUpper,

        // Policies and looks
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::CycleSnap,
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::CycleTick,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::CycleSkin,

        _ => Action::None,
    }
}
