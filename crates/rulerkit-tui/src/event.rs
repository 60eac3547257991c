//! Terminal events.
//!
//! A blocking task polls crossterm and forwards events over a channel so the
//! main loop can `select!` between input and animation frames.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse button or motion
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Nothing happened within the tick rate
    Tick,
}

impl AppEvent {
    /// Map a crossterm event, dropping the ones the app never looks at.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            // Only handle key press events, ignore release events
            // (crossterm 0.27+ sends release events on some systems)
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Spawn the reader task. It stops once the receiver is dropped.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        let app_event = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(ev) => match AppEvent::from_crossterm(ev) {
                    Some(app_event) => app_event,
                    None => continue,
                },
                Err(e) => {
                    tracing::warn!("Failed to read terminal event: {}", e);
                    continue;
                }
            },
            Ok(false) => AppEvent::Tick,
            Err(e) => {
                tracing::warn!("Terminal poll failed, stopping reader: {}", e);
                break;
            }
        };
        if tx.send(app_event).is_err() {
            break;
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{
        KeyCode, KeyEventState, KeyModifiers, MouseButton, MouseEventKind,
    };

    fn key(kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_key_release_is_dropped() {
        assert!(matches!(
            AppEvent::from_crossterm(key(KeyEventKind::Press)),
            Some(AppEvent::Key(_))
        ));
        assert!(AppEvent::from_crossterm(key(KeyEventKind::Release)).is_none());
    }

    #[test]
    fn test_mouse_and_resize_pass_through() {
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert!(matches!(
            AppEvent::from_crossterm(mouse),
            Some(AppEvent::Mouse(_))
        ));
        assert!(matches!(
            AppEvent::from_crossterm(Event::Resize(80, 24)),
            Some(AppEvent::Resize(80, 24))
        ));
        assert!(AppEvent::from_crossterm(Event::FocusGained).is_none());
    }
}
