//! Event handling.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed and the screen changed.
    Consumed,
}

impl EventResult {
    /// Maps a "state changed" flag to a result.
    #[must_use]
    pub const fn from_changed(changed: bool) -> Self {
        if changed { Self::Consumed } else { Self::Continue }
    }
}

/// Extracts a key press from a terminal event.
///
/// Release and repeat events are ignored so each keystroke is handled once.
#[must_use]
pub fn key_press(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
        _ => None,
    }
}

/// Returns whether the event requires a redraw without any state change.
#[must_use]
pub const fn needs_redraw(event: &Event) -> bool {
    matches!(event, Event::Resize(..) | Event::FocusGained)
}
