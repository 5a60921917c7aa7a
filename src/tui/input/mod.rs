mod add_dialog;
mod board;
mod detail;

use crossterm::event::{KeyCode, KeyEvent};
use tokio::runtime::Runtime;

use super::app::{App, Overlay};

/// Handle a key event for whatever surface currently has focus
pub fn handle_key(app: &mut App, rt: &Runtime, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match &app.overlay {
        Some(Overlay::Add(_)) => add_dialog::handle_key(app, rt, key),
        Some(Overlay::Detail(_)) => detail::handle_key(app, rt, key),
        None => board::handle_key(app, rt, key),
    }
}
