use crossterm::event::{KeyCode, KeyEvent};
use tokio::runtime::Runtime;

use crate::tui::app::{AddField, App, Overlay};

/// Keys while the create dialog is open
pub fn handle_key(app: &mut App, rt: &Runtime, key: KeyEvent) {
    let Some(Overlay::Add(dialog)) = &mut app.overlay else {
        return;
    };

    match key.code {
        KeyCode::Esc => app.overlay = None,
        KeyCode::Enter => app.submit_add(rt),
        KeyCode::Tab | KeyCode::Down => dialog.field = dialog.field.next(),
        KeyCode::BackTab | KeyCode::Up => dialog.field = dialog.field.prev(),
        KeyCode::Left => match dialog.field {
            AddField::Status => dialog.status = dialog.status.cycle_prev(),
            AddField::Energy => dialog.energy = dialog.energy.cycle_prev(),
            _ => {}
        },
        KeyCode::Right => match dialog.field {
            AddField::Status => dialog.status = dialog.status.cycle_next(),
            AddField::Energy => dialog.energy = dialog.energy.cycle_next(),
            _ => {}
        },
        KeyCode::Backspace => {
            if let Some(text) = dialog.focused_text_mut() {
                text.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(text) = dialog.focused_text_mut() {
                text.push(c);
            }
        }
        _ => {}
    }
}
