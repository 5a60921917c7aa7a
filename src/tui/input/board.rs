use crossterm::event::{KeyCode, KeyEvent};
use tokio::runtime::Runtime;

use crate::ops::board::partition;
use crate::tui::app::{AddDialog, App, Overlay};

/// Keys on the board itself (no overlay open)
pub fn handle_key(app: &mut App, _rt: &Runtime, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('a') => app.overlay = Some(Overlay::Add(AddDialog::default())),
        KeyCode::Char('r') => app.store.invalidate(),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Left | KeyCode::Char('h') => move_column(app, -1),
        KeyCode::Right | KeyCode::Char('l') => move_column(app, 1),
        KeyCode::Up | KeyCode::Char('k') => move_row(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_row(app, 1),
        KeyCode::Char('g') => app.cursor.row = 0,
        KeyCode::Char('G') => {
            app.cursor.row = usize::MAX;
            app.clamp_cursor();
        }
        _ => {}
    }
}

fn move_column(app: &mut App, delta: isize) {
    let count = crate::model::Status::ALL.len() as isize;
    let column = app.cursor.column as isize + delta;
    app.cursor.column = column.rem_euclid(count) as usize;
    app.clamp_cursor();
}

fn move_row(app: &mut App, delta: isize) {
    let Some(tasks) = app.tasks.as_ref() else {
        return;
    };
    let len = partition(tasks)[app.cursor.column].tasks.len();
    if len == 0 {
        return;
    }
    let row = app.cursor.row as isize + delta;
    app.cursor.row = row.clamp(0, len as isize - 1) as usize;
}
