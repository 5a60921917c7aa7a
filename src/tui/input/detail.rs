use crossterm::event::{KeyCode, KeyEvent};
use tokio::runtime::Runtime;

use crate::api::tasks::TaskPatch;
use crate::tui::app::{App, DetailRegion, Overlay};

/// Keys while a task detail view is open.
///
/// Left/right on the status and energy rows submit the update right
/// away; there is no separate save step.
pub fn handle_key(app: &mut App, rt: &Runtime, key: KeyEvent) {
    let Some(Overlay::Detail(view)) = &mut app.overlay else {
        return;
    };

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.overlay = None,
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => view.region = view.region.next(),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => view.region = view.region.prev(),
        KeyCode::Left | KeyCode::Char('h') => match view.region {
            DetailRegion::Status => {
                let next = view.task.status.cycle_prev();
                app.update_detail(rt, TaskPatch::status(next));
            }
            DetailRegion::Energy => {
                let next = view.task.energy_level.cycle_prev();
                app.update_detail(rt, TaskPatch::energy(next));
            }
            DetailRegion::Delete => {}
        },
        KeyCode::Right | KeyCode::Char('l') => match view.region {
            DetailRegion::Status => {
                let next = view.task.status.cycle_next();
                app.update_detail(rt, TaskPatch::status(next));
            }
            DetailRegion::Energy => {
                let next = view.task.energy_level.cycle_next();
                app.update_detail(rt, TaskPatch::energy(next));
            }
            DetailRegion::Delete => {}
        },
        KeyCode::Enter => {
            if view.region == DetailRegion::Delete {
                app.delete_detail(rt);
            }
        }
        KeyCode::Char('d') => app.delete_detail(rt),
        _ => {}
    }
}
