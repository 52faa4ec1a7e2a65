use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops;
use crate::tui::app::{App, Mode};

/// Keys for move mode: the selected record is carried up/down one position
/// per keypress. Only reachable with no filter active, so cursor rows equal
/// sequence positions.
pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            shift(app, 1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            shift(app, -1);
        }
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') => {
            app.moving = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

fn shift(app: &mut App, delta: i64) {
    let Some(id) = app.moving else {
        return;
    };
    let Some(list) = &mut app.list else {
        return;
    };
    let Some(pos) = list.position(id) else {
        return;
    };

    let dest = pos as i64 + delta;
    if dest < 0 || dest as usize >= list.tasks.len() {
        return;
    }
    let dest = dest as usize;

    if task_ops::move_task(list, id, dest).is_ok() {
        // Renumbering gave the carried record its destination as its new id
        app.moving = Some(dest);
        app.cursor = dest;
        app.save();
    }
}
