use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops;
use crate::tui::app::{App, DeleteTarget, Mode};

/// Keys for the delete confirmation prompt
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    let target = app.pending_delete;
    app.pending_delete = None;
    app.mode = Mode::Navigate;

    if !matches!(key.code, KeyCode::Char('y') | KeyCode::Enter) {
        return;
    }

    match target {
        Some(DeleteTarget::Task(id)) => {
            if let Some(list) = &mut app.list {
                if task_ops::delete_task(list, id).is_ok() {
                    app.save();
                }
                app.clamp_cursor();
            }
        }
        Some(DeleteTarget::List(idx)) => {
            if let Some(path) = app.files.get(idx).cloned() {
                if app.store.delete_file(&path).is_err() {
                    app.status = Some("could not delete list".to_string());
                }
                app.refresh_files();
            }
        }
        None => {}
    }
}
