use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::{task_ops, timer};
use crate::tui::app::{App, DeleteTarget, EditTarget, Mode};

/// Keys for the open-checklist view in navigate mode
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.close_list();
        }
        KeyCode::Esc => {
            // Esc peels one layer: filter first, then the view
            if app.last_search.is_some() {
                app.last_search = None;
                app.clamp_cursor();
            } else {
                app.close_list();
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible_ids().len();
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.cursor = 0;
        }
        KeyCode::Char('G') => {
            app.cursor = app.visible_ids().len().saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            toggle_selected(app);
        }
        KeyCode::Char('a') => {
            app.edit_buffer.clear();
            app.edit_cursor = 0;
            app.edit_target = Some(EditTarget::NewTask);
            app.mode = Mode::Edit;
        }
        KeyCode::Char('e') => {
            if let Some(id) = app.selected_id() {
                let seed = app
                    .list
                    .as_ref()
                    .and_then(|l| l.find(id))
                    .map(super::edit::edit_seed);
                if let Some(seed) = seed {
                    app.edit_cursor = seed.len();
                    app.edit_buffer = seed;
                    app.edit_target = Some(EditTarget::ExistingTask(id));
                    app.mode = Mode::Edit;
                }
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_id() {
                app.pending_delete = Some(DeleteTarget::Task(id));
                app.mode = Mode::Confirm;
            }
        }
        KeyCode::Char('m') => {
            app.enter_move_mode();
        }
        KeyCode::Char('/') => {
            app.search_input.clear();
            app.mode = Mode::Search;
        }
        KeyCode::Char('t') => {
            if let Some(id) = app.selected_id()
                && let Some(list) = &mut app.list
                && let Some(task) = list.find_mut(id)
            {
                timer::toggle(task, Local::now());
            }
        }
        KeyCode::Char('r') => {
            if let Some(id) = app.selected_id()
                && let Some(list) = &mut app.list
                && let Some(task) = list.find_mut(id)
            {
                timer::reset(task);
            }
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        _ => {}
    }
}

/// Toggle the record under the cursor and persist immediately.
pub(super) fn toggle_selected(app: &mut App) {
    let Some(id) = app.selected_id() else {
        return;
    };
    let Some(list) = &mut app.list else {
        return;
    };
    if let Some(task) = list.find_mut(id)
        && task.is_task
    {
        task_ops::toggle_task(task);
        app.save();
    }
}
