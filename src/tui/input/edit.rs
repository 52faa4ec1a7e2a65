use crossterm::event::{KeyCode, KeyEvent};

use crate::model::task::Task;
use crate::ops::task_ops;
use crate::tui::app::{App, EditTarget, Mode, View};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Seed the edit buffer from an existing record: markers and indent go,
/// annotations stay (so `@time` and `{duration}` survive an edit).
pub(super) fn edit_seed(task: &Task) -> String {
    if !task.is_task {
        return task.line.clone();
    }
    let s = task
        .line
        .replacen("[x]", "", 1)
        .replacen("[ ]", "", 1);
    let s = s.trim();
    let s = s.strip_prefix('-').unwrap_or(s);
    s.trim().to_string()
}

/// Keys for the single-line edit buffer
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            cancel_edit(app);
        }
        KeyCode::Enter => {
            commit_edit(app);
        }
        KeyCode::Backspace => {
            if let Some(prev) = prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(prev..app.edit_cursor, "");
                app.edit_cursor = prev;
            }
        }
        KeyCode::Left => {
            if let Some(prev) = prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        KeyCode::Home => {
            app.edit_cursor = 0;
        }
        KeyCode::End => {
            app.edit_cursor = app.edit_buffer.len();
        }
        KeyCode::Char(c) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => {}
    }
}

fn cancel_edit(app: &mut App) {
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.edit_target = None;
    app.mode = Mode::Navigate;
}

fn commit_edit(app: &mut App) {
    let text = app.edit_buffer.trim().to_string();
    let target = app.edit_target.clone();
    cancel_edit(app);

    if text.is_empty() {
        return;
    }

    match target {
        Some(EditTarget::NewTask) => {
            if let Some(list) = &mut app.list {
                task_ops::add_task(list, &text);
                app.save();
                // Land the cursor on the new task
                app.cursor = app.visible_ids().len().saturating_sub(1);
            }
        }
        Some(EditTarget::ExistingTask(id)) => {
            if let Some(list) = &mut app.list {
                let _ = task_ops::edit_task(list, id, &text);
                app.save();
            }
        }
        Some(EditTarget::NewList) => {
            match app.store.create_list(&text) {
                Ok(path) => {
                    app.refresh_files();
                    if let Some(idx) = app.files.iter().position(|p| p == &path) {
                        app.files_cursor = idx;
                    }
                }
                Err(_) => {
                    app.status = Some("could not create list".to_string());
                }
            }
            debug_assert_eq!(app.view, View::Lists);
        }
        None => {}
    }
}
