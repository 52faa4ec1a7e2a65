use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, DeleteTarget, EditTarget, Mode};

/// Keys for the file picker view
pub(super) fn handle_lists(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.files_cursor + 1 < app.files.len() {
                app.files_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.files_cursor = app.files_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.files_cursor = 0;
        }
        KeyCode::Char('G') => {
            app.files_cursor = app.files.len().saturating_sub(1);
        }
        KeyCode::Enter => {
            app.open_list(app.files_cursor);
        }
        KeyCode::Char('n') => {
            app.edit_buffer.clear();
            app.edit_cursor = 0;
            app.edit_target = Some(EditTarget::NewList);
            app.mode = Mode::Edit;
        }
        KeyCode::Char('d') => {
            if app.files_cursor < app.files.len() {
                app.pending_delete = Some(DeleteTarget::List(app.files_cursor));
                app.mode = Mode::Confirm;
            }
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        _ => {}
    }
}
