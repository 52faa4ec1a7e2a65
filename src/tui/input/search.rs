use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::util::unicode::prev_grapheme_boundary;

/// Keys for search mode. The view filters live while the query is typed.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // Cancel: keep whatever filter was committed before
            app.search_input.clear();
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        KeyCode::Enter => {
            app.last_search = if app.search_input.is_empty() {
                None
            } else {
                Some(app.search_input.clone())
            };
            app.search_input.clear();
            app.mode = Mode::Navigate;
            app.cursor = 0;
            app.scroll_offset = 0;
        }
        KeyCode::Backspace => {
            if let Some(prev) = prev_grapheme_boundary(&app.search_input, app.search_input.len()) {
                app.search_input.truncate(prev);
            }
            app.clamp_cursor();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.clamp_cursor();
        }
        _ => {}
    }
}
