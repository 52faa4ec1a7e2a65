pub mod help_overlay;
pub mod list_view;
pub mod lists_view;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, View};

/// Main render function, dispatching to the per-view renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + progress
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    match app.view {
        View::Lists => lists_view::render_lists_view(frame, app, chunks[0], chunks[1]),
        View::List => list_view::render_list_view(frame, app, chunks[0], chunks[1]),
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    // Status row
    status_row::render_status_row(frame, app, chunks[2]);
}
