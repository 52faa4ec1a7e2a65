use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

/// Render the file picker over the tasks folder
pub fn render_lists_view(frame: &mut Frame, app: &App, header: Rect, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;

    let header_line = Line::from(Span::styled(
        "Task Lists",
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(header_line).style(Style::default().bg(bg)),
        header,
    );

    if app.files.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No lists found — press n to create one",
            Style::default().fg(theme.dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let height = area.height as usize;
    let start = (app.files_cursor + 1).saturating_sub(height);
    let mut lines: Vec<Line> = Vec::new();
    for (i, path) in app.files.iter().enumerate().skip(start).take(height) {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
        let selected = i == app.files_cursor;
        let row_bg = if selected { theme.selection_bg } else { bg };
        let fg = if selected { theme.text_bright } else { theme.text };
        lines.push(Line::from(Span::styled(
            format!(" {:<width$}", truncate_to_width(&name, width.saturating_sub(2)), width = width.saturating_sub(1)),
            Style::default().fg(fg).bg(row_bg),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}
