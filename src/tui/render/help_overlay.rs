use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const BINDINGS: &[(&str, &str)] = &[
    ("j/k", "move cursor"),
    ("Enter", "open list / toggle task"),
    ("space", "toggle task"),
    ("a", "add task"),
    ("e", "edit task"),
    ("d", "delete (with confirm)"),
    ("m", "move task (unfiltered only)"),
    ("/", "filter by search"),
    ("t", "start/pause timer"),
    ("r", "reset timer"),
    ("n", "new list (in picker)"),
    ("Esc", "clear filter / go back"),
    ("q", "back / quit"),
];

/// Render the help overlay centered on top of everything
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let height = (BINDINGS.len() + 2) as u16;
    let width = 44u16.min(area.width);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height: height.min(area.height),
    };

    frame.render_widget(Clear, popup);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:>6}  ", key),
                    Style::default()
                        .fg(theme.highlight)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(action.to_string(), Style::default().fg(theme.text)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight))
        .title(Span::styled(
            " keys ",
            Style::default().fg(theme.text_bright),
        ));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(theme.background));
    frame.render_widget(paragraph, popup);
}
