use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, DeleteTarget, Mode, View};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(ref message) = app.status {
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(app.theme.yellow).bg(bg),
                ))
            } else if let Some(ref pattern) = app.last_search {
                with_hint(
                    app,
                    width,
                    vec![Span::styled(
                        format!("/{}", pattern),
                        Style::default().fg(app.theme.dim).bg(bg),
                    )],
                    "Esc clear filter",
                )
            } else {
                let hint = match app.view {
                    View::Lists => "Enter open  n new  d delete  ? help",
                    View::List => "space toggle  a add  t timer  / search  ? help",
                };
                with_hint(app, width, Vec::new(), hint)
            }
        }
        Mode::Search => with_hint(
            app,
            width,
            vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                cursor_span(app),
            ],
            "Enter filter  Esc cancel",
        ),
        Mode::Edit => with_hint(
            app,
            width,
            vec![
                Span::styled(
                    format!("> {}", app.edit_buffer),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                cursor_span(app),
            ],
            "Enter save  Esc cancel",
        ),
        Mode::Move => with_hint(
            app,
            width,
            vec![Span::styled(
                "moving".to_string(),
                Style::default().fg(app.theme.highlight).bg(bg),
            )],
            "j/k move  Enter drop",
        ),
        Mode::Confirm => {
            let what = match app.pending_delete {
                Some(DeleteTarget::Task(id)) => app
                    .list
                    .as_ref()
                    .and_then(|l| l.find(id))
                    .map(|t| t.text())
                    .unwrap_or_default(),
                Some(DeleteTarget::List(idx)) => app
                    .files
                    .get(idx)
                    .and_then(|p| p.file_stem())
                    .and_then(|s| s.to_str())
                    .unwrap_or("")
                    .to_string(),
                None => String::new(),
            };
            with_hint(
                app,
                width,
                vec![Span::styled(
                    format!("delete \u{201C}{}\u{201D}?", what),
                    Style::default().fg(app.theme.red).bg(bg),
                )],
                "y confirm  n cancel",
            )
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn cursor_span(app: &App) -> Span<'static> {
    Span::styled(
        "\u{258C}".to_string(), // ▌ cursor
        Style::default().fg(app.theme.highlight).bg(app.theme.background),
    )
}

/// Left content with a dim right-aligned hint, padded to the full width.
fn with_hint(app: &App, width: usize, mut spans: Vec<Span<'static>>, hint: &str) -> Line<'static> {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}
