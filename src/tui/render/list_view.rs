use chrono::Local;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::ops::timer;
use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Render one open checklist
pub fn render_list_view(frame: &mut Frame, app: &mut App, header: Rect, area: Rect) {
    let visible = app.visible_ids();

    // Keep the cursor row on screen
    let height = area.height as usize;
    if height > 0 {
        if app.cursor < app.scroll_offset {
            app.scroll_offset = app.cursor;
        } else if app.cursor >= app.scroll_offset + height {
            app.scroll_offset = app.cursor + 1 - height;
        }
    }

    let theme = app.theme.clone();
    let bg = theme.background;
    let scroll = app.scroll_offset;
    let cursor = app.cursor;
    let moving = app.moving;

    let Some(list) = &app.list else {
        return;
    };

    // Header: list name + progress over checkbox lines
    let (done, total) = list.progress();
    let header_line = Line::from(vec![
        Span::styled(
            list.name(),
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}/{} done", done, total),
            Style::default().fg(theme.dim).bg(bg),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(header_line).style(Style::default().bg(bg)),
        header,
    );

    let now = Local::now();
    let mut lines: Vec<Line> = Vec::new();
    for (row, &id) in visible.iter().enumerate().skip(scroll).take(height) {
        let Some(task) = list.find(id) else {
            continue;
        };
        let selected = row == cursor;
        let row_bg = if selected { theme.selection_bg } else { bg };
        lines.push(render_row(task, &theme, row_bg, moving == Some(id), now));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_row(
    task: &Task,
    theme: &Theme,
    row_bg: ratatui::style::Color,
    carried: bool,
    now: chrono::DateTime<Local>,
) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();

    if !task.is_task {
        // Headings get emphasis; other prose is shown verbatim, dimmed
        let style = if task.is_heading() {
            Style::default()
                .fg(theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim).bg(row_bg)
        };
        spans.push(Span::styled(format!(" {}", task.line), style));
        return Line::from(spans);
    }

    // Indent, checkbox, text
    spans.push(Span::styled(
        " ".repeat(task.indent + 1),
        Style::default().bg(row_bg),
    ));
    let (marker, marker_fg) = if task.is_done {
        ("[x] ", theme.green)
    } else {
        ("[ ] ", theme.text)
    };
    spans.push(Span::styled(
        marker.to_string(),
        Style::default().fg(marker_fg).bg(row_bg),
    ));

    let mut text_style = if task.is_done {
        Style::default()
            .fg(theme.dim)
            .bg(row_bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.text).bg(row_bg)
    };
    if carried {
        text_style = Style::default()
            .fg(theme.highlight)
            .bg(row_bg)
            .add_modifier(Modifier::BOLD);
    }
    spans.push(Span::styled(task.text(), text_style));

    // Countdown / duration badge
    if let Some((label, style)) = timer_badge(task, theme, now) {
        spans.push(Span::styled(label, style.bg(row_bg)));
    }

    Line::from(spans)
}

/// Badge after the text. Shows a live countdown while a timer is running or
/// paused, and the plain `{XhYm}` annotation while idle. Tasks with no
/// duration get a count-up stopwatch instead.
fn timer_badge(
    task: &Task,
    theme: &Theme,
    now: chrono::DateTime<Local>,
) -> Option<(String, Style)> {
    if let Some(duration) = task.duration {
        let rem = timer::remaining(task, now).unwrap_or(0);
        if task.timer_running() {
            let fg = if rem == 0 { theme.red } else { theme.yellow };
            Some((
                format!("  \u{25B6} {}", timer::format_clock(rem)),
                Style::default().fg(fg),
            ))
        } else if task.elapsed > 0 {
            let fg = if rem == 0 { theme.red } else { theme.yellow };
            Some((
                format!("  \u{23F8} {}", timer::format_clock(rem)),
                Style::default().fg(fg).add_modifier(Modifier::DIM),
            ))
        } else {
            Some((
                format!("  {{{}}}", timer::format_hm(duration)),
                Style::default().fg(theme.dim),
            ))
        }
    } else if task.timer_running() {
        // Stopwatch: count up when there is nothing to count down from
        Some((
            format!("  \u{25B6} {}", timer::format_clock(timer::elapsed_total(task, now))),
            Style::default().fg(theme.yellow),
        ))
    } else if task.elapsed > 0 {
        Some((
            format!("  \u{23F8} {}", timer::format_clock(task.elapsed)),
            Style::default().fg(theme.dim),
        ))
    } else {
        None
    }
}
