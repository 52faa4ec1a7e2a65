use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveTime};
use regex::Regex;

use crate::model::task::Task;

/// First `@H:MM` or `@HH:MM` token anywhere in the line.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\d{1,2}):(\d{2})").unwrap());

/// Trailing `{ [Nh] [Nm] }` block. Either unit optional, whitespace-tolerant.
static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\s*(?:(\d+)\s*h)?\s*(?:(\d+)\s*m)?\s*\}\s*$").unwrap());

/// Parse a full checklist file into one record per line.
///
/// Splitting on `\n` keeps empty lines (including a trailing one), so
/// `serialize_list` reproduces the input byte-for-byte.
pub fn parse_list(text: &str) -> Vec<Task> {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| task_from_line(i, line))
        .collect()
}

/// Build a record from one line, deriving every field from the line text.
pub fn task_from_line(id: usize, line: &str) -> Task {
    let is_task = line.contains("[ ]") || line.contains("[x]");
    Task {
        id,
        is_task,
        is_done: is_task && line.contains("[x]"),
        indent: line.chars().take_while(|c| matches!(c, ' ' | '\t')).count(),
        scheduled: parse_time(line),
        duration: parse_duration(line),
        line: line.to_string(),
        elapsed: 0,
        timer_start: None,
        actual_start: None,
        actual_end: None,
    }
}

/// Re-derive the line-derived fields after `line` was rewritten in place.
/// `id` and the transient timer state survive.
pub fn refresh(task: &mut Task) {
    let derived = task_from_line(task.id, &task.line);
    task.is_task = derived.is_task;
    task.is_done = derived.is_done;
    task.indent = derived.indent;
    task.scheduled = derived.scheduled;
    task.duration = derived.duration;
}

/// Scheduled time from the first `@H:MM` token, at today's local date.
/// Out-of-range components fail the wall-clock check and yield None.
pub fn parse_time(line: &str) -> Option<DateTime<Local>> {
    let caps = TIME_RE.captures(line)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Local::now().date_naive().and_time(time).and_local_timezone(Local).single()
}

/// Duration in seconds from a trailing `{XhYm}` annotation.
/// A block that sums to zero counts as absent.
pub fn parse_duration(line: &str) -> Option<i64> {
    let caps = DURATION_RE.captures(line)?;
    let hours: i64 = caps.get(1).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
    let minutes: i64 = caps.get(2).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
    let total = hours * 3600 + minutes * 60;
    if total == 0 { None } else { Some(total) }
}
