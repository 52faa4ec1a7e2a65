use chrono::{DateTime, Local};

use crate::model::task::Task;

/// Start the countdown timer. First start also stamps `actual_start`.
/// Starting an already-running timer is a no-op.
pub fn start(task: &mut Task, now: DateTime<Local>) {
    if task.timer_start.is_some() {
        return;
    }
    task.timer_start = Some(now);
    if task.actual_start.is_none() {
        task.actual_start = Some(now);
    }
}

/// Pause: fold the running span into `elapsed` and stop the clock.
pub fn pause(task: &mut Task, now: DateTime<Local>) {
    if let Some(started) = task.timer_start.take() {
        task.elapsed += (now - started).num_seconds();
    }
}

/// Start if stopped, pause if running.
pub fn toggle(task: &mut Task, now: DateTime<Local>) {
    if task.timer_start.is_some() {
        pause(task, now);
    } else {
        start(task, now);
    }
}

/// Zero the timer entirely, including the first-start timestamp.
pub fn reset(task: &mut Task) {
    task.elapsed = 0;
    task.timer_start = None;
    task.actual_start = None;
}

/// Total elapsed seconds, counting the currently running span.
pub fn elapsed_total(task: &Task, now: DateTime<Local>) -> i64 {
    let running = task
        .timer_start
        .map(|started| (now - started).num_seconds())
        .unwrap_or(0);
    task.elapsed + running
}

/// Seconds left on the countdown, clamped at zero. None without a duration.
pub fn remaining(task: &Task, now: DateTime<Local>) -> Option<i64> {
    task.duration
        .map(|duration| (duration - elapsed_total(task, now)).max(0))
}

/// Periodic (1 Hz) tick: once elapsed reaches the duration, clamp and stop
/// the timer. The task is NOT marked done.
pub fn tick(task: &mut Task, now: DateTime<Local>) {
    let Some(duration) = task.duration else {
        return;
    };
    if task.timer_start.is_some() && elapsed_total(task, now) >= duration {
        task.elapsed = duration;
        task.timer_start = None;
    }
}

/// Annotation-style rendering: `1h30m` / `45m` / `2h`.
pub fn format_hm(secs: i64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    match (hours, minutes) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h{}m", h, m),
    }
}

/// Countdown-style rendering: `45:00`, `1:05:09`.
pub fn format_clock(secs: i64) -> String {
    let secs = secs.max(0);
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::task_from_line;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 6, h, m, s).unwrap()
    }

    #[test]
    fn test_start_pause_accumulates_elapsed() {
        let mut task = task_from_line(0, "[ ] deep work {1h}");
        start(&mut task, at(9, 0, 0));
        assert!(task.timer_running());
        assert_eq!(task.actual_start, Some(at(9, 0, 0)));

        pause(&mut task, at(9, 10, 0));
        assert!(!task.timer_running());
        assert_eq!(task.elapsed, 600);

        // Second start keeps the original actual_start.
        start(&mut task, at(9, 30, 0));
        assert_eq!(task.actual_start, Some(at(9, 0, 0)));
        assert_eq!(elapsed_total(&task, at(9, 35, 0)), 900);
    }

    #[test]
    fn test_remaining_clamps_at_zero() {
        let mut task = task_from_line(0, "[ ] quick call {45m}");
        start(&mut task, at(9, 0, 0));
        assert_eq!(remaining(&task, at(9, 15, 0)), Some(1800));
        assert_eq!(remaining(&task, at(11, 0, 0)), Some(0));
    }

    #[test]
    fn test_remaining_none_without_duration() {
        let task = task_from_line(0, "[ ] untimed thing");
        assert_eq!(remaining(&task, at(9, 0, 0)), None);
    }

    #[test]
    fn test_tick_auto_stops_without_marking_done() {
        let mut task = task_from_line(0, "[ ] sprint {45m}");
        start(&mut task, at(9, 0, 0));

        tick(&mut task, at(9, 30, 0));
        assert!(task.timer_running());

        tick(&mut task, at(9, 46, 0));
        assert!(!task.timer_running());
        assert_eq!(task.elapsed, 2700);
        assert!(!task.is_done);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut task = task_from_line(0, "[ ] sprint {45m}");
        start(&mut task, at(9, 0, 0));
        pause(&mut task, at(9, 5, 0));
        reset(&mut task);
        assert_eq!(task.elapsed, 0);
        assert!(task.timer_start.is_none());
        assert!(task.actual_start.is_none());
    }

    #[test]
    fn test_toggle_starts_then_pauses() {
        let mut task = task_from_line(0, "[ ] sprint {45m}");
        toggle(&mut task, at(9, 0, 0));
        assert!(task.timer_running());
        toggle(&mut task, at(9, 1, 0));
        assert!(!task.timer_running());
        assert_eq!(task.elapsed, 60);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_hm(5400), "1h30m");
        assert_eq!(format_hm(2700), "45m");
        assert_eq!(format_hm(7200), "2h");
        assert_eq!(format_clock(2700), "45:00");
        assert_eq!(format_clock(3909), "1:05:09");
        assert_eq!(format_clock(59), "0:59");
    }
}
