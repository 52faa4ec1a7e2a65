use chrono::{DateTime, Local};

/// A single line of a checklist file.
///
/// Every line becomes one record, task or not; the file's line order is the
/// model's order. `line` is the only persisted field, and everything else is
/// re-derived from it on load. Timer fields are session-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Position in the file at load time. Dense 0..N-1 after load and after
    /// any reorder; deletes leave gaps until the next reorder.
    pub id: usize,
    /// Verbatim line text. Single source of truth for what gets saved.
    pub line: String,
    /// Line contains a `[ ]` or `[x]` checkbox marker.
    pub is_task: bool,
    /// `is_task` and the marker is `[x]`.
    pub is_done: bool,
    /// Count of leading space/tab characters. Visual nesting only.
    pub indent: usize,
    /// Wall-clock time from the first `@H:MM` token, at today's date.
    pub scheduled: Option<DateTime<Local>>,
    /// Seconds from a trailing `{XhYm}` annotation. Zero total means none.
    pub duration: Option<i64>,

    // --- Transient timer state (never persisted) ---
    /// Accumulated countdown seconds from completed run spans.
    pub elapsed: i64,
    /// When the timer was last started. None = not running.
    pub timer_start: Option<DateTime<Local>>,
    /// First time a timer was started on this task.
    pub actual_start: Option<DateTime<Local>>,
    /// When the task was marked done.
    pub actual_end: Option<DateTime<Local>>,
}

impl Task {
    /// Display text: `line` with checkbox markers, a trailing `{...}` block,
    /// and a single leading `-` stripped, then trimmed. Never used for
    /// persistence.
    pub fn text(&self) -> String {
        let mut s = self
            .line
            .replacen("[x]", "", 1)
            .replacen("[ ]", "", 1);

        let trimmed = s.trim_end();
        if trimmed.ends_with('}')
            && let Some(open) = trimmed.rfind('{')
        {
            s.truncate(open);
        }

        let s = s.trim();
        let s = s.strip_prefix('-').unwrap_or(s);
        s.trim().to_string()
    }

    /// Heading lines (`#`-prefixed) get display emphasis. Not persisted any
    /// differently from other non-task lines.
    pub fn is_heading(&self) -> bool {
        !self.is_task && self.line.trim_start().starts_with('#')
    }

    /// True while a countdown timer is running on this task.
    pub fn timer_running(&self) -> bool {
        self.timer_start.is_some()
    }
}
