use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Self-documenting header written at the top of a new journal.
const FILE_HEADER: &str = "\
<!-- tick journal — append-only diagnostic log
     This file captures data that tick couldn't save normally.
     If something went missing, check here.
     Safe to delete if empty or stale. -->

---
";

/// Category of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalCategory {
    Write,
    Delete,
}

impl fmt::Display for JournalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JournalCategory::Write => write!(f, "write"),
            JournalCategory::Delete => write!(f, "delete"),
        }
    }
}

/// A single entry in the journal.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub timestamp: DateTime<Utc>,
    pub category: JournalCategory,
    pub description: String,
    pub fields: Vec<(String, String)>,
    pub body: String,
}

impl JournalEntry {
    /// Format this entry as a markdown block.
    fn to_markdown(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "## {} — {}: {}\n",
            self.timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            self.category,
            self.description,
        ));
        out.push('\n');

        for (key, value) in &self.fields {
            out.push_str(&format!("{}: {}\n", key, value));
        }

        // Body as fenced code block
        if !self.body.is_empty() {
            out.push('\n');
            out.push_str("```text\n");
            out.push_str(&self.body);
            if !self.body.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n");
        }

        out.push('\n');
        out.push_str("---\n");
        out
    }
}

/// Return the path to the journal file inside the tasks folder.
pub fn journal_path(dir: &Path) -> PathBuf {
    dir.join(".journal.log")
}

/// Append an entry to the journal. The journal is last-resort diagnostics,
/// so its own failures are swallowed.
pub fn log_entry(dir: &Path, entry: JournalEntry) {
    let path = journal_path(dir);
    let is_new = !path.exists();

    let mut file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(_) => return,
    };

    if is_new {
        let _ = file.write_all(FILE_HEADER.as_bytes());
    }
    let _ = file.write_all(entry.to_markdown().as_bytes());
}
