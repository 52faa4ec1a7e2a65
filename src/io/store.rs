use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::io::journal::{self, JournalCategory, JournalEntry};
use crate::model::config::Config;
use crate::model::list::TaskList;
use crate::parse::{parse_list, serialize_list};

/// Error type for tasks-folder I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("io error: {0}")]
    IoError(#[from] io::Error),
}

/// The tasks folder: a flat directory of `.md` checklist files.
#[derive(Debug, Clone)]
pub struct Store {
    pub dir: PathBuf,
}

impl Store {
    /// Open the tasks folder, creating it if missing.
    pub fn open(dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&dir)?;
        Ok(Store { dir })
    }

    /// Enumerate checklist files (`.md`, case-insensitive), sorted by name.
    /// An unreadable directory degrades to an empty enumeration.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| {
                p.is_file()
                    && p.extension()
                        .and_then(|e| e.to_str())
                        .is_some_and(|e| e.eq_ignore_ascii_case("md"))
            })
            .collect();
        files.sort();
        files
    }

    /// Resolve a list name to its path, appending `.md` when absent.
    pub fn resolve(&self, name: &str) -> PathBuf {
        if name.to_ascii_lowercase().ends_with(".md") {
            self.dir.join(name)
        } else {
            self.dir.join(format!("{}.md", name))
        }
    }

    /// Load a checklist. A missing file is created empty; an unreadable one
    /// degrades to an empty list.
    pub fn load_list(&self, path: &Path) -> TaskList {
        if !path.exists() {
            let _ = atomic_write(path, b"");
        }
        let text = fs::read_to_string(path).unwrap_or_default();
        TaskList::new(path.to_path_buf(), parse_list(&text))
    }

    /// Save a checklist: full-file atomic overwrite of the joined lines.
    /// A failed write is journaled (with the unsaved content) before the
    /// error is returned, so TUI callers can swallow it without data loss.
    pub fn save_list(&self, list: &TaskList) -> Result<(), StoreError> {
        let content = serialize_list(&list.tasks);
        if let Err(e) = atomic_write(&list.path, content.as_bytes()) {
            journal::log_entry(
                &self.dir,
                JournalEntry {
                    timestamp: chrono::Utc::now(),
                    category: JournalCategory::Write,
                    description: "list write failed".to_string(),
                    fields: vec![
                        ("Target".to_string(), list.path.display().to_string()),
                        ("Error".to_string(), e.to_string()),
                    ],
                    body: content,
                },
            );
            return Err(StoreError::WriteError {
                path: list.path.clone(),
                source: e,
            });
        }
        Ok(())
    }

    /// Create an empty checklist file. Existing files are left untouched.
    pub fn create_list(&self, name: &str) -> Result<PathBuf, StoreError> {
        let path = self.resolve(name);
        if !path.exists() {
            atomic_write(&path, b"").map_err(|e| StoreError::WriteError {
                path: path.clone(),
                source: e,
            })?;
        }
        Ok(path)
    }

    /// Delete a checklist file, journaling its content first.
    pub fn delete_file(&self, path: &Path) -> Result<(), StoreError> {
        if let Ok(content) = fs::read_to_string(path) {
            journal::log_entry(
                &self.dir,
                JournalEntry {
                    timestamp: chrono::Utc::now(),
                    category: JournalCategory::Delete,
                    description: "list deleted".to_string(),
                    fields: vec![("Target".to_string(), path.display().to_string())],
                    body: content,
                },
            );
        }
        fs::remove_file(path).map_err(|e| StoreError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// The default tasks folder: `~/tasks`.
pub fn default_dir() -> PathBuf {
    home_dir().join("tasks")
}

/// Resolve the tasks folder: CLI flag > config > default.
pub fn resolve_dir(flag: Option<&str>, config: &Config) -> PathBuf {
    match flag {
        Some(dir) => PathBuf::from(dir),
        None => config.tasks.dir.clone().unwrap_or_else(default_dir),
    }
}

/// Get the user's home directory
fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("tasks");
        let store = Store::open(dir.clone()).unwrap();
        assert!(dir.is_dir());
        assert!(store.list_files().is_empty());
    }

    #[test]
    fn test_list_files_filters_and_sorts() {
        let tmp = TempDir::new().unwrap();
        let store = Store::open(tmp.path().to_path_buf()).unwrap();
        fs::write(tmp.path().join("work.md"), "").unwrap();
        fs::write(tmp.path().join("home.MD"), "").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();
        fs::write(tmp.path().join(".state.json"), "{}").unwrap();

        let names: Vec<String> = store
            .list_files()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["home.MD", "work.md"]);
    }

    #[test]
    fn test_load_missing_file_creates_it_empty() {
        let tmp = TempDir::new().unwrap();
        let store = Store::open(tmp.path().to_path_buf()).unwrap();
        let path = store.resolve("new");
        let list = store.load_list(&path);
        assert!(path.exists());
        assert_eq!(list.tasks.len(), 1);
        assert_eq!(list.tasks[0].line, "");
    }

    #[test]
    fn test_save_round_trips_file_contents() {
        let tmp = TempDir::new().unwrap();
        let store = Store::open(tmp.path().to_path_buf()).unwrap();
        let path = store.resolve("today");
        fs::write(&path, "# Today\n[ ] one\n").unwrap();

        let list = store.load_list(&path);
        store.save_list(&list).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Today\n[ ] one\n");
    }

    #[test]
    fn test_resolve_appends_extension_once() {
        let tmp = TempDir::new().unwrap();
        let store = Store::open(tmp.path().to_path_buf()).unwrap();
        assert_eq!(store.resolve("today"), tmp.path().join("today.md"));
        assert_eq!(store.resolve("today.md"), tmp.path().join("today.md"));
    }

    #[test]
    fn test_delete_file_journals_content() {
        let tmp = TempDir::new().unwrap();
        let store = Store::open(tmp.path().to_path_buf()).unwrap();
        let path = store.resolve("doomed");
        fs::write(&path, "[ ] last words").unwrap();

        store.delete_file(&path).unwrap();
        assert!(!path.exists());
        let journal = fs::read_to_string(journal::journal_path(tmp.path())).unwrap();
        assert!(journal.contains("last words"));
    }
}
