use std::path::PathBuf;

use crate::model::task::Task;

/// One open checklist: the file path plus its ordered task records.
#[derive(Debug, Clone)]
pub struct TaskList {
    pub path: PathBuf,
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(path: PathBuf, tasks: Vec<Task>) -> Self {
        TaskList { path, tasks }
    }

    /// Display name: file stem without the `.md` extension.
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string()
    }

    /// (done, total) over checkbox lines only.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.tasks.iter().filter(|t| t.is_task).count();
        let done = self.tasks.iter().filter(|t| t.is_task && t.is_done).count();
        (done, total)
    }

    pub fn find(&self, id: usize) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn find_mut(&mut self, id: usize) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Position of a task in the underlying sequence (not its id).
    pub fn position(&self, id: usize) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}
