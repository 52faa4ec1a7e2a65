use serde::Serialize;

use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: usize,
    pub task: bool,
    pub done: bool,
    pub text: String,
    pub indent: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<i64>,
}

#[derive(Serialize)]
pub struct ListJson {
    pub list: String,
    pub done: usize,
    pub total: usize,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct ListsJson {
    pub dir: String,
    pub lists: Vec<String>,
}

#[derive(Serialize)]
pub struct DirJson {
    pub dir: String,
}

pub fn task_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        task: task.is_task,
        done: task.is_done,
        text: task.text(),
        indent: task.indent,
        scheduled: task.scheduled.map(|t| t.format("%H:%M").to_string()),
        duration_secs: task.duration,
    }
}
