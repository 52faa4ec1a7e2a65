use chrono::Local;

use crate::model::list::TaskList;
use crate::model::task::Task;
use crate::parse::{refresh, task_from_line};

/// Error type for checklist operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("no task with id {0}")]
    NotFound(usize),
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

/// Flip a task's done state, rewriting the checkbox marker in `line`.
///
/// The substitution pair is chosen from the state BEFORE the flip: the
/// current marker is the search string. Choosing from the post-flip state
/// runs the substitution backwards and corrupts the line.
pub fn toggle_task(task: &mut Task) {
    if !task.is_task {
        return;
    }
    let (from, to) = if task.is_done {
        ("[x]", "[ ]")
    } else {
        ("[ ]", "[x]")
    };
    task.line = task.line.replacen(from, to, 1);
    task.is_done = !task.is_done;
    task.actual_end = if task.is_done { Some(Local::now()) } else { None };
}

// ---------------------------------------------------------------------------
// Add / edit / delete
// ---------------------------------------------------------------------------

/// Append a new unchecked task built from free text. Scheduled time and
/// duration annotations are picked up from the text itself.
/// Returns the new record's id.
pub fn add_task(list: &mut TaskList, text: &str) -> usize {
    let id = list.tasks.len();
    let line = format!("[ ] {}", text);
    list.tasks.push(task_from_line(id, &line));
    id
}

/// Replace a task's free text in place, keeping its indent and done state.
/// Annotations are re-derived from the rebuilt line. Non-task records get
/// the new text verbatim.
pub fn edit_task(list: &mut TaskList, id: usize, new_text: &str) -> Result<(), TaskError> {
    let task = list.find_mut(id).ok_or(TaskError::NotFound(id))?;
    if task.is_task {
        let prefix: String = task
            .line
            .chars()
            .take_while(|c| matches!(c, ' ' | '\t'))
            .collect();
        let marker = if task.is_done { "[x]" } else { "[ ]" };
        task.line = format!("{}{} {}", prefix, marker, new_text);
    } else {
        task.line = new_text.to_string();
    }
    refresh(task);
    Ok(())
}

/// Remove a record by id. Survivors keep their ids; renumbering only
/// happens after a reorder.
pub fn delete_task(list: &mut TaskList, id: usize) -> Result<Task, TaskError> {
    let pos = list.position(id).ok_or(TaskError::NotFound(id))?;
    Ok(list.tasks.remove(pos))
}

// ---------------------------------------------------------------------------
// Reorder
// ---------------------------------------------------------------------------

/// Move a subset of records (contiguous or scattered, identified by id) to
/// `dest`, a position in the sequence that remains after the subset is
/// pulled out. Relative order within the subset is preserved. Ids are
/// reassigned to 0..N-1 afterwards.
///
/// Callers must only reorder the unfiltered sequence: positions in a
/// filtered view do not correspond to file-line positions.
pub fn move_tasks(list: &mut TaskList, ids: &[usize], dest: usize) -> Result<(), TaskError> {
    for &id in ids {
        if list.position(id).is_none() {
            return Err(TaskError::NotFound(id));
        }
    }

    let mut moved = Vec::with_capacity(ids.len());
    let mut rest = Vec::with_capacity(list.tasks.len());
    for task in list.tasks.drain(..) {
        if ids.contains(&task.id) {
            moved.push(task);
        } else {
            rest.push(task);
        }
    }

    let dest = dest.min(rest.len());
    for (offset, task) in moved.into_iter().enumerate() {
        rest.insert(dest + offset, task);
    }
    list.tasks = rest;

    renumber(list);
    Ok(())
}

/// Move a single record. Convenience wrapper over `move_tasks`.
pub fn move_task(list: &mut TaskList, id: usize, dest: usize) -> Result<(), TaskError> {
    move_tasks(list, &[id], dest)
}

/// Reassign ids to the dense sequence 0..N-1 in current order.
pub fn renumber(list: &mut TaskList) {
    for (i, task) in list.tasks.iter_mut().enumerate() {
        task.id = i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_list;
    use std::path::PathBuf;

    fn list(text: &str) -> TaskList {
        TaskList::new(PathBuf::from("/tmp/test.md"), parse_list(text))
    }

    #[test]
    fn test_toggle_rewrites_marker() {
        let mut l = list("- [ ] buy milk @9:05 {1h}");
        toggle_task(&mut l.tasks[0]);
        assert_eq!(l.tasks[0].line, "- [x] buy milk @9:05 {1h}");
        assert!(l.tasks[0].is_done);
        assert!(l.tasks[0].actual_end.is_some());
    }

    #[test]
    fn test_toggle_twice_restores_line_and_state() {
        let mut l = list("  [x] walk dog");
        let original = l.tasks[0].line.clone();
        toggle_task(&mut l.tasks[0]);
        toggle_task(&mut l.tasks[0]);
        assert_eq!(l.tasks[0].line, original);
        assert!(l.tasks[0].is_done);
    }

    #[test]
    fn test_toggle_off_clears_actual_end() {
        let mut l = list("[x] done thing");
        toggle_task(&mut l.tasks[0]);
        assert!(!l.tasks[0].is_done);
        assert!(l.tasks[0].actual_end.is_none());
    }

    #[test]
    fn test_toggle_non_task_is_noop() {
        let mut l = list("# Header");
        let original = l.tasks[0].clone();
        toggle_task(&mut l.tasks[0]);
        assert_eq!(l.tasks[0], original);
    }

    #[test]
    fn test_add_appends_and_parses_annotations() {
        let mut l = list("# Today\n[ ] existing");
        let id = add_task(&mut l, "review PR @14:30 {45m}");
        assert_eq!(id, 2);
        let task = l.find(id).unwrap();
        assert_eq!(task.line, "[ ] review PR @14:30 {45m}");
        assert!(task.is_task);
        assert_eq!(task.indent, 0);
        assert_eq!(task.duration, Some(2700));
        assert!(task.scheduled.is_some());
    }

    #[test]
    fn test_edit_keeps_indent_and_marker() {
        let mut l = list("  [x] old text {1h}");
        edit_task(&mut l, 0, "new text {2h}").unwrap();
        assert_eq!(l.tasks[0].line, "  [x] new text {2h}");
        assert!(l.tasks[0].is_done);
        assert_eq!(l.tasks[0].duration, Some(7200));
    }

    #[test]
    fn test_delete_keeps_survivor_ids() {
        let mut l = list("[ ] a\n[ ] b\n[ ] c");
        delete_task(&mut l, 1).unwrap();
        let ids: Vec<usize> = l.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_delete_then_reorder_renumbers_dense() {
        let mut l = list("[ ] a\n[ ] b\n[ ] c");
        delete_task(&mut l, 1).unwrap();
        move_task(&mut l, 2, 0).unwrap();
        let ids: Vec<usize> = l.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(l.tasks[0].text(), "c");
        assert_eq!(l.tasks[1].text(), "a");
    }

    #[test]
    fn test_delete_unknown_id_errors() {
        let mut l = list("[ ] a");
        assert!(delete_task(&mut l, 9).is_err());
    }

    #[test]
    fn test_move_scattered_subset_is_stable() {
        let mut l = list("[ ] a\n[ ] b\n[ ] c\n[ ] d");
        move_tasks(&mut l, &[0, 2], 2).unwrap();
        let texts: Vec<String> = l.tasks.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["b", "d", "a", "c"]);
        let ids: Vec<usize> = l.tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_move_clamps_destination() {
        let mut l = list("[ ] a\n[ ] b");
        move_task(&mut l, 0, 99).unwrap();
        let texts: Vec<String> = l.tasks.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["b", "a"]);
    }
}
