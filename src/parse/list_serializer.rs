use crate::model::task::Task;

/// Serialize a checklist back to file text: every record's verbatim `line`,
/// joined with `\n`. Derived fields never participate.
pub fn serialize_list(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|t| t.line.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
