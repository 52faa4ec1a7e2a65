use regex::Regex;

use crate::model::list::TaskList;

/// Compile a search pattern: case-insensitive regex, falling back to a
/// literal match when the pattern is not valid regex syntax.
pub fn compile(pattern: &str) -> Option<Regex> {
    if pattern.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", pattern))
        .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
        .ok()
}

/// Ids of records whose display text matches the filter.
pub fn matching_ids(list: &TaskList, re: &Regex) -> Vec<usize> {
    list.tasks
        .iter()
        .filter(|t| re.is_match(&t.text()))
        .map(|t| t.id)
        .collect()
}
