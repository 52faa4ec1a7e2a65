use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI state (written to .state.json in the tasks folder)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiState {
    /// Which view is showing ("lists", "list")
    pub view: String,
    /// Which checklist is open (file stem)
    #[serde(default)]
    pub open_list: String,
    /// Per-list state
    #[serde(default)]
    pub lists: HashMap<String, ListUiState>,
    /// Last search pattern
    #[serde(default)]
    pub last_search: Option<String>,
}

/// Per-list UI state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListUiState {
    /// Cursor row in the visible list
    #[serde(default)]
    pub cursor: usize,
    /// Scroll offset
    #[serde(default)]
    pub scroll_offset: usize,
}

/// Read .state.json from the tasks folder
pub fn read_ui_state(dir: &Path) -> Option<UiState> {
    let path = dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the tasks folder
pub fn write_ui_state(dir: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_and_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut state = UiState {
            view: "list".into(),
            open_list: "today".into(),
            last_search: Some("milk".into()),
            ..Default::default()
        };
        state.lists.insert(
            "today".into(),
            ListUiState {
                cursor: 5,
                scroll_offset: 10,
            },
        );

        write_ui_state(dir.path(), &state).unwrap();
        let loaded = read_ui_state(dir.path()).unwrap();

        assert_eq!(loaded.view, "list");
        assert_eq!(loaded.open_list, "today");
        assert_eq!(loaded.last_search, Some("milk".into()));
        let ls = loaded.lists.get("today").unwrap();
        assert_eq!(ls.cursor, 5);
        assert_eq!(ls.scroll_offset, 10);
    }

    #[test]
    fn read_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_ui_state(dir.path()).is_none());
    }

    #[test]
    fn read_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".state.json"), "not json {{{").unwrap();
        assert!(read_ui_state(dir.path()).is_none());
    }

    #[test]
    fn serde_defaults_on_minimal_object() {
        // `view` is required (no #[serde(default)]), other fields have defaults
        let state: UiState = serde_json::from_str(r#"{"view":"lists"}"#).unwrap();
        assert_eq!(state.view, "lists");
        assert_eq!(state.open_list, "");
        assert!(state.lists.is_empty());
        assert!(state.last_search.is_none());
    }
}
