use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tasks: TasksConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Custom tasks folder. Absent = `~/tasks`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides, keyed by theme slot name (e.g. `background = "#0C001B"`).
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_on_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.tasks.dir.is_none());
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r##"
[tasks]
dir = "/home/u/notes/tasks"

[ui.colors]
background = "#101010"
"##,
        )
        .unwrap();
        assert_eq!(config.tasks.dir.as_deref(), Some("/home/u/notes/tasks".as_ref()));
        assert_eq!(config.ui.colors.get("background").unwrap(), "#101010");
    }
}
