use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Get the config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("tick").join("config.toml")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Load the config from a specific path. A missing file yields defaults;
/// a corrupted one warns and yields defaults (the TUI must still come up).
pub fn load_config_from(path: &Path) -> Config {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Config::default(),
    };
    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: could not parse {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Load the config from the default location.
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

/// Read the config, returning both the parsed config and the raw toml_edit
/// document for round-trip-safe editing. A missing file yields an empty
/// document.
pub fn read_config_doc(path: &Path) -> Result<(Config, toml_edit::DocumentMut), ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let config: Config = toml::from_str(&content)?;
    let doc: toml_edit::DocumentMut = content
        .parse()
        .map_err(|_: toml_edit::TomlError| {
            ConfigError::ParseError(toml::from_str::<Config>("tasks = 0").unwrap_err())
        })?;
    Ok((config, doc))
}

/// Write the config document back to disk, preserving formatting.
pub fn write_config(path: &Path, doc: &toml_edit::DocumentMut) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, doc.to_string()).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Update the tasks folder in the config document
pub fn set_tasks_dir(doc: &mut toml_edit::DocumentMut, dir: &str) {
    if !doc.contains_key("tasks") {
        doc["tasks"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["tasks"]["dir"] = toml_edit::value(dir);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r#"# my tick setup
[tasks]
dir = "/home/u/notes/tasks"

[ui]
twelve_hour = true
"#
    }

    #[test]
    fn test_round_trip_preserves_formatting() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();

        let (_config, doc) = read_config_doc(&path).unwrap();
        write_config(&path, &doc).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), sample_config());
    }

    #[test]
    fn test_set_tasks_dir_keeps_other_keys() {
        let mut doc: toml_edit::DocumentMut = sample_config().parse().unwrap();
        set_tasks_dir(&mut doc, "/elsewhere/tasks");
        let result = doc.to_string();
        assert!(result.contains(r#"dir = "/elsewhere/tasks""#));
        assert!(result.contains("twelve_hour = true"));
        assert!(result.contains("# my tick setup"));
    }

    #[test]
    fn test_set_tasks_dir_on_empty_doc() {
        let mut doc = toml_edit::DocumentMut::new();
        set_tasks_dir(&mut doc, "/some/tasks");
        let config: Config = toml::from_str(&doc.to_string()).unwrap();
        assert_eq!(config.tasks.dir.as_deref(), Some("/some/tasks".as_ref()));
    }

    #[test]
    fn test_load_missing_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config_from(&tmp.path().join("nope.toml"));
        assert!(config.tasks.dir.is_none());
    }

    #[test]
    fn test_load_corrupt_is_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "not toml {{{").unwrap();
        let config = load_config_from(&path);
        assert!(config.tasks.dir.is_none());
    }
}
