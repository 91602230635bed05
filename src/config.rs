//! File-backed configuration: task description, log level, settle delay.
//!
//! Stored as JSON under the user config directory. A missing or corrupt file
//! degrades to defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{TalkError, TalkResult};

const DEFAULT_SETTLE_DELAY_SECS: u64 = 2;

/// External collaborator seam for the user's task description.
pub trait TaskStore {
    fn task_description(&self) -> Option<String>;
    fn set_task_description(&mut self, description: &str) -> TalkResult<()>;
    fn clear_task_description(&mut self) -> TalkResult<()>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    task_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    settle_delay_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: Option<PathBuf>,
    file: ConfigFile,
}

impl Config {
    /// Load from the default location, `<config_dir>/apptalk/config.json`.
    pub fn load() -> Self {
        match default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("no user config directory; settings will not persist");
                Self::in_memory()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let file = match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(file) => file,
                Err(error) => {
                    tracing::warn!("ignoring corrupt config {}: {error}", path.display());
                    ConfigFile::default()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => ConfigFile::default(),
            Err(error) => {
                tracing::warn!("could not read config {}: {error}", path.display());
                ConfigFile::default()
            }
        };
        Self {
            path: Some(path.to_path_buf()),
            file,
        }
    }

    /// Non-persisting config, used by tests and hosts without a config dir.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            file: ConfigFile::default(),
        }
    }

    pub fn log_level(&self) -> &str {
        self.file.log_level.as_deref().unwrap_or("info")
    }

    /// Fixed wait after a launch before scripted input is attempted.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs(
            self.file
                .settle_delay_secs
                .unwrap_or(DEFAULT_SETTLE_DELAY_SECS),
        )
    }

    fn save(&self) -> TalkResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                TalkError::Internal(format!(
                    "failed to create config directory {}: {error}",
                    parent.display()
                ))
            })?;
        }
        let serialized = serde_json::to_vec_pretty(&self.file)
            .map_err(|error| TalkError::Internal(format!("config serialize error: {error}")))?;
        std::fs::write(path, serialized).map_err(|error| {
            TalkError::Internal(format!("failed to write config {}: {error}", path.display()))
        })
    }
}

impl TaskStore for Config {
    fn task_description(&self) -> Option<String> {
        self.file
            .task_description
            .as_deref()
            .filter(|description| !description.is_empty())
            .map(str::to_string)
    }

    fn set_task_description(&mut self, description: &str) -> TalkResult<()> {
        self.file.task_description = Some(description.to_string());
        self.save()
    }

    fn clear_task_description(&mut self) -> TalkResult<()> {
        self.file.task_description = None;
        self.save()
    }
}

fn default_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("apptalk").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_description_round_trips_through_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        let mut config = Config::load_from(&path);
        assert_eq!(config.task_description(), None);
        config
            .set_task_description("ship the release")
            .expect("save");

        let reloaded = Config::load_from(&path);
        assert_eq!(
            reloaded.task_description(),
            Some("ship the release".to_string())
        );
    }

    #[test]
    fn clearing_removes_the_description() {
        let mut config = Config::in_memory();
        config.set_task_description("something").expect("set");
        config.clear_task_description().expect("clear");
        assert_eq!(config.task_description(), None);
    }

    #[test]
    fn empty_description_reads_as_unset() {
        let mut config = Config::in_memory();
        config.set_task_description("").expect("set");
        assert_eq!(config.task_description(), None);
    }

    #[test]
    fn corrupt_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").expect("write");

        let config = Config::load_from(&path);
        assert_eq!(config.task_description(), None);
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.settle_delay(), Duration::from_secs(2));
    }
}
