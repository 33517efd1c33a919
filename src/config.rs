//! Runtime configuration, read from environment variables.
//!
//! - `TASKGROUPS_FILE`: board file (default `task_groups.json`)
//! - `TASKGROUPS_LOG`: log file (default `taskgroups.log`)

use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BOARD_FILE: &str = "task_groups.json";
pub const DEFAULT_LOG_FILE: &str = "taskgroups.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub board_file: PathBuf,
    pub log_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let board_file = path_var(&lookup, "TASKGROUPS_FILE", DEFAULT_BOARD_FILE)?;
        let log_file = path_var(&lookup, "TASKGROUPS_LOG", DEFAULT_LOG_FILE)?;
        Ok(Self {
            board_file,
            log_file,
        })
    }
}

fn path_var(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<PathBuf, ConfigError> {
    match lookup(key) {
        None => Ok(PathBuf::from(default)),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidValue(
            key.to_string(),
            "path is empty".to_string(),
        )),
        Some(value) => Ok(PathBuf::from(value)),
    }
}
