use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_HISTORY_PATH, DEFAULT_TIMEOUT_SECS};

use super::error::ConfigError;

/// Application configuration loaded from airoom.toml
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: String,
    pub history_path: PathBuf,
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            history_path: super::loader::expand_path(DEFAULT_HISTORY_PATH),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Load configuration from a file path (or the default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }
}
