use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;

use dotenvy::from_filename;
use serde::Deserialize;
use tracing::debug;

use crate::constants::{CONFIG_PATH, ENDPOINT_ENV, ENV_PATH};

use super::AppConfig;
use super::error::ConfigError;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    pub endpoint: Option<String>,
    pub history_path: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Expand `~` in a configured path
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

/// Load and validate configuration.
///
/// An explicit path must exist; the default path is optional and falls back
/// to built-in defaults when absent. `AIROOM_ENDPOINT` overrides the
/// configured endpoint either way.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    ensure_env_loaded();

    let parsed = match path {
        Some(path) => read_config(path)?,
        None => {
            let default_path = Path::new(CONFIG_PATH);
            if default_path.exists() {
                read_config(default_path)?
            } else {
                debug!(path = %default_path.display(), "No config file, using defaults");
                RawConfig::default()
            }
        }
    };

    Ok(build(parsed))
}

fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn build(parsed: RawConfig) -> AppConfig {
    let defaults = AppConfig::default();
    let endpoint = env::var(ENDPOINT_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or(parsed.endpoint)
        .unwrap_or(defaults.endpoint);
    let history_path = parsed
        .history_path
        .as_deref()
        .map(expand_path)
        .unwrap_or(defaults.history_path);
    let timeout_secs = parsed.timeout_secs.unwrap_or(defaults.timeout_secs);

    AppConfig {
        endpoint,
        history_path,
        timeout_secs,
    }
}
