//! Application configuration.

use crate::consts::cli_consts::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CHANGE_THRESHOLD, DEFAULT_CONFIDENCE_THRESHOLD,
    STORAGE_FILE_NAME,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Storage file to use instead of the one next to the config file.
    pub storage_path: Option<PathBuf>,
    /// Whether the terminal UI paints its own background color.
    pub with_background_color: bool,
    pub correlation_confidence_threshold: f64,
    pub correlation_change_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: None,
            with_background_color: false,
            correlation_confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            correlation_change_threshold: DEFAULT_CHANGE_THRESHOLD,
        }
    }
}

/// Path of the config file, `~/.perfice/config.json`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dir()?.join(CONFIG_FILE_NAME))
}

fn app_dir() -> Result<PathBuf, ConfigError> {
    let home_path = home::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home_path.join(APP_DIR_NAME))
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns a `ConfigError` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Loads the config at `path`, or the defaults if there is no file there.
    ///
    /// An unreadable file is logged and replaced by the defaults; it is never overwritten.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load_from_file(path).unwrap_or_else(|e| {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// The storage file: the configured one, or `storage.json` next to `config_path`.
    pub fn storage_file(&self, config_path: &Path) -> PathBuf {
        match &self.storage_path {
            Some(path) => path.clone(),
            None => config_path
                .parent()
                .map(|dir| dir.join(STORAGE_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(STORAGE_FILE_NAME)),
        }
    }
}
