//! Session setup and initialization

use crate::config::{Config, get_config_path};
use crate::print_cmd_warn;
use crate::storage::FileStorage;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Config and storage shared by the terminal UI and the headless commands
#[derive(Debug)]
pub struct SessionData {
    /// Where the config was looked up, if a home directory exists
    pub config_path: Option<PathBuf>,
    pub config: Config,
    pub storage: Rc<FileStorage>,
}

/// Loads the config and opens the storage file.
///
/// `storage_override` wins over the configured storage path. Without a home directory
/// the defaults are used, and an override is then required.
pub fn setup_session(storage_override: Option<PathBuf>) -> Result<SessionData, Box<dyn Error>> {
    let config_path = match get_config_path() {
        Ok(path) => Some(path),
        Err(e) => {
            print_cmd_warn!("Using default config", "{}", e);
            None
        }
    };
    let config = config_path
        .as_deref()
        .map(Config::load_or_default)
        .unwrap_or_default();

    let storage_path = resolve_storage_path(storage_override, config_path.as_deref(), &config)?;
    log::debug!("Using storage file {}", storage_path.display());

    Ok(SessionData {
        config_path,
        config,
        storage: Rc::new(FileStorage::new(storage_path)),
    })
}

/// Picks the storage file: the override, else the configured or default one next to
/// the config file. Fails when neither an override nor a config location exists.
pub fn resolve_storage_path(
    storage_override: Option<PathBuf>,
    config_path: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, Box<dyn Error>> {
    match (storage_override, config_path) {
        (Some(path), _) => Ok(path),
        (None, Some(config_path)) => Ok(config.storage_file(config_path)),
        (None, None) => Err(Box::from(
            "No home directory found. Pass --storage to choose a storage file.",
        )),
    }
}
