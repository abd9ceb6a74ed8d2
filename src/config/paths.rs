//! Path resolution for the ask configuration file.

use anyhow::Result;
use std::path::PathBuf;

use super::store::ConfigStore;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILENAME, CONFIG_PATH_ENV};

impl ConfigStore {
    /// Returns the per-user configuration directory, `~/.ask/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
            .join(CONFIG_DIR_NAME);
        Ok(dir)
    }

    /// Returns the full path to the configuration file.
    ///
    /// `$ASK_CONFIG` wins when set; otherwise `~/.ask/config.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if [`ConfigStore::config_dir`] fails.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::config_dir()?.join(CONFIG_FILENAME))
    }
}
