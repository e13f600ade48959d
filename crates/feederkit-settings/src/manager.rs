//! Settings Manager
//!
//! Resolves the platform configuration directory and loads the
//! configuration from it, falling back to defaults.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "feederkit";
const CONFIG_FILE: &str = "config.toml";

/// Locates and loads the application configuration
pub struct SettingsManager;

impl SettingsManager {
    /// Platform configuration directory, e.g. `~/.config/feederkit`
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Path of the configuration file
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Create the configuration directory if needed
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Load the configuration at `path`, or defaults when the file does not
    /// exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Config> {
        if path.exists() {
            Config::load_from_file(path)
        } else {
            tracing::info!(path = %path.display(), "No configuration file, using defaults");
            Ok(Config::default())
        }
    }

    /// Load the configuration from the platform location
    pub fn load() -> SettingsResult<Config> {
        Self::load_or_default(&Self::config_file_path()?)
    }

    /// Save the configuration to the platform location
    pub fn save(config: &Config) -> SettingsResult<PathBuf> {
        Self::ensure_config_dir()?;
        let path = Self::config_file_path()?;
        config.save_to_file(&path)?;
        Ok(path)
    }
}
