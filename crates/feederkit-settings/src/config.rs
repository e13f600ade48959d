//! Configuration for FeederKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Notification display durations
//! - Numeric input policy for dimensions and number fields
//! - Asset and output paths (3D models, reports, custom catalogs)
//! - Wizard start-up behaviour

use crate::error::{ConfigError, SettingsResult};
use feederkit_core::{InputPolicy, NoticeDelays};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Asset and output locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Directory holding `<feeder-type>.glb` reference models
    pub model_dir: PathBuf,
    /// Directory receiving exported reports
    pub report_dir: PathBuf,
    /// Additional catalog file merged over the built-in catalogs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            report_dir: dirs::document_dir().unwrap_or_else(|| PathBuf::from(".")),
            catalog_file: None,
        }
    }
}

/// Wizard start-up behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardSettings {
    /// Feeder type opened when no set is chosen
    pub start_feeder_type: String,
    /// Pre-seed the store with blank bowl and linear feeder records
    pub seed_store: bool,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            start_feeder_type: "bowl-feeder".to_string(),
            seed_store: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub notifications: NoticeDelays,
    pub input: InputPolicy,
    pub paths: PathSettings,
    pub wizard: WizardSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            "json" => serde_json::from_str(&content)?,
            "toml" => toml::from_str(&content)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string()).into()),
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            "json" => serde_json::to_string_pretty(self)?,
            "toml" => toml::to_string_pretty(self)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string()).into()),
        };

        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let delays = [
            ("notifications.success_ms", self.notifications.success_ms),
            ("notifications.failure_ms", self.notifications.failure_ms),
            ("notifications.info_ms", self.notifications.info_ms),
        ];
        for (key, value) in delays {
            if value == 0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }

        if let Some(max) = self.input.max_value {
            let lowest = if self.input.allow_negative { f64::MIN } else { 0.0 };
            if !max.is_finite() || max < lowest {
                return Err(ConfigError::ValueOutOfRange {
                    key: "input.max_value".to_string(),
                    value: max.to_string(),
                });
            }
        }

        if self.wizard.start_feeder_type.trim().is_empty() {
            return Err(ConfigError::MissingKey(
                "wizard.start_feeder_type".to_string(),
            ));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> &str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
}
