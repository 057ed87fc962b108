//! User settings for apportion-cli
//!
//! Ambient preferences used to seed a new session: the default currency and
//! the default budget. Edits made during a session are never written back;
//! the settings file only changes through explicit saves.

use serde::{Deserialize, Serialize};

use super::paths::ApportionPaths;
use crate::error::ApportionError;
use crate::models::{Currency, DEFAULT_BUDGET};

/// User settings for apportion-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency a new session starts with
    #[serde(default)]
    pub currency: Currency,

    /// Budget a new session starts with
    #[serde(default = "default_budget")]
    pub default_budget: f64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_budget() -> f64 {
    DEFAULT_BUDGET
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: Currency::default(),
            default_budget: default_budget(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ApportionPaths) -> Result<Self, ApportionError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ApportionError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ApportionError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ApportionPaths) -> Result<(), ApportionError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ApportionError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| ApportionError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
