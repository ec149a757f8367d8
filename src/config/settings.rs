//! User settings for the finance tracker
//!
//! Stored as JSON in `config.json`. Every field has a default, so a missing
//! file or a file from an older version still loads.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::ledger::DEFAULT_INITIAL_CAPACITY;
use crate::models::Money;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Balance a new account starts with
    #[serde(default)]
    pub default_starting_balance: Money,

    /// Initial capacity of each transaction store
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_initial_capacity() -> usize {
    DEFAULT_INITIAL_CAPACITY
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_starting_balance: Money::zero(),
            initial_capacity: default_initial_capacity(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if there is no file
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.initial_capacity == 0 {
            return Err(TrackerError::Config(
                "initial_capacity must be at least 1".into(),
            ));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
