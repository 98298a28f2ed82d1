//! Configuration management

use crate::error::{MoodiaryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fallback city when weather is looked up without an explicit location.
const DEFAULT_CITY: &str = "Seoul";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub city: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            city: DEFAULT_CITY.to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .moodiary/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodiary").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodiaryError::NotInitialized(path.to_path_buf())
            } else {
                MoodiaryError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodiaryError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodiary/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let moodiary_dir = path.join(".moodiary");
        let config_path = moodiary_dir.join("config.toml");

        if !moodiary_dir.exists() {
            fs::create_dir(&moodiary_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodiaryError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
