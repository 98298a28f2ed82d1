//! Settings management use case

use crate::error::{MoodiaryError, Result};
use crate::infrastructure::{Config, DiaryRepository, SettingsStore};

/// Service for viewing and changing diary settings
pub struct SettingsService {
    repository: DiaryRepository,
}

impl SettingsService {
    /// Create a new settings service
    pub fn new(repository: DiaryRepository) -> Self {
        SettingsService { repository }
    }

    /// Get a single settings value
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "refresh-interval" => {
                let settings = SettingsStore::new(self.repository.clone());
                Ok(settings.get().to_string())
            }
            "city" => {
                let config = self.repository.load_config()?;
                Ok(config.city)
            }
            "created" => {
                let config = self.repository.load_config()?;
                Ok(config.created.to_rfc3339())
            }
            _ => Err(MoodiaryError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: refresh-interval, city, created",
                key
            ))),
        }
    }

    /// Set a settings value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        match key {
            "refresh-interval" => {
                let millis: u64 = value.parse().map_err(|_| {
                    MoodiaryError::Config(format!(
                        "refresh-interval must be a non-negative number of milliseconds, got '{}'",
                        value
                    ))
                })?;
                let settings = SettingsStore::new(self.repository.clone());
                settings.set(millis)
            }
            "city" => {
                let mut config = self.repository.load_config()?;
                config.city = value.to_string();
                self.repository.save_config(&config)
            }
            "created" => Err(MoodiaryError::Config(
                "Cannot modify 'created' field (read-only)".to_string(),
            )),
            _ => Err(MoodiaryError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: refresh-interval, city",
                key
            ))),
        }
    }

    /// All settings for display: the config file plus the refresh interval
    pub fn list(&self) -> Result<(Config, u64)> {
        let config = self.repository.load_config()?;
        let interval = SettingsStore::new(self.repository.clone()).get();
        Ok((config, interval))
    }
}
