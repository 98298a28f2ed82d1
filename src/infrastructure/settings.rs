//! Persisted settings scalar
//!
//! One durable value: how often the weather should be refreshed, in
//! milliseconds. `0` means manual refresh only.

use crate::error::Result;
use crate::infrastructure::repository::{DiaryRepository, KeyValueStore, REFRESH_INTERVAL_SLOT};

/// Default refresh interval: 30 minutes.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 30 * 60 * 1000;

/// Store for the weather refresh-interval preference
#[derive(Debug, Clone)]
pub struct SettingsStore {
    repository: DiaryRepository,
}

impl SettingsStore {
    /// Create a settings store over the given repository
    pub fn new(repository: DiaryRepository) -> Self {
        SettingsStore { repository }
    }

    /// The stored interval, or the default when the slot is missing or does
    /// not parse. Never fails outward.
    pub fn get(&self) -> u64 {
        match self.repository.read_slot(REFRESH_INTERVAL_SLOT) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or(DEFAULT_REFRESH_INTERVAL_MS),
            _ => DEFAULT_REFRESH_INTERVAL_MS,
        }
    }

    /// Persist a new interval. Callers are trusted on range.
    pub fn set(&self, value: u64) -> Result<()> {
        self.repository
            .write_slot(REFRESH_INTERVAL_SLOT, &value.to_string())
    }
}
