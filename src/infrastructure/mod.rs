//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod entry_store;
pub mod repository;
pub mod settings;
pub mod weather_api;

pub use config::Config;
pub use editor::EditorSession;
pub use entry_store::{EntryStore, JsonEntryStore};
pub use repository::{DiaryRepository, KeyValueStore};
pub use settings::{SettingsStore, DEFAULT_REFRESH_INTERVAL_MS};
pub use weather_api::WeatherClient;
