//! Error types for moodiary

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodiary application
#[derive(Debug, Error)]
pub enum MoodiaryError {
    #[error("Not a moodiary directory: {0}")]
    NotInitialized(PathBuf),

    #[error("{0}")]
    Validation(String),

    #[error("No diary entry found with id: {0}")]
    EntryNotFound(String),

    #[error("Failed to write diary storage: {0}")]
    StorageWrite(String),

    #[error("Weather error: {0}")]
    Weather(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodiaryError::NotInitialized(_) => 2,
            MoodiaryError::Validation(_) => 3,
            MoodiaryError::EntryNotFound(_) => 4,
            MoodiaryError::StorageWrite(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodiaryError::NotInitialized(path) => {
                format!(
                    "Not a moodiary directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodiary init' in this directory to create a new diary\n\
                    • Navigate to an existing moodiary directory\n\
                    • Set MOODIARY_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            MoodiaryError::Validation(msg) => {
                format!(
                    "{}\n\n\
                    A diary entry needs:\n\
                    • An emotion from the catalog (run 'moodiary emotions' to see ids)\n\
                    • At least 5 characters of content after trimming whitespace",
                    msg
                )
            }
            MoodiaryError::EntryNotFound(id) => {
                format!(
                    "No diary entry found with id: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'moodiary list' to see entry ids\n\
                    • The entry may have been deleted",
                    id
                )
            }
            MoodiaryError::Weather(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Set the WEATHER_API_KEY environment variable to an OpenWeatherMap key\n\
                    • Check the city name: moodiary config city Seoul\n\
                    • Pass a city explicitly: moodiary weather --city London",
                    msg
                )
            }
            MoodiaryError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Pass the text directly: moodiary new --emotion 1 --content '...'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodiaryError
pub type Result<T> = std::result::Result<T, MoodiaryError>;
