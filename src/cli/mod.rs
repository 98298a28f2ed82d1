//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_emotion_catalog, format_entry, format_entry_list, format_home, format_weather,
};
