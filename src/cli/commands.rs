//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodiary")]
#[command(about = "Command-line mood diary", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Default city for weather lookups
        #[arg(short, long)]
        city: Option<String>,
    },

    /// Write today's diary entry
    New {
        /// Emotion id from the catalog (see 'moodiary emotions')
        #[arg(short, long)]
        emotion: Option<u8>,

        /// Entry text; opens $EDITOR when omitted
        #[arg(short = 'm', long)]
        content: Option<String>,
    },

    /// List diary entries, most recent first
    List {
        /// Show at most N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one diary entry in full
    Show {
        /// Entry id
        id: String,
    },

    /// Edit an existing diary entry
    Edit {
        /// Entry id
        id: String,

        /// New emotion id; keeps the recorded one when omitted
        #[arg(short, long)]
        emotion: Option<u8>,

        /// New entry text; opens $EDITOR with the current text when omitted
        #[arg(short = 'm', long)]
        content: Option<String>,
    },

    /// Delete a diary entry
    Delete {
        /// Entry id
        id: String,
    },

    /// Print the emotion catalog
    Emotions,

    /// Show the home dashboard: greeting, weather and recent entries
    Home {
        /// Fetch fresh weather even if the cached reading is current
        #[arg(long)]
        refresh: bool,

        /// City to fetch weather for (default: configured city)
        #[arg(long)]
        city: Option<String>,
    },

    /// Show the current weather
    Weather {
        /// City to fetch weather for (default: configured city)
        #[arg(long)]
        city: Option<String>,

        /// Fetch fresh weather even if the cached reading is current
        #[arg(long)]
        refresh: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
