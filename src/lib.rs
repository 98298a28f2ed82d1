//! moodiary - Command-line mood diary
//!
//! Records one diary entry per save, tagged with an emotion from a fixed
//! catalog, stored as a single JSON collection in a file-backed key/value
//! slot, with a weather-aware home dashboard.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodiaryError;
