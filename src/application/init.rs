//! Initialize diary use case

use crate::error::Result;
use crate::infrastructure::{Config, DiaryRepository};
use std::fs;
use std::path::Path;

/// Initialize a new mood diary at the specified path.
pub fn init(path: &Path, city: Option<String>) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = DiaryRepository::new(path.to_path_buf());

    // Initialize .moodiary directory
    repo.initialize()?;

    let mut config = Config::new();
    if let Some(city) = city {
        config.city = city;
    }

    repo.save_config(&config)?;

    println!("Initialized mood diary at {}", path.display());
    println!("Weather city: {}", config.city);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_structure_and_config() {
        let temp = TempDir::new().unwrap();

        init(temp.path(), None).unwrap();

        assert!(temp.path().join(".moodiary").is_dir());
        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.city, "Seoul");
    }

    #[test]
    fn test_init_with_city() {
        let temp = TempDir::new().unwrap();

        init(temp.path(), Some("London".to_string())).unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.city, "London");
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path(), None).unwrap();
        assert!(init(temp.path(), None).is_err());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("diary");

        init(&target, None).unwrap();

        assert!(target.join(".moodiary").is_dir());
    }
}
