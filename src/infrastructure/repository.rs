//! File system repository
//!
//! The diary's durable state lives in a `.moodiary/` directory as a handful
//! of key/value slots, one file per key. Slot writes go through a temp file
//! and a rename so a reader never sees a half-written value.

use crate::error::{MoodiaryError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Key A: the JSON-serialized diary entry collection.
pub const ENTRIES_SLOT: &str = "entries.json";
/// Key B: the weather refresh interval in milliseconds, as a decimal string.
pub const REFRESH_INTERVAL_SLOT: &str = "refresh-interval";
/// Cached last weather reading plus its fetch timestamp.
pub const WEATHER_CACHE_SLOT: &str = "weather.json";

/// Abstract key/value slot storage
pub trait KeyValueStore {
    /// Read a slot; `None` when the slot has never been written.
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replace a slot's value whole, atomically from the reader's point of view.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;
}

/// File system diary repository rooted at a `.moodiary` directory
#[derive(Debug, Clone)]
pub struct DiaryRepository {
    pub root: PathBuf,
}

impl DiaryRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        DiaryRepository { root }
    }

    /// Discover diary root by walking up from current directory.
    /// First checks MOODIARY_ROOT environment variable, then falls back to discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODIARY_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodiary_dir(&path) {
                return Ok(DiaryRepository::new(path));
            } else {
                return Err(MoodiaryError::Config(format!(
                    "MOODIARY_ROOT is set to '{}' but no .moodiary directory found. \
                    Run 'moodiary init' in that directory or unset MOODIARY_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover diary root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodiary_dir(&current) {
                return Ok(DiaryRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MoodiaryError::NotInitialized(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .moodiary directory
    fn has_moodiary_dir(path: &Path) -> bool {
        path.join(".moodiary").is_dir()
    }

    /// Check if .moodiary directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_moodiary_dir(&self.root)
    }

    /// Create the .moodiary directory structure
    pub fn initialize(&self) -> Result<()> {
        let moodiary_dir = self.root.join(".moodiary");

        if moodiary_dir.exists() {
            return Err(MoodiaryError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodiary_dir)?;
        Ok(())
    }

    /// Load configuration from .moodiary/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .moodiary/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(".moodiary").join(key)
    }
}

impl KeyValueStore for DiaryRepository {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(MoodiaryError::Io)
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);

        if !self.is_initialized() {
            return Err(MoodiaryError::NotInitialized(self.root.clone()));
        }

        let tmp_name = format!(".{}.tmp-{}", key, std::process::id());
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, value)
            .map_err(|e| MoodiaryError::StorageWrite(format!("{}: {}", path.display(), e)))?;

        // On Windows, `rename` does not overwrite existing files, so the
        // destination is removed first.
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| MoodiaryError::StorageWrite(format!("{}: {}", path.display(), e)))?;
        }

        fs::rename(&tmp_path, &path)
            .map_err(|e| MoodiaryError::StorageWrite(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_new_repository() {
        let path = PathBuf::from("/tmp/test");
        let repo = DiaryRepository::new(path.clone());
        assert_eq!(repo.root, path);
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = DiaryRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());

        repo.initialize().unwrap();

        assert!(repo.is_initialized());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = DiaryRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let result = repo.initialize();
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();

        fs::create_dir(temp.path().join(".moodiary")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = DiaryRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_moodiary() {
        let temp = TempDir::new().unwrap();

        let result = DiaryRepository::discover_from(temp.path());
        assert!(result.is_err());

        match result.unwrap_err() {
            MoodiaryError::NotInitialized(_) => {}
            _ => panic!("Expected NotInitialized error"),
        }
    }

    #[test]
    fn test_read_missing_slot_is_none() {
        let temp = TempDir::new().unwrap();
        let repo = DiaryRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        assert_eq!(repo.read_slot(ENTRIES_SLOT).unwrap(), None);
    }

    #[test]
    fn test_write_then_read_slot() {
        let temp = TempDir::new().unwrap();
        let repo = DiaryRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        repo.write_slot(REFRESH_INTERVAL_SLOT, "1800000").unwrap();

        assert_eq!(
            repo.read_slot(REFRESH_INTERVAL_SLOT).unwrap().as_deref(),
            Some("1800000")
        );
    }

    #[test]
    fn test_write_slot_overwrites_whole_value() {
        let temp = TempDir::new().unwrap();
        let repo = DiaryRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        repo.write_slot(ENTRIES_SLOT, "[1]").unwrap();
        repo.write_slot(ENTRIES_SLOT, "[2]").unwrap();

        assert_eq!(repo.read_slot(ENTRIES_SLOT).unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_write_slot_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let repo = DiaryRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        repo.write_slot(ENTRIES_SLOT, "[]").unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp.path().join(".moodiary"))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_write_slot_without_init_fails() {
        let temp = TempDir::new().unwrap();
        let repo = DiaryRepository::new(temp.path().to_path_buf());

        let result = repo.write_slot(ENTRIES_SLOT, "[]");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = DiaryRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let config = Config::new();
        repo.save_config(&config).unwrap();

        let loaded = repo.load_config().unwrap();
        assert_eq!(loaded.city, config.city);
    }

    #[test]
    fn test_discover_with_moodiary_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("MOODIARY_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".moodiary")).unwrap();

        std::env::set_var("MOODIARY_ROOT", temp.path());

        let repo = DiaryRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_moodiary_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("MOODIARY_ROOT");

        let temp = TempDir::new().unwrap();

        std::env::set_var("MOODIARY_ROOT", temp.path());

        let result = DiaryRepository::discover();
        assert!(result.is_err());

        match result.unwrap_err() {
            MoodiaryError::Config(msg) => {
                assert!(msg.contains("no .moodiary directory"));
            }
            _ => panic!("Expected Config error"),
        }
    }
}
