//! Durable diary entry storage
//!
//! The whole collection lives as one JSON array in a single slot. Every
//! mutation is a read-modify-write of the full collection with last write
//! winning; there is no per-entry locking. That is deliberate: the app has a
//! single writer, and the trait boundary below is the seam where a finer
//! strategy could be swapped in later without touching callers.

use crate::domain::DiaryEntry;
use crate::error::{MoodiaryError, Result};
use crate::infrastructure::repository::{DiaryRepository, KeyValueStore, ENTRIES_SLOT};
use tracing::warn;

/// Sole reader/writer of the durable diary entry collection
pub trait EntryStore {
    /// Append an entry to the stored collection.
    fn create(&self, entry: DiaryEntry) -> Result<()>;

    /// The full collection in storage (insertion) order; empty on first run.
    fn read_all(&self) -> Result<Vec<DiaryEntry>>;

    /// First entry with a matching id, if any.
    fn read_by_id(&self, id: &str) -> Result<Option<DiaryEntry>>;

    /// Replace the entry whose id matches, whole-record. Writing an id that
    /// is not stored succeeds without changing the collection.
    fn update(&self, entry: DiaryEntry) -> Result<()>;

    /// Remove all entries with a matching id. Unknown ids are a no-op.
    fn delete(&self, id: &str) -> Result<()>;
}

/// File-backed [`EntryStore`] serializing the collection as one JSON array
#[derive(Debug, Clone)]
pub struct JsonEntryStore {
    repository: DiaryRepository,
}

impl JsonEntryStore {
    /// Create a store over the given repository
    pub fn new(repository: DiaryRepository) -> Self {
        JsonEntryStore { repository }
    }

    /// Load the stored collection, degrading to empty rather than failing.
    ///
    /// A missing slot is the first-run case; an unreadable or corrupt slot is
    /// logged and treated the same so the diary stays usable.
    fn load_collection(&self) -> Vec<DiaryEntry> {
        let raw = match self.repository.read_slot(ENTRIES_SLOT) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("could not read stored diary collection, starting empty: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("stored diary collection is corrupt, starting empty: {err}");
                Vec::new()
            }
        }
    }

    fn store_collection(&self, entries: &[DiaryEntry]) -> Result<()> {
        let raw = serde_json::to_string(entries)
            .map_err(|e| MoodiaryError::StorageWrite(e.to_string()))?;
        self.repository.write_slot(ENTRIES_SLOT, &raw)
    }
}

impl EntryStore for JsonEntryStore {
    fn create(&self, entry: DiaryEntry) -> Result<()> {
        let mut entries = self.load_collection();
        entries.push(entry);
        self.store_collection(&entries)
    }

    fn read_all(&self) -> Result<Vec<DiaryEntry>> {
        Ok(self.load_collection())
    }

    fn read_by_id(&self, id: &str) -> Result<Option<DiaryEntry>> {
        Ok(self
            .load_collection()
            .into_iter()
            .find(|entry| entry.id == id))
    }

    fn update(&self, entry: DiaryEntry) -> Result<()> {
        let mut entries = self.load_collection();
        if let Some(stored) = entries.iter_mut().find(|e| e.id == entry.id) {
            *stored = entry;
        }
        // An unmatched id still writes the (unchanged) collection back.
        self.store_collection(&entries)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut entries = self.load_collection();
        entries.retain(|entry| entry.id != id);
        self.store_collection(&entries)
    }
}
