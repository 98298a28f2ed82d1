//! Edit entry use case

use crate::application::create_entry::{validate_content, validate_emotion};
use crate::domain::DiaryEntry;
use crate::error::{MoodiaryError, Result};
use crate::infrastructure::{EntryStore, JsonEntryStore};

/// Service for revising an existing diary entry
pub struct EditEntryService {
    store: JsonEntryStore,
}

impl EditEntryService {
    /// Create a new edit-entry service
    pub fn new(store: JsonEntryStore) -> Self {
        EditEntryService { store }
    }

    /// Replace an entry's emotion and content, refreshing `updated_at`.
    ///
    /// The id, date and creation timestamp never change. When no new emotion
    /// is picked the recorded one stays.
    pub fn execute(
        &self,
        id: &str,
        emotion_id: Option<u8>,
        content: &str,
    ) -> Result<DiaryEntry> {
        let mut entry = self
            .store
            .read_by_id(id)?
            .ok_or_else(|| MoodiaryError::EntryNotFound(id.to_string()))?;

        let emotion = match emotion_id {
            Some(_) => validate_emotion(emotion_id)?.clone(),
            None => entry.emotion.clone(),
        };
        let content = validate_content(content)?;

        entry.emotion = emotion;
        entry.content = content;
        entry.touch();

        self.store.update(entry.clone())?;
        Ok(entry)
    }
}
