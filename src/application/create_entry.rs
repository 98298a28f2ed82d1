//! Create entry use case

use crate::domain::{emotion_by_id, DiaryEntry, Emotion};
use crate::error::{MoodiaryError, Result};
use crate::infrastructure::{EntryStore, JsonEntryStore};

/// Minimum entry length after trimming surrounding whitespace.
pub const MIN_CONTENT_CHARS: usize = 5;

/// Service for writing a new diary entry
pub struct CreateEntryService {
    store: JsonEntryStore,
}

impl CreateEntryService {
    /// Create a new create-entry service
    pub fn new(store: JsonEntryStore) -> Self {
        CreateEntryService { store }
    }

    /// Validate the selection and content, then persist a fresh entry.
    ///
    /// Nothing is written when validation fails.
    pub fn execute(&self, emotion_id: Option<u8>, content: &str) -> Result<DiaryEntry> {
        let emotion = validate_emotion(emotion_id)?;
        let content = validate_content(content)?;

        let entry = DiaryEntry::new(emotion.clone(), content);
        self.store.create(entry.clone())?;
        Ok(entry)
    }
}

/// Resolve the selected emotion, rejecting a missing or unknown selection.
pub fn validate_emotion(emotion_id: Option<u8>) -> Result<&'static Emotion> {
    let id = emotion_id.ok_or_else(|| {
        MoodiaryError::Validation("Select an emotion for today's entry".to_string())
    })?;

    emotion_by_id(id).ok_or_else(|| {
        MoodiaryError::Validation(format!("No emotion with id {} in the catalog", id))
    })
}

/// Trim the content and reject it when too short.
pub fn validate_content(content: &str) -> Result<String> {
    let trimmed = content.trim();

    if trimmed.chars().count() < MIN_CONTENT_CHARS {
        return Err(MoodiaryError::Validation(format!(
            "Diary content must be at least {} characters",
            MIN_CONTENT_CHARS
        )));
    }

    Ok(trimmed.to_string())
}
