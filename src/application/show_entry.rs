//! Show entry use case

use crate::domain::DiaryEntry;
use crate::error::{MoodiaryError, Result};
use crate::infrastructure::{EntryStore, JsonEntryStore};

/// Load one entry by id, or fail with an entry-not-found error the caller
/// can surface.
pub fn show_entry(store: &JsonEntryStore, id: &str) -> Result<DiaryEntry> {
    store
        .read_by_id(id)?
        .ok_or_else(|| MoodiaryError::EntryNotFound(id.to_string()))
}
