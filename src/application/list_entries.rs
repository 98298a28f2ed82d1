//! List entries use case
//!
//! The presenter contract: every call loads a fresh snapshot from the store,
//! never patches a previous one in place.

use crate::domain::DiaryEntry;
use crate::error::Result;
use crate::infrastructure::{EntryStore, JsonEntryStore};

/// Load all entries sorted by date descending (most recent first).
///
/// Entries sharing a date keep their stored order (stable sort). `limit` is
/// a display-only truncation of the sorted snapshot.
pub fn list_entries(store: &JsonEntryStore, limit: Option<usize>) -> Result<Vec<DiaryEntry>> {
    let mut entries = store.read_all()?;

    entries.sort_by(|a, b| b.date.cmp(&a.date));

    if let Some(n) = limit {
        entries.truncate(n);
    }

    Ok(entries)
}
