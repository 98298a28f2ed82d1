//! Diary entry entity

use crate::domain::date;
use crate::domain::Emotion;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One diary record: a date, a mood and free text.
///
/// Serialized field names stay camelCase so a stored collection written by
/// any build of the app reads back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    /// Unique string token; millisecond timestamp at creation.
    pub id: String,
    /// Calendar date in `YYYY-MM-DD`, so string order equals date order.
    pub date: String,
    /// Embedded by value, not by catalog reference.
    pub emotion: Emotion,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl DiaryEntry {
    /// Build a fresh entry for today with `created_at == updated_at == now`.
    pub fn new(emotion: Emotion, content: String) -> Self {
        let now = Utc::now();
        let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        DiaryEntry {
            id: now.timestamp_millis().to_string(),
            date: date::current_date(),
            emotion,
            content,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        }
    }

    /// Stamp the last-modification time.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    }
}
