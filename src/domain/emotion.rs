//! The fixed emotion catalog

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One mood from the predefined catalog.
///
/// Entries embed the emotion by value, so a catalog edit never rewrites
/// what an old entry recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emotion {
    pub id: u8,
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl Emotion {
    fn new(id: u8, name: &str, color: &str, icon: &str) -> Self {
        Emotion {
            id,
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// The full catalog, in display order.
pub fn emotions() -> &'static [Emotion] {
    static CATALOG: OnceLock<Vec<Emotion>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            Emotion::new(1, "Happy", "#fdce17", "😄"),
            Emotion::new(2, "Good", "#9dd772", "😊"),
            Emotion::new(3, "Neutral", "#74c0fc", "😐"),
            Emotion::new(4, "Bad", "#a5a1a1", "😔"),
            Emotion::new(5, "Sad", "#6741d9", "😢"),
            Emotion::new(6, "Angry", "#fa5252", "😡"),
        ]
    })
}

/// Look up a catalog emotion by id.
pub fn emotion_by_id(id: u8) -> Option<&'static Emotion> {
    emotions().iter().find(|emotion| emotion.id == id)
}
