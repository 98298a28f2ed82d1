//! Output formatting utilities

use crate::application::HomeView;
use crate::domain::{date, DiaryEntry, Emotion, WeatherReading};

/// Format a list of diary entries for display
pub fn format_entry_list(entries: &[DiaryEntry]) -> String {
    if entries.is_empty() {
        return "No diary entries yet. Write one with 'moodiary new'.".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {} {:<7}  [{}]  {}\n",
            entry.date,
            entry.emotion.icon,
            entry.emotion.name,
            entry.id,
            first_line(&entry.content)
        ));
    }
    output
}

/// Format one entry in full
pub fn format_entry(entry: &DiaryEntry) -> String {
    format!(
        "{}\n{} {}\n\n{}\n\nid: {}\ncreated: {}\nupdated: {}\n",
        date::format_date_long(&entry.date),
        entry.emotion.icon,
        entry.emotion.name,
        entry.content,
        entry.id,
        entry.created_at,
        entry.updated_at
    )
}

/// Format the emotion catalog for display
pub fn format_emotion_catalog(emotions: &[Emotion]) -> String {
    let mut output = String::new();
    for emotion in emotions {
        output.push_str(&format!(
            "{}  {} {:<7}  {}\n",
            emotion.id, emotion.icon, emotion.name, emotion.color
        ));
    }
    output
}

/// Format a weather reading for display
pub fn format_weather(reading: &WeatherReading) -> String {
    format!(
        "{}: {}°C, {} ({})\nHumidity {}%, wind {} m/s\n",
        reading.location,
        reading.temperature,
        reading.description,
        reading.weather_type.label(),
        reading.humidity,
        reading.wind_speed
    )
}

/// Format the full home dashboard
pub fn format_home(view: &HomeView) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}. {}\n", view.greeting, view.message));
    output.push_str(&format!("{}\n\n", view.date_line));

    output.push_str(&format_weather(&view.weather));
    if let Some(notice) = &view.weather_notice {
        output.push_str(&format!("Note: {}\n", notice));
    }

    output.push_str("\nRecent entries\n");
    output.push_str(&format_entry_list(&view.recent));
    output
}

fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emotion_by_id;
    use crate::domain::weather::placeholder_reading;

    fn entry(id: &str, date: &str, content: &str) -> DiaryEntry {
        DiaryEntry {
            id: id.to_string(),
            date: date.to_string(),
            emotion: emotion_by_id(1).unwrap().clone(),
            content: content.to_string(),
            created_at: "2024-01-01T09:00:00.000Z".to_string(),
            updated_at: "2024-01-01T09:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_entry_list(&[]);
        assert!(output.contains("No diary entries yet"));
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![
            entry("100", "2024-03-05", "a good day"),
            entry("101", "2024-02-10", "an ordinary day"),
        ];

        let output = format_entry_list(&entries);
        assert!(output.contains("2024-03-05"));
        assert!(output.contains("[100]"));
        assert!(output.contains("a good day"));
        assert!(output.contains("[101]"));
    }

    #[test]
    fn test_format_entry_list_shows_first_line_only() {
        let entries = vec![entry("100", "2024-03-05", "first line\nsecond line")];

        let output = format_entry_list(&entries);
        assert!(output.contains("first line"));
        assert!(!output.contains("second line"));
    }

    #[test]
    fn test_format_entry_full() {
        let output = format_entry(&entry("100", "2024-01-01", "what a day"));
        assert!(output.contains("Monday, January 1, 2024"));
        assert!(output.contains("Happy"));
        assert!(output.contains("what a day"));
        assert!(output.contains("id: 100"));
    }

    #[test]
    fn test_format_emotion_catalog() {
        let catalog = crate::domain::emotions();
        let output = format_emotion_catalog(catalog);
        assert!(output.contains("1  😄 Happy"));
        assert!(output.contains("6  😡 Angry"));
        assert!(output.contains("#fdce17"));
    }

    #[test]
    fn test_format_weather() {
        let output = format_weather(&placeholder_reading());
        assert!(output.contains("Seoul: 22°C"));
        assert!(output.contains("clear sky"));
        assert!(output.contains("Humidity 60%"));
    }
}
