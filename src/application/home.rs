//! Home dashboard use case
//!
//! Greets by time of day, shows the current weather and the most recent
//! entries. The weather fetch is gated by the persisted refresh interval so
//! repeated activations within the interval reuse the cached reading.

use crate::application::list_entries;
use crate::domain::weather::{placeholder_reading, WeatherReading};
use crate::domain::{date, DiaryEntry};
use crate::error::Result;
use crate::infrastructure::repository::{KeyValueStore, WEATHER_CACHE_SLOT};
use crate::infrastructure::{DiaryRepository, JsonEntryStore, SettingsStore, WeatherClient};
use chrono::{Local, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How many recent entries the dashboard shows.
const RECENT_ENTRIES: usize = 3;

/// Everything the home screen renders.
#[derive(Debug)]
pub struct HomeView {
    pub greeting: &'static str,
    pub message: &'static str,
    pub date_line: String,
    pub weather: WeatherReading,
    /// Set when the live fetch failed and a fallback reading is shown.
    pub weather_notice: Option<String>,
    pub recent: Vec<DiaryEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CachedReading {
    fetched_at_ms: i64,
    reading: WeatherReading,
}

/// Service assembling the home dashboard
pub struct HomeService {
    repository: DiaryRepository,
}

impl HomeService {
    /// Create a new home service
    pub fn new(repository: DiaryRepository) -> Self {
        HomeService { repository }
    }

    /// Build the full dashboard view.
    pub fn execute(&self, city_override: Option<&str>, force_refresh: bool) -> Result<HomeView> {
        let store = JsonEntryStore::new(self.repository.clone());
        let recent = list_entries(&store, Some(RECENT_ENTRIES))?;

        let (greeting, message) = greeting_for_hour(Local::now().hour());
        let date_line = date::format_date_long(&date::current_date());

        let (weather, weather_notice) = self.weather(city_override, force_refresh);

        Ok(HomeView {
            greeting,
            message,
            date_line,
            weather,
            weather_notice,
            recent,
        })
    }

    /// Resolve the current weather, honoring the refresh interval.
    ///
    /// Fetches when there is no cached reading, when forced, or when a
    /// non-zero interval has elapsed since the cached fetch. An interval of
    /// zero means manual refresh only. A failed fetch falls back to the
    /// cached reading, or to the canned placeholder, with a notice.
    pub fn weather(
        &self,
        city_override: Option<&str>,
        force_refresh: bool,
    ) -> (WeatherReading, Option<String>) {
        let cached = self.load_cache();
        let interval = SettingsStore::new(self.repository.clone()).get();
        let now_ms = Utc::now().timestamp_millis();

        if let Some(cached) = &cached {
            let elapsed = now_ms.saturating_sub(cached.fetched_at_ms);
            let due = force_refresh || (interval > 0 && elapsed > interval as i64);
            if !due {
                return (cached.reading.clone(), None);
            }
        }

        match self.fetch(city_override) {
            Ok(reading) => {
                self.store_cache(&CachedReading {
                    fetched_at_ms: now_ms,
                    reading: reading.clone(),
                });
                (reading, None)
            }
            Err(err) => {
                warn!("weather fetch failed: {err}");
                let notice = Some(format!("{}. Showing fallback weather data.", err));
                match cached {
                    Some(cached) => (cached.reading, notice),
                    None => (placeholder_reading(), notice),
                }
            }
        }
    }

    fn fetch(&self, city_override: Option<&str>) -> Result<WeatherReading> {
        let client = WeatherClient::from_env()?;
        let city = match city_override {
            Some(city) => city.to_string(),
            None => self.repository.load_config()?.city,
        };
        client.fetch_by_city(&city)
    }

    fn load_cache(&self) -> Option<CachedReading> {
        let raw = self.repository.read_slot(WEATHER_CACHE_SLOT).ok()??;
        serde_json::from_str(&raw).ok()
    }

    fn store_cache(&self, cache: &CachedReading) {
        // Best effort: a failed cache write only costs the next run a fetch.
        let Ok(raw) = serde_json::to_string(cache) else {
            return;
        };
        if let Err(err) = self.repository.write_slot(WEATHER_CACHE_SLOT, &raw) {
            warn!("could not cache weather reading: {err}");
        }
    }
}

/// Time-of-day greeting with its message, in the home screen's four buckets.
pub fn greeting_for_hour(hour: u32) -> (&'static str, &'static str) {
    if (5..12).contains(&hour) {
        ("Good morning", "Shall we start the day full of energy?")
    } else if (12..17).contains(&hour) {
        ("Good afternoon", "How is your day going so far?")
    } else if (17..22).contains(&hour) {
        ("Good evening", "How was your day?")
    } else {
        ("Good night", "Shall we wrap up the day?")
    }
}
