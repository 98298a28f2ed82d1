//! Weather value types
//!
//! The shape the external weather collaborator returns. The diary core only
//! depends on this shape, never on the provider's internals.

use serde::{Deserialize, Serialize};

/// Coarse sky condition, mapped from the provider's condition codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherKind {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
}

impl WeatherKind {
    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherKind::Sunny => "Sunny",
            WeatherKind::PartlyCloudy => "Partly cloudy",
            WeatherKind::Cloudy => "Cloudy",
            WeatherKind::Rainy => "Rainy",
            WeatherKind::Snowy => "Snowy",
            WeatherKind::Stormy => "Stormy",
        }
    }
}

/// One typed weather reading for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub location: String,
    /// Degrees Celsius, rounded to the nearest integer.
    pub temperature: i32,
    pub description: String,
    pub weather_type: WeatherKind,
    pub icon: String,
    /// Relative humidity percentage.
    pub humidity: u8,
    pub wind_speed: f64,
}

/// Map an OpenWeatherMap condition code to a [`WeatherKind`].
///
/// Code groups: 2xx thunderstorm, 3xx drizzle, 5xx rain, 6xx snow,
/// 7xx atmosphere, 800 clear, 80x clouds.
pub fn kind_from_condition_code(code: u16) -> WeatherKind {
    match code {
        200..=299 => WeatherKind::Stormy,
        300..=399 | 500..=599 => WeatherKind::Rainy,
        600..=699 => WeatherKind::Snowy,
        801 | 802 => WeatherKind::PartlyCloudy,
        700..=799 | 803..=899 => WeatherKind::Cloudy,
        _ => WeatherKind::Sunny,
    }
}

/// Canned reading shown when the weather provider cannot be reached.
pub fn placeholder_reading() -> WeatherReading {
    WeatherReading {
        location: "Seoul".to_string(),
        temperature: 22,
        description: "clear sky".to_string(),
        weather_type: WeatherKind::Sunny,
        icon: "01d".to_string(),
        humidity: 60,
        wind_speed: 5.1,
    }
}
