//! OpenWeatherMap client
//!
//! The one external collaborator. The rest of the app only sees the typed
//! [`WeatherReading`] shape, never the provider's wire format.

use crate::domain::weather::{kind_from_condition_code, WeatherReading};
use crate::error::{MoodiaryError, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ApiResponse {
    name: String,
    weather: Vec<ApiCondition>,
    main: ApiMain,
    wind: ApiWind,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    id: u16,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ApiWind {
    speed: f64,
}

/// Blocking weather API client
pub struct WeatherClient {
    api_key: String,
    http: reqwest::blocking::Client,
}

impl WeatherClient {
    /// Create a client with the given API key
    pub fn new(api_key: String) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MoodiaryError::Weather(format!("Could not build HTTP client: {}", e)))?;

        Ok(WeatherClient { api_key, http })
    }

    /// Create a client from the WEATHER_API_KEY environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("WEATHER_API_KEY").map_err(|_| {
            MoodiaryError::Weather("WEATHER_API_KEY environment variable is not set".to_string())
        })?;
        Self::new(api_key)
    }

    /// Fetch current weather for a city by name
    pub fn fetch_by_city(&self, city: &str) -> Result<WeatherReading> {
        debug!("fetching weather for city {city}");
        let response = self
            .http
            .get(format!("{}/weather", BASE_URL))
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .map_err(|e| {
                MoodiaryError::Weather(format!("Could not reach the weather service: {}", e))
            })?;

        Self::reading_from_response(response)
    }

    /// Fetch current weather for a coordinate pair
    pub fn fetch_by_coords(&self, lat: f64, lon: f64) -> Result<WeatherReading> {
        debug!("fetching weather for coordinates {lat},{lon}");
        let response = self
            .http
            .get(format!("{}/weather", BASE_URL))
            .query(&[
                ("lat", lat.to_string().as_str()),
                ("lon", lon.to_string().as_str()),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .map_err(|e| {
                MoodiaryError::Weather(format!("Could not reach the weather service: {}", e))
            })?;

        Self::reading_from_response(response)
    }

    fn reading_from_response(response: reqwest::blocking::Response) -> Result<WeatherReading> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(MoodiaryError::Weather(
                "Weather API key is not valid".to_string(),
            ));
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MoodiaryError::Weather(
                "No weather found for that location".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(MoodiaryError::Weather(format!(
                "Weather service returned status {}",
                status
            )));
        }

        let payload: ApiResponse = response.json().map_err(|e| {
            MoodiaryError::Weather(format!("Could not parse weather response: {}", e))
        })?;

        Self::parse_reading(payload)
    }

    fn parse_reading(payload: ApiResponse) -> Result<WeatherReading> {
        let condition = payload.weather.first().ok_or_else(|| {
            MoodiaryError::Weather("Weather service returned no condition data".to_string())
        })?;

        Ok(WeatherReading {
            location: payload.name.clone(),
            temperature: payload.main.temp.round() as i32,
            description: condition.description.clone(),
            weather_type: kind_from_condition_code(condition.id),
            icon: condition.icon.clone(),
            humidity: payload.main.humidity,
            wind_speed: payload.wind.speed,
        })
    }
}
