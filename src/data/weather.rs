//! Open-Meteo integration for current conditions.
//!
//! Weather is decoration: every failure (no coordinates, transport error,
//! timeout, non-success status, malformed body) is logged and turned into
//! `None` so callers never have to handle it.

use chrono::NaiveDateTime;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::data::tables::coordinates;
use crate::domain::{LocationCode, WeatherReport};
use crate::error::{AppError, ErrorKind};

const CURRENT_FIELDS: &str = "temperature_2m,weather_code,relative_humidity_2m";
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(settings.weather_timeout)
            .build()
            .map_err(|e| AppError::new(ErrorKind::Runtime, format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: settings.weather_url.clone(),
        })
    }

    /// Current conditions at the location's reference point, best effort.
    pub fn current(&self, location: LocationCode) -> Option<WeatherReport> {
        let Some((lat, lon)) = coordinates(location) else {
            debug!(%location, "no reference coordinates; skipping weather lookup");
            return None;
        };

        match self.fetch(lat, lon) {
            Ok(report) => Some(report),
            Err(reason) => {
                warn!(%location, %reason, "weather lookup failed");
                None
            }
        }
    }

    fn fetch(&self, lat: f64, lon: f64) -> Result<WeatherReport, String> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", lat.to_string().as_str()),
                ("longitude", lon.to_string().as_str()),
                ("current", CURRENT_FIELDS),
            ])
            .send()
            .map_err(|e| format!("request failed: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("status {}", resp.status()));
        }

        let body: ForecastResponse = resp
            .json()
            .map_err(|e| format!("unreadable response: {e}"))?;

        Ok(to_report(body.current))
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    #[serde(default)]
    time: Option<String>,
    temperature_2m: f64,
    weather_code: u16,
    relative_humidity_2m: f64,
}

fn to_report(current: CurrentConditions) -> WeatherReport {
    let observed_at = current
        .time
        .as_deref()
        .and_then(|t| NaiveDateTime::parse_from_str(t, TIME_FORMAT).ok());

    WeatherReport {
        temperature: current.temperature_2m,
        humidity: current.relative_humidity_2m,
        description: describe_weather_code(current.weather_code).to_string(),
        // The provider call does not request apparent temperature.
        feels_like: current.temperature_2m,
        observed_at,
    }
}

/// WMO weather code to a short description.
pub fn describe_weather_code(code: u16) -> &'static str {
    match code {
        0 => "Clear Sky",
        1 => "Mainly Clear",
        2 => "Partly Cloudy",
        3 => "Overcast",
        45 => "Foggy",
        61 => "Rain",
        80 => "Showers",
        _ => "Variable",
    }
}
