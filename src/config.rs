//! Runtime settings read from the environment (and `.env`, if present).

use std::time::Duration;

use crate::data::tables::CARBON_PRICE_DEFAULT;
use crate::error::AppError;

pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_WEATHER_TIMEOUT_SECS: u64 = 3;

const ENV_WEATHER_URL: &str = "ECO_WEATHER_URL";
const ENV_WEATHER_TIMEOUT: &str = "ECO_WEATHER_TIMEOUT_SECS";
const ENV_CARBON_PRICE: &str = "ECO_CARBON_PRICE";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub weather_url: String,
    pub weather_timeout: Duration,
    /// Carbon price per tonne CO2.
    pub carbon_price: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            weather_timeout: Duration::from_secs(DEFAULT_WEATHER_TIMEOUT_SECS),
            carbon_price: CARBON_PRICE_DEFAULT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unset keys keep defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut settings = Self::default();

        if let Some(url) = get(ENV_WEATHER_URL).filter(|v| !v.trim().is_empty()) {
            settings.weather_url = url.trim().to_string();
        }

        if let Some(raw) = get(ENV_WEATHER_TIMEOUT) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                AppError::invalid_input(format!("{ENV_WEATHER_TIMEOUT} must be a whole number of seconds, got '{raw}'."))
            })?;
            settings.weather_timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = get(ENV_CARBON_PRICE) {
            let price = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| {
                    AppError::invalid_input(format!("{ENV_CARBON_PRICE} must be a non-negative number, got '{raw}'."))
                })?;
            settings.carbon_price = price;
        }

        Ok(settings)
    }
}
