//! Standalone HTTP client for current weather (Open-Meteo, no API key).
//!
//! - Blocking client using `ureq` (no async).
//! - Produces the `WeatherData` shape the scheduler consumes.
//! - Failure here is never fatal to scheduling: callers fall back to
//!   "no weather adjustment".

use crate::models::garden::WeatherData;
use serde::Deserialize;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug)]
pub enum WeatherClientError {
    Transport(String),
    Http { status: u16, message: String },
    Json(serde_json::Error),
}

impl core::fmt::Display for WeatherClientError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WeatherClientError::Transport(s) => write!(f, "transport error: {}", s),
            WeatherClientError::Http { status, message } => write!(f, "http {}: {}", status, message),
            WeatherClientError::Json(e) => write!(f, "json error: {}", e),
        }
    }
}

impl std::error::Error for WeatherClientError {}

impl From<serde_json::Error> for WeatherClientError {
    fn from(value: serde_json::Error) -> Self {
        WeatherClientError::Json(value)
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: i32,
}

pub struct WeatherClient {
    agent: ureq::Agent,
}

impl WeatherClient {
    pub fn new() -> Self {
        WeatherClient {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    /// Fetch current conditions for a coordinate pair.
    pub fn current(&self, latitude: f64, longitude: f64) -> Result<WeatherData, WeatherClientError> {
        let resp = self
            .agent
            .get(FORECAST_URL)
            .set("Accept", "application/json")
            .query("latitude", &latitude.to_string())
            .query("longitude", &longitude.to_string())
            .query("current", "temperature_2m,relative_humidity_2m,weather_code")
            .call();

        let forecast: ForecastResponse = match resp {
            Ok(res) => serde_json::from_reader(res.into_reader()).map_err(WeatherClientError::Json)?,
            Err(ureq::Error::Transport(t)) => return Err(WeatherClientError::Transport(t.to_string())),
            Err(ureq::Error::Status(status, res)) => {
                let body = res.into_string().unwrap_or_else(|_| String::from("<no body>"));
                return Err(WeatherClientError::Http { status, message: body });
            }
        };

        let c = forecast.current;
        let (condition, icon) = describe_weather_code(c.weather_code);
        let advice = garden_advice(c.temperature_2m, c.relative_humidity_2m, c.weather_code);
        Ok(WeatherData {
            temp: c.temperature_2m,
            humidity: c.relative_humidity_2m,
            condition: condition.to_string(),
            icon: icon.to_string(),
            advice,
        })
    }
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a WMO weather code to a display condition and icon name.
/// https://open-meteo.com/en/docs#weather_variable_documentation
pub fn describe_weather_code(code: i32) -> (&'static str, &'static str) {
    match code {
        0 => ("Clear", "sun"),
        1 | 2 => ("Partly Cloudy", "sun-cloud"),
        3 => ("Overcast", "cloud"),
        45 | 48 => ("Fog", "fog"),
        51..=57 => ("Drizzle", "rain"),
        61..=67 | 80..=82 => ("Rain", "rain"),
        71..=77 | 85 | 86 => ("Snow", "snow"),
        95..=99 => ("Thunderstorm", "storm"),
        _ => ("Unknown", "cloud"),
    }
}

/// One-line gardening hint derived from current conditions.
fn garden_advice(temp: f64, humidity: f64, code: i32) -> String {
    if (95..=99).contains(&code) {
        "Storms expected; move delicate pots under cover.".to_string()
    } else if matches!(code, 61..=67 | 80..=82) {
        "Rain is doing the watering for outdoor plants today.".to_string()
    } else if temp > 28.0 {
        "Hot today; check outdoor pots for wilting and water early.".to_string()
    } else if temp < 5.0 {
        "Near-freezing; bring tender plants inside overnight.".to_string()
    } else if humidity > 70.0 {
        "Humid air slows drying; let soil dry a little longer.".to_string()
    } else {
        "Mild conditions; keep to the usual care schedule.".to_string()
    }
}
