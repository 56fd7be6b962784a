//! Minimal runtime configuration helpers.
//! Everything has a sensible default; only coordinates gate weather lookups.

use std::path::PathBuf;

pub const DEFAULT_GARDEN_FILE: &str = "garden.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the garden document (plain JSON, the app's document shape).
    pub garden_path: PathBuf,
    /// Coordinates for the weather lookup. Weather is skipped when unset.
    pub coordinates: Option<(f64, f64)>,
    /// Allow disabling the weather lookup even when coordinates are set.
    pub weather_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let garden_path = std::env::var("GARDEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_GARDEN_FILE));

        let latitude = parse_coordinate("LATITUDE")?;
        let longitude = parse_coordinate("LONGITUDE")?;
        let coordinates = match (latitude, longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            (None, None) => None,
            _ => return Err("LATITUDE and LONGITUDE must be set together".to_string()),
        };

        let weather_enabled = std::env::var("WEATHER_ENABLED")
            .ok()
            .map(|s| matches!(s.as_str(), "1" | "true" | "TRUE"))
            .unwrap_or(true);

        Ok(Config {
            garden_path,
            coordinates,
            weather_enabled,
        })
    }

    pub fn wants_weather(&self) -> bool {
        self.weather_enabled && self.coordinates.is_some()
    }
}

fn parse_coordinate(var: &str) -> Result<Option<f64>, String> {
    match std::env::var(var) {
        Ok(s) if !s.trim().is_empty() => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| format!("{} must be a decimal degree value", var)),
        _ => Ok(None),
    }
}
