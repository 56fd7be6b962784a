//! Adaptive care scheduler: computes when a care action is next due from a
//! base interval, the plant's location, current weather, and the season.
//!
//! Pure functions only — the reference time is injected, never read from the
//! system clock here.

use crate::models::garden::{LocationType, WeatherData};
use chrono::{DateTime, Datelike, Days, Utc};

/// Above this outdoor temperature (°C) pots dry faster; water sooner.
pub const HOT_TEMP_C: f64 = 28.0;
pub const HOT_FACTOR: f64 = 0.7;

/// Below this outdoor temperature (°C) drying slows; water later.
pub const COLD_TEMP_C: f64 = 15.0;
pub const COLD_FACTOR: f64 = 1.3;

/// Above this relative humidity (%) add a flat extra day.
pub const HUMID_PCT: f64 = 70.0;
pub const HUMID_EXTRA_DAYS: f64 = 1.0;

/// Dormancy slowdown applied during months 5–7 (0-indexed, Jun–Aug). The
/// month band is kept exactly as the product shipped it; see DESIGN.md for
/// the hemisphere question.
pub const DORMANT_FACTOR: f64 = 1.5;

/// Compute the next due timestamp for a care action.
///
/// Adjustments compose in a fixed order: temperature multiplier, then the
/// flat humidity addition, then the seasonal multiplier over the running
/// total, then rounding to whole days. Weather applies only to outdoor
/// plants and a missing weather snapshot means no weather adjustment, not an
/// error. `base_frequency_days` is not validated here; creation-time
/// validation is the lifecycle manager's job.
pub fn compute_next_due(
    base_frequency_days: f64,
    location_type: Option<LocationType>,
    weather: Option<&WeatherData>,
    reference: DateTime<Utc>,
) -> DateTime<Utc> {
    let mut adjusted = base_frequency_days;

    if location_type == Some(LocationType::Outdoor)
        && let Some(w) = weather
    {
        if w.temp > HOT_TEMP_C {
            adjusted *= HOT_FACTOR;
        } else if w.temp < COLD_TEMP_C {
            adjusted *= COLD_FACTOR;
        }
        if w.humidity > HUMID_PCT {
            adjusted += HUMID_EXTRA_DAYS;
        }
    }

    if is_dormant_month(reference) {
        adjusted *= DORMANT_FACTOR;
    }

    add_days_rounded(reference, adjusted)
}

/// Seasonal slowdown band: month0 in 5..=7 (Jun–Aug), independent of
/// indoor/outdoor status.
pub fn is_dormant_month(reference: DateTime<Utc>) -> bool {
    (5..=7).contains(&reference.month0())
}

/// Round to the nearest whole day and add as calendar days (stable across
/// DST boundaries, unlike fixed 24h blocks). A positive interval never
/// rounds below one day — a zero-day gap would make a recurring reminder
/// due the instant it is scheduled.
fn add_days_rounded(reference: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    let mut rounded = days.round() as i64;
    if days > 0.0 && rounded == 0 {
        rounded = 1;
    }
    if rounded >= 0 {
        reference
            .checked_add_days(Days::new(rounded as u64))
            .unwrap_or(reference)
    } else {
        reference
            .checked_sub_days(Days::new(rounded.unsigned_abs()))
            .unwrap_or(reference)
    }
}
