//! Domain model for the garden: plants, their care reminders, and the
//! weather snapshot the scheduler consumes.
//!
//! Scope: types only — no scheduling or I/O code.
//!
//! Notes
//! - Field names follow the app's document format (camelCase JSON).
//! - Date/time fields use `chrono` (`DateTime<Utc>`), serialized as ISO-8601.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =====================
// Scalar ID newtype wrappers
// =====================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderId(pub String);

// =====================
// Core enums (string enums in the document format)
// =====================

/// Kind of care action a reminder tracks. Determines icon/label only;
/// watering completions additionally append to the plant's watering history.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderType {
    Water,
    Fertilize,
    Repot,
    Mist,
    Custom,
}

/// Whether a plant lives indoors or outdoors. Gates weather adjustments.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Indoor,
    Outdoor,
}

/// Externally-set health status; never mutated by the scheduling core.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Health {
    Good,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
    Critical,
}

// =====================
// Entities
// =====================

/// Textual care hints shown to the user. Descriptive only — the scheduler
/// does not parse these numerically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareProfile {
    pub water: String,
    pub sun: String,
    pub temp: String,
    pub humidity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanionPlant {
    pub name: String,
    pub benefit: String,
}

/// A recurring scheduled care action attached to a plant.
///
/// `next_due` is always derived from `frequency_days` plus adjustment
/// factors at the moment of computation; it is never user-editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: ReminderId,
    #[serde(rename = "type")]
    pub reminder_type: ReminderType,
    pub title: String,
    /// Base interval in days between occurrences, as configured by the user.
    pub frequency_days: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_completed: Option<DateTime<Utc>>,
    pub next_due: DateTime<Utc>,
}

/// Aggregate root. A plant owns its reminders exclusively — no reminder
/// outlives or is shared across plants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: PlantId,
    /// Common name.
    pub name: String,
    pub scientific_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Opaque image reference (the app stores a path or Base64 payload).
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    pub care: CareProfile,
    pub reminders: Vec<Reminder>,
    /// Completion timestamps of watering-type reminders, newest first.
    pub watering_history: Vec<DateTime<Utc>>,
    #[serde(default)]
    pub companions: Vec<CompanionPlant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_tips: Option<Vec<String>>,
    pub health: Health,
    pub date_added: DateTime<Utc>,
}

impl Plant {
    pub fn reminder(&self, id: &ReminderId) -> Option<&Reminder> {
        self.reminders.iter().find(|r| &r.id == id)
    }
}

/// Current conditions from the weather collaborator. Only `temp` and
/// `humidity` feed the scheduling math; the rest is display copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// °C.
    pub temp: f64,
    /// Relative humidity, 0–100.
    pub humidity: f64,
    pub condition: String,
    pub icon: String,
    pub advice: String,
}

/// Counters owned by the gamification collaborator. The scheduling core only
/// ever increments `watering_tasks_completed`, via the completion hook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub plants_added: u64,
    pub plants_diagnosed: u64,
    pub plants_identified: u64,
    pub watering_tasks_completed: u64,
}
