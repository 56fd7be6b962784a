//! Completion events emitted by the reminder lifecycle.
//!
//! Gamification (XP, achievements) lives outside this crate; it observes
//! completions through `CompletionSink` instead of the lifecycle reaching
//! into user-profile state.

use crate::models::garden::{PlantId, ReminderId, ReminderType, UserStats};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed care task. Produced by both completion paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEvent {
    pub plant_id: PlantId,
    pub reminder_id: ReminderId,
    pub reminder_type: ReminderType,
    pub completed_at: DateTime<Utc>,
}

/// Observer of completion events.
pub trait CompletionSink {
    fn on_completion(&mut self, event: &CompletionEvent);
}

/// Fan-out to all subscribed sinks, in subscription order.
#[derive(Default)]
pub struct CompletionHub {
    sinks: Vec<Box<dyn CompletionSink>>,
}

impl CompletionHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, sink: Box<dyn CompletionSink>) {
        self.sinks.push(sink);
    }

    pub fn publish(&mut self, event: &CompletionEvent) {
        for sink in &mut self.sinks {
            sink.on_completion(event);
        }
    }
}

/// In-crate stats sink: counts completed watering tasks. Only water-type
/// completions increment the counter; all other types are display-only.
#[derive(Debug, Default)]
pub struct StatsRecorder {
    pub stats: UserStats,
}

impl CompletionSink for StatsRecorder {
    fn on_completion(&mut self, event: &CompletionEvent) {
        if event.reminder_type == ReminderType::Water {
            self.stats.watering_tasks_completed += 1;
        }
    }
}
