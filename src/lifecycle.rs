//! Reminder lifecycle: creation, completion, deletion, and the due/overdue
//! queries the presentation layer consumes.
//!
//! State is explicit — every operation takes the plant it mutates; callers
//! own persistence and propagation. The core assumes single-writer access to
//! a given plant's reminder set.

use crate::events::CompletionEvent;
use crate::models::garden::{Plant, Reminder, ReminderId, ReminderType, WeatherData};
use crate::scheduler;
use chrono::{DateTime, Duration, Utc};
use core::fmt;
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised by lifecycle operations.
#[derive(Debug)]
pub enum LifecycleError {
    /// Reminder title was empty or whitespace-only
    EmptyTitle,
    /// Base frequency must be a positive number of days
    NonPositiveFrequency(f64),
    /// The reminder id does not exist on the target plant
    ReminderNotFound(ReminderId),
}

impl Display for LifecycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleError::EmptyTitle => write!(f, "reminder title must not be empty"),
            LifecycleError::NonPositiveFrequency(v) => {
                write!(f, "frequency must be a positive number of days, got {}", v)
            }
            LifecycleError::ReminderNotFound(id) => {
                write!(f, "reminder {} not found on plant", id.0)
            }
        }
    }
}

impl Error for LifecycleError {}

impl LifecycleError {
    /// Validation failures are user-recoverable form errors; a missing
    /// reminder is a stale-view signal. The UI treats the two differently.
    pub fn is_validation(&self) -> bool {
        !matches!(self, LifecycleError::ReminderNotFound(_))
    }
}

/// User-supplied configuration for a new reminder.
#[derive(Debug, Clone)]
pub struct NewReminder {
    pub reminder_type: ReminderType,
    pub title: String,
    pub frequency_days: f64,
}

/// Create a reminder on `plant` and return its id.
///
/// `next_due` is computed by the scheduler at `reference`. Weather is only
/// applied when the caller explicitly supplies it — the app's plain creation
/// flow passes `None`.
pub fn create_reminder(
    plant: &mut Plant,
    config: NewReminder,
    weather: Option<&WeatherData>,
    reference: DateTime<Utc>,
) -> Result<ReminderId, LifecycleError> {
    if config.title.trim().is_empty() {
        return Err(LifecycleError::EmptyTitle);
    }
    if !(config.frequency_days > 0.0) {
        return Err(LifecycleError::NonPositiveFrequency(config.frequency_days));
    }

    let next_due = scheduler::compute_next_due(
        config.frequency_days,
        plant.location_type,
        weather,
        reference,
    );
    let id = fresh_reminder_id(plant, reference);
    plant.reminders.push(Reminder {
        id: id.clone(),
        reminder_type: config.reminder_type,
        title: config.title,
        frequency_days: config.frequency_days,
        last_completed: None,
        next_due,
    });
    Ok(id)
}

/// Complete a reminder with the simple roll-forward: the new `next_due` is
/// `reference + frequency_days`, with no weather or season recompute. This
/// is the path the app's main completion flow uses.
pub fn complete_reminder(
    plant: &mut Plant,
    reminder_id: &ReminderId,
    reference: DateTime<Utc>,
) -> Result<CompletionEvent, LifecycleError> {
    let next_due = {
        let reminder = find_reminder(plant, reminder_id)?;
        roll_forward(reference, reminder.frequency_days)
    };
    apply_completion(plant, reminder_id, next_due, reference)
}

/// Complete a reminder and recompute `next_due` through the full scheduler
/// (weather + season). Kept as a separate entry point from the plain
/// roll-forward; which one a flow uses is a product decision, not ours.
pub fn complete_reminder_rescheduled(
    plant: &mut Plant,
    reminder_id: &ReminderId,
    weather: Option<&WeatherData>,
    reference: DateTime<Utc>,
) -> Result<CompletionEvent, LifecycleError> {
    let next_due = {
        let reminder = find_reminder(plant, reminder_id)?;
        scheduler::compute_next_due(reminder.frequency_days, plant.location_type, weather, reference)
    };
    apply_completion(plant, reminder_id, next_due, reference)
}

/// Delete a reminder. Idempotent: an unknown id is a no-op returning
/// `false`, which keeps UI deletion flows simple.
pub fn delete_reminder(plant: &mut Plant, reminder_id: &ReminderId) -> bool {
    let before = plant.reminders.len();
    plant.reminders.retain(|r| &r.id != reminder_id);
    plant.reminders.len() != before
}

/// A reminder is due (or overdue) once its due time has passed.
pub fn is_due(reminder: &Reminder, reference: DateTime<Utc>) -> bool {
    reminder.next_due <= reference
}

/// Whole days until due, rounded up. Zero or negative for due/overdue
/// reminders; the display layer decides how to present that.
pub fn days_until_due(reminder: &Reminder, reference: DateTime<Utc>) -> i64 {
    let secs = (reminder.next_due - reference).num_seconds();
    secs.div_euclid(86_400) + i64::from(secs.rem_euclid(86_400) != 0)
}

/// Canonical presentation order: ascending by `next_due`, overdue first.
pub fn sorted_by_due(plant: &Plant) -> Vec<&Reminder> {
    let mut out: Vec<&Reminder> = plant.reminders.iter().collect();
    out.sort_by_key(|r| r.next_due);
    out
}

fn find_reminder<'a>(plant: &'a Plant, id: &ReminderId) -> Result<&'a Reminder, LifecycleError> {
    plant
        .reminder(id)
        .ok_or_else(|| LifecycleError::ReminderNotFound(id.clone()))
}

/// Single state transition shared by both completion paths: stamp
/// `last_completed`, install the new `next_due`, and append to the watering
/// history for water-type reminders. The reminder stays — reminders are
/// recurring, not one-shot.
fn apply_completion(
    plant: &mut Plant,
    reminder_id: &ReminderId,
    next_due: DateTime<Utc>,
    reference: DateTime<Utc>,
) -> Result<CompletionEvent, LifecycleError> {
    let reminder = plant
        .reminders
        .iter_mut()
        .find(|r| &r.id == reminder_id)
        .ok_or_else(|| LifecycleError::ReminderNotFound(reminder_id.clone()))?;
    reminder.last_completed = Some(reference);
    reminder.next_due = next_due;
    let reminder_type = reminder.reminder_type;

    if reminder_type == ReminderType::Water {
        plant.watering_history.insert(0, reference);
    }

    Ok(CompletionEvent {
        plant_id: plant.id.clone(),
        reminder_id: reminder_id.clone(),
        reminder_type,
        completed_at: reference,
    })
}

/// Simple roll-forward used by the plain completion path: fractional
/// frequencies advance by whole seconds, not rounded days.
fn roll_forward(reference: DateTime<Utc>, frequency_days: f64) -> DateTime<Utc> {
    reference + Duration::seconds((frequency_days * 86_400.0).round() as i64)
}

/// Millisecond timestamp plus a random suffix; regenerated on the (very
/// unlikely) collision within the owning plant.
fn fresh_reminder_id(plant: &Plant, reference: DateTime<Utc>) -> ReminderId {
    let mut rng = rand::rng();
    loop {
        let candidate = ReminderId(format!(
            "{}-{:04x}",
            reference.timestamp_millis(),
            rng.random::<u16>()
        ));
        if plant.reminder(&candidate).is_none() {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::garden::{CareProfile, Health, LocationType, PlantId};
    use chrono::TimeZone;

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
    }

    fn plant() -> Plant {
        Plant {
            id: PlantId("p1".to_string()),
            name: "Monstera".to_string(),
            scientific_name: "Monstera deliciosa".to_string(),
            nickname: None,
            image: "images/monstera.jpg".to_string(),
            location_type: Some(LocationType::Indoor),
            care: CareProfile {
                water: "Every 1-2 weeks".to_string(),
                sun: "Bright Indirect".to_string(),
                temp: "20-30°C".to_string(),
                humidity: "Medium".to_string(),
            },
            reminders: Vec::new(),
            watering_history: Vec::new(),
            companions: Vec::new(),
            quick_tips: None,
            health: Health::Good,
            date_added: base_time(),
        }
    }

    fn new_water_reminder(frequency_days: f64) -> NewReminder {
        NewReminder {
            reminder_type: ReminderType::Water,
            title: "Water".to_string(),
            frequency_days,
        }
    }

    #[test]
    fn create_rejects_blank_title() {
        let mut p = plant();
        let err = create_reminder(
            &mut p,
            NewReminder {
                reminder_type: ReminderType::Custom,
                title: "   ".to_string(),
                frequency_days: 7.0,
            },
            None,
            base_time(),
        )
        .unwrap_err();
        assert!(matches!(err, LifecycleError::EmptyTitle));
        assert!(err.is_validation());
        assert!(p.reminders.is_empty());
    }

    #[test]
    fn create_rejects_non_positive_frequency() {
        let mut p = plant();
        for bad in [0.0, -3.0, f64::NAN] {
            let err = create_reminder(&mut p, new_water_reminder(bad), None, base_time()).unwrap_err();
            assert!(matches!(err, LifecycleError::NonPositiveFrequency(_)));
        }
        assert!(p.reminders.is_empty());
    }

    #[test]
    fn fresh_reminder_is_never_immediately_due() {
        let mut p = plant();
        // Fractional frequencies below half a day must still schedule ahead
        // of the creation time.
        for frequency in [7.0, 1.0, 0.4] {
            let id = create_reminder(&mut p, new_water_reminder(frequency), None, base_time()).unwrap();
            let reminder = p.reminder(&id).unwrap();
            assert!(!is_due(reminder, base_time()), "frequency={frequency}");
            assert!(reminder.last_completed.is_none());
        }
    }

    #[test]
    fn create_applies_weather_only_when_supplied() {
        let mut p = plant();
        p.location_type = Some(LocationType::Outdoor);
        let hot = WeatherData {
            temp: 30.0,
            humidity: 80.0,
            condition: "Clear".to_string(),
            icon: "sun".to_string(),
            advice: String::new(),
        };

        let plain = create_reminder(&mut p, new_water_reminder(10.0), None, base_time()).unwrap();
        let adjusted =
            create_reminder(&mut p, new_water_reminder(10.0), Some(&hot), base_time()).unwrap();

        assert_eq!(
            p.reminder(&plain).unwrap().next_due,
            base_time() + Duration::days(10)
        );
        // 10 * 0.7 + 1 = 8
        assert_eq!(
            p.reminder(&adjusted).unwrap().next_due,
            base_time() + Duration::days(8)
        );
    }

    #[test]
    fn ids_are_unique_within_the_plant_at_the_same_instant() {
        let mut p = plant();
        for _ in 0..50 {
            create_reminder(&mut p, new_water_reminder(7.0), None, base_time()).unwrap();
        }
        let mut ids: Vec<_> = p.reminders.iter().map(|r| r.id.0.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn completing_water_reminder_updates_history_and_leaves_others_alone() {
        let mut p = plant();
        let water = create_reminder(&mut p, new_water_reminder(10.0), None, base_time()).unwrap();
        let feed = create_reminder(
            &mut p,
            NewReminder {
                reminder_type: ReminderType::Fertilize,
                title: "Fertilize".to_string(),
                frequency_days: 30.0,
            },
            None,
            base_time(),
        )
        .unwrap();
        let feed_due_before = p.reminder(&feed).unwrap().next_due;

        let done_at = base_time() + Duration::days(9);
        let event = complete_reminder(&mut p, &water, done_at).unwrap();

        assert_eq!(event.reminder_type, ReminderType::Water);
        assert_eq!(event.completed_at, done_at);
        assert_eq!(p.watering_history, vec![done_at]);

        let w = p.reminder(&water).unwrap();
        assert_eq!(w.last_completed, Some(done_at));
        assert_eq!(w.next_due, done_at + Duration::days(10));

        // untouched sibling
        let f = p.reminder(&feed).unwrap();
        assert_eq!(f.next_due, feed_due_before);
        assert!(f.last_completed.is_none());
    }

    #[test]
    fn completing_prepends_newest_first() {
        let mut p = plant();
        let water = create_reminder(&mut p, new_water_reminder(5.0), None, base_time()).unwrap();
        let first = base_time() + Duration::days(5);
        let second = first + Duration::days(5);
        complete_reminder(&mut p, &water, first).unwrap();
        complete_reminder(&mut p, &water, second).unwrap();
        assert_eq!(p.watering_history, vec![second, first]);
    }

    #[test]
    fn non_water_completion_does_not_touch_history() {
        let mut p = plant();
        let mist = create_reminder(
            &mut p,
            NewReminder {
                reminder_type: ReminderType::Mist,
                title: "Mist".to_string(),
                frequency_days: 3.0,
            },
            None,
            base_time(),
        )
        .unwrap();
        complete_reminder(&mut p, &mist, base_time() + Duration::days(3)).unwrap();
        assert!(p.watering_history.is_empty());
    }

    #[test]
    fn simple_completion_ignores_season() {
        // July sits inside the dormancy band, but the roll-forward path must
        // not apply it.
        let mut p = plant();
        let water = create_reminder(&mut p, new_water_reminder(10.0), None, base_time()).unwrap();
        let july = Utc.with_ymd_and_hms(2024, 7, 10, 9, 0, 0).unwrap();
        complete_reminder(&mut p, &water, july).unwrap();
        assert_eq!(p.reminder(&water).unwrap().next_due, july + Duration::days(10));
    }

    #[test]
    fn rescheduled_completion_applies_weather_and_season() {
        let mut p = plant();
        p.location_type = Some(LocationType::Outdoor);
        let water = create_reminder(&mut p, new_water_reminder(7.0), None, base_time()).unwrap();
        let cold = WeatherData {
            temp: 10.0,
            humidity: 40.0,
            condition: "Overcast".to_string(),
            icon: "cloud".to_string(),
            advice: String::new(),
        };
        let july = Utc.with_ymd_and_hms(2024, 7, 10, 9, 0, 0).unwrap();
        complete_reminder_rescheduled(&mut p, &water, Some(&cold), july).unwrap();
        // round(7 * 1.3 * 1.5) = 14
        assert_eq!(p.reminder(&water).unwrap().next_due, july + Duration::days(14));
        assert_eq!(p.watering_history, vec![july]);
    }

    #[test]
    fn completing_unknown_reminder_fails_without_side_effects() {
        let mut p = plant();
        create_reminder(&mut p, new_water_reminder(7.0), None, base_time()).unwrap();
        let missing = ReminderId("nope".to_string());
        let err = complete_reminder(&mut p, &missing, base_time()).unwrap_err();
        assert!(matches!(err, LifecycleError::ReminderNotFound(_)));
        assert!(!err.is_validation());
        assert!(p.watering_history.is_empty());
    }

    #[test]
    fn delete_is_idempotent() {
        let mut p = plant();
        let id = create_reminder(&mut p, new_water_reminder(7.0), None, base_time()).unwrap();
        assert!(delete_reminder(&mut p, &id));
        assert!(!delete_reminder(&mut p, &id));
        assert!(!delete_reminder(&mut p, &ReminderId("ghost".to_string())));
        assert!(p.reminders.is_empty());
    }

    #[test]
    fn sorted_by_due_puts_overdue_first() {
        let mut p = plant();
        let d = base_time();
        let mk = |title: &str, due: DateTime<Utc>| Reminder {
            id: ReminderId(title.to_string()),
            reminder_type: ReminderType::Custom,
            title: title.to_string(),
            frequency_days: 7.0,
            last_completed: None,
            next_due: due,
        };
        p.reminders = vec![
            mk("late", d + Duration::days(5)),
            mk("overdue", d - Duration::days(1)),
            mk("today", d),
        ];
        let order: Vec<&str> = sorted_by_due(&p).iter().map(|r| r.title.as_str()).collect();
        assert_eq!(order, vec!["overdue", "today", "late"]);
    }

    #[test]
    fn days_until_due_rounds_up_and_goes_negative() {
        let mut p = plant();
        let id = create_reminder(&mut p, new_water_reminder(7.0), None, base_time()).unwrap();
        let r = p.reminder(&id).unwrap().clone();

        assert_eq!(days_until_due(&r, base_time()), 7);
        // A partial day still counts as one remaining day.
        assert_eq!(days_until_due(&r, r.next_due - Duration::hours(1)), 1);
        assert_eq!(days_until_due(&r, r.next_due), 0);
        assert_eq!(days_until_due(&r, r.next_due + Duration::hours(30)), -1);
    }

    #[test]
    fn is_due_boundary_is_inclusive() {
        let mut p = plant();
        let id = create_reminder(&mut p, new_water_reminder(7.0), None, base_time()).unwrap();
        let r = p.reminder(&id).unwrap();
        assert!(!is_due(r, r.next_due - Duration::seconds(1)));
        assert!(is_due(r, r.next_due));
        assert!(is_due(r, r.next_due + Duration::seconds(1)));
    }
}
