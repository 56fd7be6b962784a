pub mod models {
    pub mod garden;
}

pub mod client;
pub mod config;
pub mod events;
pub mod lifecycle;
pub mod sample;
pub mod scheduler;
pub mod store;

use crate::client::WeatherClient;
use crate::config::Config;
use crate::events::{CompletionHub, StatsRecorder};
use crate::models::garden::{Plant, PlantId, ReminderId, WeatherData};
use log::{error, info, warn};

#[derive(Debug)]
enum Command {
    /// List every plant's reminders in due order.
    Agenda,
    /// Complete a reminder with the plain roll-forward.
    Complete { plant_id: PlantId, reminder_id: ReminderId },
    /// Complete a reminder and recompute the due date with weather + season.
    CompleteRescheduled { plant_id: PlantId, reminder_id: ReminderId },
}

fn parse_command() -> Result<Command, String> {
    let mut args = std::env::args();
    args.next(); // skip program name

    let Some(verb) = args.next() else {
        return Ok(Command::Agenda);
    };

    match verb.as_str() {
        "agenda" => {
            if args.next().is_some() {
                return Err("`agenda` takes no arguments".to_string());
            }
            Ok(Command::Agenda)
        }
        "complete" => {
            let (plant_id, reminder_id) = parse_task_ids("complete", &mut args)?;
            Ok(Command::Complete { plant_id, reminder_id })
        }
        "complete-rescheduled" => {
            let (plant_id, reminder_id) = parse_task_ids("complete-rescheduled", &mut args)?;
            Ok(Command::CompleteRescheduled { plant_id, reminder_id })
        }
        other => Err(format!(
            "unrecognised command: {} (expected agenda | complete | complete-rescheduled)",
            other
        )),
    }
}

fn parse_task_ids(
    verb: &str,
    args: &mut impl Iterator<Item = String>,
) -> Result<(PlantId, ReminderId), String> {
    let plant = args
        .next()
        .ok_or_else(|| format!("`{}` requires <plant-id> <reminder-id>", verb))?;
    let reminder = args
        .next()
        .ok_or_else(|| format!("`{}` requires <plant-id> <reminder-id>", verb))?;
    if args.next().is_some() {
        return Err(format!("`{}` takes exactly two arguments", verb));
    }
    Ok((PlantId(plant), ReminderId(reminder)))
}

fn fetch_weather(cfg: &Config) -> Option<WeatherData> {
    if !cfg.wants_weather() {
        info!("Weather lookup disabled or no coordinates configured; scheduling without adjustments");
        return None;
    }
    let (lat, lon) = cfg.coordinates?;
    match WeatherClient::new().current(lat, lon) {
        Ok(w) => {
            info!(
                "Current weather: {} {:.1}°C {:.0}% humidity — {}",
                w.condition, w.temp, w.humidity, w.advice
            );
            Some(w)
        }
        Err(e) => {
            // Degrade gracefully: no weather means no adjustment, not a failure.
            warn!("Weather lookup failed ({}); scheduling without adjustments", e);
            None
        }
    }
}

fn print_agenda(plants: &[Plant], now: chrono::DateTime<chrono::Utc>) {
    for plant in plants {
        let label = plant.nickname.as_deref().unwrap_or(&plant.name);
        info!("{} ({}) — {} reminder(s)", label, plant.id.0, plant.reminders.len());
        for reminder in lifecycle::sorted_by_due(plant) {
            let days = lifecycle::days_until_due(reminder, now);
            if lifecycle::is_due(reminder, now) {
                info!("  [{}] {} — DUE ({} day(s) overdue)", reminder.id.0, reminder.title, -days);
            } else {
                info!("  [{}] {} — in {} day(s)", reminder.id.0, reminder.title, days);
            }
        }
    }
}

fn find_plant_mut<'a>(plants: &'a mut [Plant], id: &PlantId) -> Result<&'a mut Plant, String> {
    plants
        .iter_mut()
        .find(|p| &p.id == id)
        .ok_or_else(|| format!("plant {} not found in garden", id.0))
}

pub fn run() -> Result<(), String> {
    let command = parse_command()?;
    let cfg = Config::from_env()?;
    info!(
        "Config loaded (garden_file={}, weather_enabled={}, coordinates={})",
        cfg.garden_path.display(),
        cfg.weather_enabled,
        cfg.coordinates
            .map(|(lat, lon)| format!("{},{}", lat, lon))
            .unwrap_or_else(|| "-".to_string()),
    );

    let now = chrono::Utc::now();
    let mut plants = match store::load(&cfg.garden_path).map_err(|e| format!("loading garden failed: {}", e))? {
        Some(plants) => plants,
        None => {
            info!(
                "No garden document at {}; seeding the sample garden",
                cfg.garden_path.display()
            );
            let seeded = sample::seed_garden(now);
            store::save(&cfg.garden_path, &seeded).map_err(|e| format!("seeding garden failed: {}", e))?;
            seeded
        }
    };
    info!("Loaded {} plant(s)", plants.len());

    match command {
        Command::Agenda => {
            fetch_weather(&cfg);
            print_agenda(&plants, now);
        }
        Command::Complete { plant_id, reminder_id } => {
            let mut hub = CompletionHub::new();
            hub.subscribe(Box::new(StatsRecorder::default()));

            let plant = find_plant_mut(&mut plants, &plant_id)?;
            let event = lifecycle::complete_reminder(plant, &reminder_id, now)
                .map_err(|e| format!("completing reminder failed: {}", e))?;
            hub.publish(&event);

            let next_due = plant.reminder(&reminder_id).map(|r| r.next_due).unwrap_or(now);
            info!(
                "Completed {:?} task {} on plant {}; next due {}",
                event.reminder_type, reminder_id.0, plant_id.0, next_due
            );
            store::save(&cfg.garden_path, &plants).map_err(|e| format!("saving garden failed: {}", e))?;
        }
        Command::CompleteRescheduled { plant_id, reminder_id } => {
            let mut hub = CompletionHub::new();
            hub.subscribe(Box::new(StatsRecorder::default()));

            let weather = fetch_weather(&cfg);
            let plant = find_plant_mut(&mut plants, &plant_id)?;
            let event = lifecycle::complete_reminder_rescheduled(plant, &reminder_id, weather.as_ref(), now)
                .map_err(|e| format!("completing reminder failed: {}", e))?;
            hub.publish(&event);

            let next_due = plant.reminder(&reminder_id).map(|r| r.next_due).unwrap_or(now);
            info!(
                "Completed {:?} task {} on plant {} (rescheduled); next due {}",
                event.reminder_type, reminder_id.0, plant_id.0, next_due
            );
            store::save(&cfg.garden_path, &plants).map_err(|e| format!("saving garden failed: {}", e))?;
        }
    }

    Ok(())
}

fn main() {
    let default_filter = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(default_filter)
        .format_timestamp_secs()
        .init();

    info!(
        "seedly-care {} (git {}) starting",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_TIME_GIT_HASH")
    );
    if let Err(e) = run() {
        error!("fatal: {}", e);
        std::process::exit(1);
    }
}
