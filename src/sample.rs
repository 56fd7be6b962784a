//! First-run seed garden, mirroring the app's offline/preview plants.
//! Watering-history times get a small seeded jitter so the demo data does
//! not look machine-stamped.

use crate::models::garden::{
    CareProfile, CompanionPlant, Health, LocationType, Plant, PlantId, Reminder, ReminderId,
    ReminderType,
};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x5EED_1E55_0000_1337;

pub fn seed_garden(now: DateTime<Utc>) -> Vec<Plant> {
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut jittered = |days_ago: i64| {
        now - Duration::days(days_ago) - Duration::minutes(rng.random_range(0..120))
    };

    let peace_lily = Plant {
        id: PlantId("sample-1".to_string()),
        name: "Peace Lily".to_string(),
        scientific_name: "Spathiphyllum".to_string(),
        nickname: Some("Spathy".to_string()),
        image: "images/peace-lily.jpg".to_string(),
        location_type: Some(LocationType::Indoor),
        care: CareProfile {
            water: "Weekly".to_string(),
            sun: "Partial Shade".to_string(),
            temp: "18-24°C".to_string(),
            humidity: "High".to_string(),
        },
        reminders: vec![
            Reminder {
                id: ReminderId("sample-1-water".to_string()),
                reminder_type: ReminderType::Water,
                title: "Water".to_string(),
                frequency_days: 7.0,
                last_completed: None,
                next_due: now + Duration::days(1),
            },
            Reminder {
                id: ReminderId("sample-1-feed".to_string()),
                reminder_type: ReminderType::Fertilize,
                title: "Fertilize".to_string(),
                frequency_days: 30.0,
                last_completed: None,
                next_due: now + Duration::days(14),
            },
        ],
        watering_history: vec![jittered(6), jittered(13)],
        companions: vec![
            CompanionPlant {
                name: "Pothos".to_string(),
                benefit: "Shares humidity needs and tolerates similar light".to_string(),
            },
            CompanionPlant {
                name: "Philodendron".to_string(),
                benefit: "Great structural contrast, same watering schedule".to_string(),
            },
        ],
        quick_tips: Some(vec![
            "Keep soil consistently moist but not soggy.".to_string(),
            "Mist leaves frequently to simulate high humidity.".to_string(),
            "Keep out of direct sunlight to avoid leaf burn.".to_string(),
        ]),
        health: Health::Good,
        date_added: now,
    };

    let monstera = Plant {
        id: PlantId("sample-2".to_string()),
        name: "Monstera".to_string(),
        scientific_name: "Monstera deliciosa".to_string(),
        nickname: None,
        image: "images/monstera.jpg".to_string(),
        location_type: Some(LocationType::Outdoor),
        care: CareProfile {
            water: "Every 1-2 weeks".to_string(),
            sun: "Bright Indirect".to_string(),
            temp: "20-30°C".to_string(),
            humidity: "Medium".to_string(),
        },
        reminders: vec![Reminder {
            id: ReminderId("sample-2-water".to_string()),
            reminder_type: ReminderType::Water,
            title: "Water".to_string(),
            frequency_days: 10.0,
            last_completed: None,
            // overdue on purpose so the first agenda run shows a due task
            next_due: now - Duration::minutes(100),
        }],
        watering_history: vec![jittered(12)],
        companions: vec![
            CompanionPlant {
                name: "Rubber Plant".to_string(),
                benefit: "Strong structural contrast for aesthetic".to_string(),
            },
            CompanionPlant {
                name: "Schefflera".to_string(),
                benefit: "Repels spider mites that often attack Monstera".to_string(),
            },
        ],
        quick_tips: Some(vec![
            "Allow the top 2-3 inches of soil to dry out between waterings.".to_string(),
            "Wipe dust off leaves regularly for better photosynthesis.".to_string(),
            "Rotate the plant occasionally for even growth.".to_string(),
        ]),
        health: Health::Good,
        date_added: now,
    };

    vec![peace_lily, monstera]
}
