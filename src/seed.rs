use crate::errors::EcoError;
use crate::ingest::{self, NewActivity};
use crate::models::ActivityType;
use crate::storage::Store;
use chrono::Utc;
use tracing::info;

const DEMO: &[(&str, ActivityType, i64, Option<&str>)] = &[
    ("neo", ActivityType::PublicTransport, 2, Some("metro to work")),
    ("neo", ActivityType::VeganMeal, 1, None),
    ("trinity", ActivityType::BikeRide, 3, Some("river loop")),
    ("trinity", ActivityType::Recycling, 4, None),
    ("morpheus", ActivityType::VeganMeal, 2, None),
    ("morpheus", ActivityType::PublicTransport, 1, None),
    ("ana", ActivityType::BikeRide, 1, None),
    ("ana", ActivityType::Recycling, 2, Some("glass and cans")),
];

pub async fn seed_demo(store: &Store) -> Result<usize, EcoError> {
    let inserted = store
        .transact(|data| {
            let now = Utc::now();
            for &(username, activity_type, quantity, notes) in DEMO {
                let input = NewActivity {
                    username: username.to_string(),
                    activity_type,
                    quantity,
                    notes: notes.map(str::to_string),
                };
                ingest::apply(data, input, now)?;
            }
            Ok(DEMO.len())
        })
        .await?;

    info!(inserted, "seeded demo activities");
    Ok(inserted)
}
