use crate::badges;
use crate::errors::EcoError;
use crate::models::{Activity, ActivityRequest, ActivityType, AppData, UserTotals};
use crate::scoring;
use crate::storage::Store;
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

pub const MAX_USERNAME_LEN: usize = 32;
pub const MAX_NOTES_LEN: usize = 280;

#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    pub username: String,
    pub activity_type: ActivityType,
    pub quantity: i64,
    pub notes: Option<String>,
}

impl NewActivity {
    pub fn parse(request: ActivityRequest) -> Result<Self, EcoError> {
        let username = request.username.trim();
        if username.is_empty() {
            return Err(EcoError::invalid("username is required"));
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(EcoError::invalid(format!(
                "username must be at most {MAX_USERNAME_LEN} characters"
            )));
        }

        let activity_type = request.activity_type.parse::<ActivityType>()?;
        scoring::validate_quantity(request.quantity)?;

        let notes = request
            .notes
            .map(|notes| notes.trim().to_string())
            .filter(|notes| !notes.is_empty());
        if notes
            .as_ref()
            .is_some_and(|notes| notes.chars().count() > MAX_NOTES_LEN)
        {
            return Err(EcoError::invalid(format!(
                "notes must be at most {MAX_NOTES_LEN} characters"
            )));
        }

        Ok(Self {
            username: username.to_string(),
            activity_type,
            quantity: request.quantity,
            notes,
        })
    }
}

/// Returns the stored record and the badge ids it unlocked.
pub fn apply(
    data: &mut AppData,
    input: NewActivity,
    now: DateTime<Utc>,
) -> Result<(Activity, Vec<&'static str>), EcoError> {
    let points = scoring::score(input.activity_type, input.quantity)?;
    let quantity = scoring::validate_quantity(input.quantity)?;

    data.next_seq += 1;
    let seq = data.next_seq;

    let activity = Activity {
        id: Uuid::new_v4(),
        username: input.username.clone(),
        activity_type: input.activity_type,
        quantity,
        notes: input.notes,
        points,
        created_at: now,
        seq,
    };
    data.activities.push(activity.clone());

    let totals = data
        .users
        .entry(input.username.clone())
        .or_insert_with(|| UserTotals::new(input.username.clone()));
    totals.total_points = totals.total_points.saturating_add(points);
    totals.activities_logged = totals.activities_logged.saturating_add(1);
    totals.type_counts.bump(input.activity_type);
    totals.reached_seq = seq;

    let awarded = badges::award_new(data, &input.username, now, seq);
    Ok((activity, awarded))
}

pub async fn ingest(store: &Store, request: ActivityRequest) -> Result<Activity, EcoError> {
    let input = NewActivity::parse(request).inspect_err(|err| {
        warn!("rejected activity: {err}");
    })?;

    let (activity, awarded) = store
        .transact(|data| apply(data, input, Utc::now()))
        .await?;

    info!(
        username = %activity.username,
        activity_type = %activity.activity_type,
        points = activity.points,
        badges = ?awarded,
        "activity logged"
    );
    Ok(activity)
}
