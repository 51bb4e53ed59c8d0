use crate::errors::EcoError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    PublicTransport,
    VeganMeal,
    Recycling,
    BikeRide,
}

impl ActivityType {
    pub const ALL: [ActivityType; 4] = [
        ActivityType::PublicTransport,
        ActivityType::VeganMeal,
        ActivityType::Recycling,
        ActivityType::BikeRide,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::PublicTransport => "public_transport",
            ActivityType::VeganMeal => "vegan_meal",
            ActivityType::Recycling => "recycling",
            ActivityType::BikeRide => "bike_ride",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = EcoError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        ActivityType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                EcoError::invalid(format!(
                    "unknown activity_type '{wanted}' (expected one of public_transport, vegan_meal, recycling, bike_ride)"
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub activity_type: ActivityType,
    pub quantity: u32,
    pub notes: Option<String>,
    pub points: u64,
    pub created_at: DateTime<Utc>,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts {
    pub public_transport: u64,
    pub vegan_meal: u64,
    pub recycling: u64,
    pub bike_ride: u64,
}

impl TypeCounts {
    pub fn get(&self, kind: ActivityType) -> u64 {
        match kind {
            ActivityType::PublicTransport => self.public_transport,
            ActivityType::VeganMeal => self.vegan_meal,
            ActivityType::Recycling => self.recycling,
            ActivityType::BikeRide => self.bike_ride,
        }
    }

    pub fn bump(&mut self, kind: ActivityType) {
        let slot = match kind {
            ActivityType::PublicTransport => &mut self.public_transport,
            ActivityType::VeganMeal => &mut self.vegan_meal,
            ActivityType::Recycling => &mut self.recycling,
            ActivityType::BikeRide => &mut self.bike_ride,
        };
        *slot = slot.saturating_add(1);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTotals {
    pub username: String,
    pub total_points: u64,
    pub activities_logged: u64,
    pub type_counts: TypeCounts,
    /// Seq of the activity that produced the current total; leaderboard tie-break.
    pub reached_seq: u64,
}

impl UserTotals {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            total_points: 0,
            activities_logged: 0,
            type_counts: TypeCounts::default(),
            reached_seq: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeAward {
    pub username: String,
    pub awarded_at: DateTime<Utc>,
    pub seq: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BadgeHolders {
    pub awards: Vec<BadgeAward>,
}

impl BadgeHolders {
    pub fn held_by(&self, username: &str) -> bool {
        self.awards.iter().any(|award| award.username == username)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub next_seq: u64,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub users: BTreeMap<String, UserTotals>,
    /// Keyed by badge id.
    #[serde(default)]
    pub badges: BTreeMap<String, BadgeHolders>,
}

#[derive(Debug, Deserialize)]
pub struct ActivityRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub activity_type: String,
    pub quantity: i64,
    #[serde(default, alias = "note")]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub points: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub username: String,
    pub total_points: u64,
    pub activities_logged: u64,
    pub badges: Vec<BadgeRef>,
    pub share_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeView {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub criteria: String,
    pub holders: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    pub inserted: usize,
}
