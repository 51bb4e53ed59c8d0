use crate::models::{
    ActivityType, AppData, BadgeAward, BadgeHolders, BadgeRef, BadgeView, UserTotals,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    TotalActivities(u64),
    TotalPoints(u64),
    TypeCount(ActivityType, u64),
    EveryType,
    /// Only the first user overall to reach the total earns it.
    FirstToReachPoints(u64),
}

impl Criterion {
    pub fn is_met(&self, totals: &UserTotals) -> bool {
        match *self {
            Criterion::TotalActivities(min) => totals.activities_logged >= min,
            Criterion::TotalPoints(min) | Criterion::FirstToReachPoints(min) => {
                totals.total_points >= min
            }
            Criterion::TypeCount(kind, min) => totals.type_counts.get(kind) >= min,
            Criterion::EveryType => ActivityType::ALL
                .iter()
                .all(|kind| totals.type_counts.get(*kind) > 0),
        }
    }

    pub fn is_exclusive(&self) -> bool {
        matches!(self, Criterion::FirstToReachPoints(_))
    }

    pub fn describe(&self) -> String {
        match self {
            Criterion::TotalActivities(1) => "1 activity".to_string(),
            Criterion::TotalActivities(min) => format!("{min} activities"),
            Criterion::TotalPoints(min) => format!("{min} total points"),
            Criterion::TypeCount(kind, min) => format!("{min} {kind} activities"),
            Criterion::EveryType => "1 activity of every type".to_string(),
            Criterion::FirstToReachPoints(min) => format!("first to reach {min} total points"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BadgeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub criterion: Criterion,
}

pub const CATALOG: &[BadgeDef] = &[
    BadgeDef {
        id: "first_step",
        name: "First Step",
        criterion: Criterion::TotalActivities(1),
    },
    BadgeDef {
        id: "eco_warrior",
        name: "Eco Warrior",
        criterion: Criterion::TotalPoints(100),
    },
    BadgeDef {
        id: "planet_hero",
        name: "Planet Hero",
        criterion: Criterion::TotalPoints(500),
    },
    BadgeDef {
        id: "transit_regular",
        name: "Transit Regular",
        criterion: Criterion::TypeCount(ActivityType::PublicTransport, 5),
    },
    BadgeDef {
        id: "plant_powered",
        name: "Plant Powered",
        criterion: Criterion::TypeCount(ActivityType::VeganMeal, 5),
    },
    BadgeDef {
        id: "recycling_hero",
        name: "Recycling Hero",
        criterion: Criterion::TypeCount(ActivityType::Recycling, 5),
    },
    BadgeDef {
        id: "pedal_pusher",
        name: "Pedal Pusher",
        criterion: Criterion::TypeCount(ActivityType::BikeRide, 5),
    },
    BadgeDef {
        id: "all_rounder",
        name: "All-Rounder",
        criterion: Criterion::EveryType,
    },
    BadgeDef {
        id: "trailblazer",
        name: "Trailblazer",
        criterion: Criterion::FirstToReachPoints(250),
    },
];

/// Held badges and closed first-to-reach badges are never returned.
pub fn evaluate(
    totals: &UserTotals,
    ledger: &BTreeMap<String, BadgeHolders>,
) -> Vec<&'static BadgeDef> {
    CATALOG
        .iter()
        .filter(|def| {
            let holders = ledger.get(def.id);
            let already_held = holders.is_some_and(|h| h.held_by(&totals.username));
            let closed = def.criterion.is_exclusive()
                && holders.is_some_and(|h| !h.awards.is_empty());
            !already_held && !closed && def.criterion.is_met(totals)
        })
        .collect()
}

pub fn award_new(
    data: &mut AppData,
    username: &str,
    at: DateTime<Utc>,
    seq: u64,
) -> Vec<&'static str> {
    let Some(totals) = data.users.get(username) else {
        return Vec::new();
    };

    let earned = evaluate(totals, &data.badges);
    for def in &earned {
        data.badges
            .entry(def.id.to_string())
            .or_default()
            .awards
            .push(BadgeAward {
                username: username.to_string(),
                awarded_at: at,
                seq,
            });
    }
    earned.into_iter().map(|def| def.id).collect()
}

pub fn held_by(data: &AppData, username: &str) -> Vec<BadgeRef> {
    let mut held: Vec<(u64, usize, &BadgeDef)> = CATALOG
        .iter()
        .enumerate()
        .filter_map(|(position, def)| {
            let award = data
                .badges
                .get(def.id)?
                .awards
                .iter()
                .find(|award| award.username == username)?;
            Some((award.seq, position, def))
        })
        .collect();
    held.sort_by_key(|(seq, position, _)| (*seq, *position));

    held.into_iter()
        .map(|(_, _, def)| BadgeRef {
            id: def.id.to_string(),
            name: def.name.to_string(),
        })
        .collect()
}

pub fn catalog_view(data: &AppData) -> Vec<BadgeView> {
    CATALOG
        .iter()
        .map(|def| BadgeView {
            id: def.id.to_string(),
            name: def.name.to_string(),
            criteria: def.criterion.describe(),
            holders: data
                .badges
                .get(def.id)
                .map(|h| h.awards.iter().map(|a| a.username.clone()).collect())
                .unwrap_or_default(),
        })
        .collect()
}
