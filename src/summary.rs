use crate::badges;
use crate::errors::EcoError;
use crate::models::{AppData, BadgeRef, Summary};

/// Unknown users get a zero summary.
pub fn summarize(data: &AppData, username: &str) -> Result<Summary, EcoError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(EcoError::invalid("username is required"));
    }

    let (total_points, activities_logged) = data
        .users
        .get(username)
        .map(|totals| (totals.total_points, totals.activities_logged))
        .unwrap_or_default();
    let badges = badges::held_by(data, username);
    let share_text = share_text(activities_logged, total_points, &badges);

    Ok(Summary {
        username: username.to_string(),
        total_points,
        activities_logged,
        badges,
        share_text,
    })
}

pub fn share_text(activities: u64, points: u64, badges: &[BadgeRef]) -> String {
    let mut text = format!("I logged {activities} eco actions and earned {points} points! 🌱");
    if !badges.is_empty() {
        let names: Vec<&str> = badges.iter().map(|b| b.name.as_str()).collect();
        text.push_str(&format!(" Badges: {}.", names.join(", ")));
    }
    text
}
