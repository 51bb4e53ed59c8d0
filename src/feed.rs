use crate::models::{Activity, AppData};

pub fn recent(data: &AppData, limit: usize) -> Vec<Activity> {
    data.activities.iter().rev().take(limit).cloned().collect()
}
