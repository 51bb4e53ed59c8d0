use crate::models::{AppData, LeaderboardEntry, UserTotals};
use std::cmp::Ordering;

/// Ranks every user by points. Ties go to whoever reached the total first,
/// then to the lexically smaller username.
pub fn rank(data: &AppData) -> Vec<LeaderboardEntry> {
    let mut users: Vec<&UserTotals> = data.users.values().collect();
    users.sort_by(|a, b| compare(a, b));
    users
        .into_iter()
        .map(|totals| LeaderboardEntry {
            username: totals.username.clone(),
            points: totals.total_points,
        })
        .collect()
}

pub fn top(data: &AppData, limit: usize) -> Vec<LeaderboardEntry> {
    let mut ranked = rank(data);
    ranked.truncate(limit);
    ranked
}

fn compare(a: &UserTotals, b: &UserTotals) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then(a.reached_seq.cmp(&b.reached_seq))
        .then_with(|| a.username.cmp(&b.username))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TypeCounts;

    fn add_user(data: &mut AppData, username: &str, points: u64, reached_seq: u64) {
        data.users.insert(
            username.to_string(),
            UserTotals {
                username: username.to_string(),
                total_points: points,
                activities_logged: 1,
                type_counts: TypeCounts::default(),
                reached_seq,
            },
        );
    }

    fn names(entries: &[LeaderboardEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.username.as_str()).collect()
    }

    #[test]
    fn orders_by_points_descending() {
        let mut data = AppData::default();
        add_user(&mut data, "ana", 40, 1);
        add_user(&mut data, "ben", 90, 2);
        add_user(&mut data, "cy", 10, 3);

        let ranked = rank(&data);
        assert_eq!(names(&ranked), vec!["ben", "ana", "cy"]);
        assert_eq!(ranked[0].points, 90);
    }

    #[test]
    fn ties_go_to_earliest_reached_total() {
        let mut data = AppData::default();
        add_user(&mut data, "zed", 50, 2);
        add_user(&mut data, "amy", 50, 7);
        add_user(&mut data, "bob", 50, 7);

        assert_eq!(names(&rank(&data)), vec!["zed", "amy", "bob"]);
    }

    #[test]
    fn ranking_is_stable_across_calls() {
        let mut data = AppData::default();
        for (i, name) in ["d", "c", "b", "a"].iter().enumerate() {
            add_user(&mut data, name, 20, i as u64);
        }
        assert_eq!(rank(&data), rank(&data));
    }

    #[test]
    fn empty_store_has_empty_leaderboard() {
        assert!(rank(&AppData::default()).is_empty());
        assert!(top(&AppData::default(), 5).is_empty());
    }

    #[test]
    fn top_truncates() {
        let mut data = AppData::default();
        add_user(&mut data, "ana", 40, 1);
        add_user(&mut data, "ben", 90, 2);
        assert_eq!(names(&top(&data, 1)), vec!["ben"]);
    }
}
