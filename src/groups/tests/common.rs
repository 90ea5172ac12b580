use chrono::NaiveDate;

use crate::groups::domain::{
    GlobalRole, GroupLocation, GroupRole, GroupSnapshot, LocatedScore, Lunch, Member, Score,
    User, UserSnapshot,
};

pub(super) fn score(id: u64, user_id: u64, lunch_id: u64, value: f64) -> Score {
    Score {
        id,
        user_id,
        lunch_id,
        value,
        comment: None,
    }
}

pub(super) fn lunch(id: u64, location_id: u64, values: &[f64]) -> Lunch {
    Lunch {
        id,
        group_id: 1,
        location_id,
        date: NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date"),
        chosen_by: None,
        takeaway: false,
        scores: values
            .iter()
            .enumerate()
            .map(|(index, value)| score(id * 100 + index as u64, 50 + index as u64, id, *value))
            .collect(),
    }
}

pub(super) fn location(location_id: u64, name: &str, lunches: Vec<Lunch>) -> GroupLocation {
    GroupLocation {
        location_id,
        name: name.to_string(),
        discovered_by: None,
        lunches,
    }
}

pub(super) fn user(id: u64, name: &str, role: GlobalRole) -> User {
    User {
        id,
        name: name.to_string(),
        role,
    }
}

pub(super) fn member(
    user_id: u64,
    name: &str,
    role: GroupRole,
    scored: &[(u64, f64)],
) -> Member {
    Member {
        user: user(user_id, name, GlobalRole::Member),
        role,
        inactive: false,
        scores: scored
            .iter()
            .enumerate()
            .map(|(index, (lunch_id, value))| {
                score(user_id * 1000 + index as u64, user_id, *lunch_id, *value)
            })
            .collect(),
    }
}

pub(super) fn group(locations: Vec<GroupLocation>, members: Vec<Member>) -> GroupSnapshot {
    GroupSnapshot {
        id: 1,
        name: "Lunch crew".to_string(),
        public: true,
        locations,
        members,
    }
}

pub(super) fn located(value: f64, location_name: &str) -> LocatedScore {
    LocatedScore {
        score: score(0, 7, 1, value),
        location_name: location_name.to_string(),
    }
}

pub(super) fn user_snapshot(scores: Vec<LocatedScore>, chosen_lunches: Vec<Lunch>) -> UserSnapshot {
    UserSnapshot {
        user: user(7, "Frida", GlobalRole::Member),
        scores,
        chosen_lunches,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
