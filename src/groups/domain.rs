use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Application-wide role attached to a user account. Distinct from the
/// per-group [`GroupRole`] a membership carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalRole {
    Admin,
    Member,
    Anonymous,
}

impl GlobalRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Member => "Member",
            Self::Anonymous => "Anonymous",
        }
    }
}

/// Role a user holds inside one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupRole {
    Admin,
    Member,
}

impl GroupRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Group Administrator",
            Self::Member => "Group Member",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub role: GlobalRole,
}

/// A single rating one user gave to one lunch. Immutable once created,
/// removed only via an explicit delete in the calling layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub id: u64,
    pub user_id: u64,
    pub lunch_id: u64,
    pub value: f64,
    pub comment: Option<String>,
}

/// One dated lunch event recorded under a group location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lunch {
    pub id: u64,
    pub group_id: u64,
    pub location_id: u64,
    pub date: NaiveDate,
    pub chosen_by: Option<u64>,
    pub takeaway: bool,
    pub scores: Vec<Score>,
}

/// A location as adopted by one group, with the lunches recorded under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupLocation {
    pub location_id: u64,
    pub name: String,
    pub discovered_by: Option<u64>,
    pub lunches: Vec<Lunch>,
}

/// Membership of a user in a group. `scores` holds the member's ratings
/// restricted to lunches of the enclosing group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub user: User,
    pub role: GroupRole,
    pub inactive: bool,
    pub scores: Vec<Score>,
}

/// Fully joined group graph as handed over by the persistence layer. The
/// calculators assume the snapshot is internally consistent; see
/// [`GroupSnapshot::validate`] for the opt-in integrity check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub id: u64,
    pub name: String,
    pub public: bool,
    pub locations: Vec<GroupLocation>,
    pub members: Vec<Member>,
}

/// A user's rating joined to the location the lunch happened at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatedScore {
    pub score: Score,
    pub location_name: String,
}

/// One user's rating and chooser history, fetched across groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub user: User,
    pub scores: Vec<LocatedScore>,
    pub chosen_lunches: Vec<Lunch>,
}
