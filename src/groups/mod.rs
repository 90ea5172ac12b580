//! Group, member, and score domain with the derivations computed from it.

pub mod access;
pub mod domain;
pub mod snapshot;
pub mod stats;

#[cfg(test)]
mod tests;

pub use access::{resolve_permissions, AccessLevel, Permissions};
pub use domain::{
    GlobalRole, GroupLocation, GroupRole, GroupSnapshot, LocatedScore, Lunch, Member, Score,
    User, UserSnapshot,
};
pub use snapshot::SnapshotError;
pub use stats::{
    group_stats, user_stats, ChosenLunch, GroupStats, LocationAverage, MemberAverage, UserStats,
};
