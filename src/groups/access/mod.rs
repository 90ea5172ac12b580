//! Per-request permission resolution.
//!
//! Nothing here is persisted or cached: membership can change between
//! requests, so the capability set is recomputed from the identity and the
//! group snapshot on every call.

use super::domain::{GlobalRole, GroupRole, GroupSnapshot, User};
use serde::Serialize;
use tracing::trace;

/// How a requester relates to a group. Resolution runs in priority order:
/// a global administrator outranks any membership, and an inactive
/// membership counts as none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    GlobalAdmin,
    GroupAdmin,
    GroupMember,
    NonMember,
}

impl AccessLevel {
    pub fn resolve(requester: Option<&User>, group: &GroupSnapshot) -> Self {
        let Some(user) = requester else {
            return Self::NonMember;
        };
        if user.role == GlobalRole::Admin {
            return Self::GlobalAdmin;
        }

        let membership = group
            .members
            .iter()
            .find(|member| member.user.id == user.id && !member.inactive);
        match membership.map(|member| member.role) {
            Some(GroupRole::Admin) => Self::GroupAdmin,
            Some(GroupRole::Member) => Self::GroupMember,
            None => Self::NonMember,
        }
    }

    /// Capability table for this level. `public_group` only matters for
    /// non-members, who may view a public group and nothing more.
    pub fn capabilities(self, public_group: bool) -> Permissions {
        match self {
            Self::GlobalAdmin => Permissions::all(),
            Self::GroupAdmin => Permissions::group_admin(),
            Self::GroupMember => Permissions::member(),
            Self::NonMember => Permissions::visitor(public_group),
        }
    }
}

/// Flat capability record the calling layer branches UI and mutation
/// handling on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Permissions {
    pub view: bool,
    pub invite: bool,
    pub add_lunch: bool,
    pub add_location: bool,
    pub add_score: bool,
    pub delete_lunch: bool,
    pub delete_all_scores: bool,
    pub delete_score_request: bool,
    pub settings: bool,
    pub leave: bool,
    pub recommendations: bool,
}

impl Permissions {
    pub fn none() -> Self {
        Self {
            view: false,
            invite: false,
            add_lunch: false,
            add_location: false,
            add_score: false,
            delete_lunch: false,
            delete_all_scores: false,
            delete_score_request: false,
            settings: false,
            leave: false,
            recommendations: false,
        }
    }

    pub fn all() -> Self {
        Self {
            view: true,
            invite: true,
            add_lunch: true,
            add_location: true,
            add_score: true,
            delete_lunch: true,
            delete_all_scores: true,
            delete_score_request: true,
            settings: true,
            leave: true,
            recommendations: true,
        }
    }

    /// Baseline of an active plain member.
    fn member() -> Self {
        Self {
            view: true,
            add_lunch: true,
            add_location: true,
            add_score: true,
            delete_score_request: true,
            leave: true,
            recommendations: true,
            ..Self::none()
        }
    }

    /// Member baseline plus the four group-administration capabilities.
    fn group_admin() -> Self {
        Self {
            invite: true,
            delete_lunch: true,
            delete_all_scores: true,
            settings: true,
            ..Self::member()
        }
    }

    fn visitor(public_group: bool) -> Self {
        Self {
            view: public_group,
            ..Self::none()
        }
    }
}

/// Compute what `requester` may do in `group`. `None` is an unauthenticated
/// (anonymous) requester.
pub fn resolve_permissions(requester: Option<&User>, group: &GroupSnapshot) -> Permissions {
    let level = AccessLevel::resolve(requester, group);
    trace!(group_id = group.id, ?level, "resolved access level");
    level.capabilities(group.public)
}
