//! Statistics derived from the score graph.
//!
//! Two distinct averaging shapes exist on purpose: the group-wide average is
//! a flat mean over every score, while location ranking averages each lunch
//! first and then averages those per-lunch means. Collapsing the two into
//! one helper changes the numbers.

pub mod group;
pub mod score;
pub mod user;
pub mod views;

pub use group::group_stats;
pub use user::user_stats;
pub use views::{ChosenLunch, GroupStats, LocationAverage, MemberAverage, UserStats};
