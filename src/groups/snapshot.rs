//! Opt-in integrity check for snapshots handed over by the persistence
//! layer. The calculators never re-check: a malformed graph is a bug in the
//! query that built it, not a runtime condition they recover from.

use super::domain::{GroupSnapshot, Score};
use super::stats::score::{SCORE_MAX, SCORE_MIN, SCORE_STEP};
use std::collections::HashSet;

/// Contract violation in a group snapshot.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SnapshotError {
    #[error("score {score_id} references lunch {lunch_id} outside the group snapshot")]
    DanglingScore { score_id: u64, lunch_id: u64 },
    #[error("score {score_id} has value {value} outside the 0-10 quarter-step domain")]
    InvalidValue { score_id: u64, value: f64 },
}

impl GroupSnapshot {
    /// Checks that every member score points at a lunch present in this
    /// group and that every value lies on the 0-10 quarter-point scale.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let lunch_ids: HashSet<u64> = self
            .locations
            .iter()
            .flat_map(|location| location.lunches.iter())
            .map(|lunch| lunch.id)
            .collect();

        for location in &self.locations {
            for lunch in &location.lunches {
                for score in &lunch.scores {
                    check_value(score)?;
                }
            }
        }

        for member in &self.members {
            for score in &member.scores {
                check_value(score)?;
                if !lunch_ids.contains(&score.lunch_id) {
                    return Err(SnapshotError::DanglingScore {
                        score_id: score.id,
                        lunch_id: score.lunch_id,
                    });
                }
            }
        }

        Ok(())
    }
}

fn check_value(score: &Score) -> Result<(), SnapshotError> {
    // Quarter steps are exact in binary, so the fract test is reliable.
    let on_step = (score.value / SCORE_STEP).fract() == 0.0;
    if score.value < SCORE_MIN || score.value > SCORE_MAX || !on_step {
        return Err(SnapshotError::InvalidValue {
            score_id: score.id,
            value: score.value,
        });
    }
    Ok(())
}
