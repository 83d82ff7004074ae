//! Mission model.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use super::status::{Difficulty, MissionKind};

/// A discrete, rewarded care task generated from a plant's schedule.
///
/// Missions are immutable once generated. Completion is tracked by the
/// ledger, not by a flag on the mission itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    /// Unique identifier for the mission
    pub id: u64,

    /// Plant this mission targets, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_id: Option<u64>,

    /// What kind of care the mission asks for
    #[serde(rename = "type")]
    pub kind: MissionKind,

    /// Short title
    pub title: String,

    /// What to do and why
    pub description: String,

    /// How demanding the task is
    pub difficulty: Difficulty,

    /// Reward credited on completion
    pub points: u32,

    /// How long the mission stays valid after generation
    pub time_left: SignedDuration,

    /// Whether the mission addresses an urgent obligation
    pub urgent: bool,

    /// Timestamp when the mission was generated (UTC)
    pub created_at: Timestamp,
}

impl Mission {
    /// Instant at which the mission's validity window closes.
    pub fn deadline(&self) -> Timestamp {
        self.created_at
            .checked_add(self.time_left)
            .unwrap_or(Timestamp::MAX)
    }

    /// Remaining validity at `now`; negative once the window has closed.
    pub fn remaining(&self, now: Timestamp) -> SignedDuration {
        self.deadline().duration_since(now)
    }

    /// Returns true once the validity window has closed.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        !self.remaining(now).is_positive()
    }

    /// The `(plant, kind)` obligation this mission answers.
    pub fn obligation(&self) -> (Option<u64>, MissionKind) {
        (self.plant_id, self.kind)
    }
}
