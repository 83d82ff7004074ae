//! Plant model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Upper bound of the health scale.
pub const MAX_HEALTH: u8 = 100;

/// A houseplant in the user's collection.
///
/// Only the source facts live here. The next watering/fertilizing dates and
/// the urgency flag are projections computed by [`crate::schedule`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    /// Unique identifier for the plant
    pub id: u64,

    /// Display name given by the user
    pub name: String,

    /// Botanical or common species name
    #[serde(default)]
    pub species: String,

    /// Room the plant lives in
    #[serde(default)]
    pub room: String,

    /// Health score, always within `0..=100`
    health: u8,

    /// Last time the plant was watered (UTC)
    pub last_watered: Timestamp,

    /// Last time the plant was fertilized (UTC)
    pub last_fertilized: Timestamp,

    /// Days between waterings
    pub watering_interval_days: u32,

    /// Days between feedings
    pub fertilize_interval_days: u32,

    /// Manual urgency flag set by the user
    #[serde(default)]
    pub urgent_override: bool,

    /// Timestamp when the plant was added (UTC)
    pub created_at: Timestamp,
}

impl Plant {
    /// Creates a plant with the given health clamped into range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        species: impl Into<String>,
        room: impl Into<String>,
        health: i64,
        last_watered: Timestamp,
        last_fertilized: Timestamp,
        watering_interval_days: u32,
        fertilize_interval_days: u32,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            species: species.into(),
            room: room.into(),
            health: clamp_health(health),
            last_watered,
            last_fertilized,
            watering_interval_days,
            fertilize_interval_days,
            urgent_override: false,
            created_at,
        }
    }

    /// Current health score.
    pub fn health(&self) -> u8 {
        self.health
    }

    /// Writes a new health score, clamping it into `0..=100`.
    pub fn set_health(&mut self, health: i64) {
        self.health = clamp_health(health);
    }

    /// Re-applies the health clamp, used after deserializing foreign data.
    pub(crate) fn normalize(&mut self) {
        self.health = self.health.min(MAX_HEALTH);
    }
}

fn clamp_health(health: i64) -> u8 {
    // The clamp guarantees the value fits.
    health.clamp(0, i64::from(MAX_HEALTH)) as u8
}
