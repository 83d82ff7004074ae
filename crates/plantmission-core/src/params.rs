//! Parameter structures for garden operations
//!
//! These structures carry user input from any interface (the CLI today) into
//! the core without framework-specific derives. Interface layers define their
//! own argument types and convert them with `From` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde only)    │
//! └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::models::MissionKind;

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_plant, water_plant, fertilize_plant and complete_mission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for adding a plant to the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlant {
    /// Display name (required)
    pub name: String,
    /// Species, free text
    pub species: Option<String>,
    /// Room the plant lives in
    pub room: Option<String>,
    /// Initial health, clamped into 0..=100 (defaults to 100)
    pub health: Option<i64>,
    /// Last watering: "today", "yesterday", "N days ago" or a date
    pub last_watered: Option<String>,
    /// Last feeding, same formats as `last_watered`
    pub last_fertilized: Option<String>,
    /// Days between waterings
    pub watering_interval_days: u32,
    /// Days between feedings (defaults to 30)
    pub fertilize_interval_days: Option<u32>,
}

impl Default for AddPlant {
    fn default() -> Self {
        Self {
            name: String::new(),
            species: None,
            room: None,
            health: None,
            last_watered: None,
            last_fertilized: None,
            watering_interval_days: 7,
            fertilize_interval_days: None,
        }
    }
}

/// Parameters for writing a plant's health score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHealth {
    /// The ID of the plant
    pub id: u64,
    /// New health value; out-of-range values are clamped
    pub health: i64,
}

/// Parameters for the manual urgency flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetUrgent {
    /// The ID of the plant
    pub id: u64,
    /// Whether the plant should be treated as urgent
    pub urgent: bool,
}

/// Parameters for listing missions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMissions {
    /// Show completed missions instead of active ones
    pub completed: bool,
    /// Show every mission regardless of state
    pub all: bool,
    /// Restrict to one mission kind
    pub kind: Option<MissionKind>,
    /// Restrict to one plant
    pub plant_id: Option<u64>,
}
