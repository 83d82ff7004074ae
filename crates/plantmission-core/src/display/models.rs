//! Display implementations for domain models.
//!
//! Plants and missions are shown through cards that pair the stored record
//! with values derived at a given moment, so the records themselves never
//! carry computed fields.

use std::fmt;

use jiff::{tz::TimeZone, SignedDuration, Timestamp, Zoned};

use super::datetime::{LocalDateTime, TimeLeft};
use crate::{
    badges::Badge,
    models::{Difficulty, Mission, MissionKind, Plant, Profile, MAX_HEALTH},
    schedule::{care_status, CareStatus},
};

impl fmt::Display for MissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A plant together with its care status at one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantCard {
    pub plant: Plant,
    pub status: CareStatus,
    pub zone: TimeZone,
}

impl PlantCard {
    /// Computes the card as seen from `now`.
    pub fn at(plant: Plant, now: &Zoned) -> Self {
        let status = care_status(&plant, now);
        Self {
            plant,
            status,
            zone: now.time_zone().clone(),
        }
    }
}

impl fmt::Display for PlantCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plant = &self.plant;
        let flag = if self.status.urgent { " (urgent)" } else { "" };

        writeln!(f, "## {}. {}{flag}", plant.id, plant.name)?;
        writeln!(f)?;
        if !plant.species.is_empty() {
            writeln!(f, "- **Species**: {}", plant.species)?;
        }
        if !plant.room.is_empty() {
            writeln!(f, "- **Room**: {}", plant.room)?;
        }
        writeln!(f, "- **Health**: {}/{MAX_HEALTH}", plant.health())?;
        writeln!(
            f,
            "- **Water**: {} (next {}, every {} days)",
            self.status.water_due, self.status.next_water, plant.watering_interval_days
        )?;
        writeln!(
            f,
            "- **Fertilize**: {} (next {}, every {} days)",
            self.status.fertilize_due, self.status.next_fertilize, plant.fertilize_interval_days
        )?;
        writeln!(
            f,
            "- **Last watered**: {}",
            LocalDateTime(&plant.last_watered, &self.zone)
        )?;
        if plant.urgent_override {
            writeln!(f, "- Flagged for attention")?;
        }
        writeln!(f)
    }
}

/// A mission together with its completion state and remaining validity.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionCard {
    pub mission: Mission,
    pub completed: bool,
    pub remaining: SignedDuration,
}

impl MissionCard {
    pub fn new(mission: Mission, completed: bool, now: Timestamp) -> Self {
        let remaining = mission.remaining(now);
        Self {
            mission,
            completed,
            remaining,
        }
    }
}

impl fmt::Display for MissionCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mission = &self.mission;
        writeln!(
            f,
            "### {}. {} ({}, {}, {} pts)",
            mission.id, mission.title, mission.kind, mission.difficulty, mission.points
        )?;
        writeln!(f)?;
        writeln!(f, "{}", mission.description)?;
        writeln!(f)?;

        if self.completed {
            writeln!(f, "- Completed")?;
        } else {
            writeln!(f, "- {}", TimeLeft(self.remaining))?;
            if mission.urgent {
                writeln!(f, "- **Urgent**")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plant Parent Level {}", self.level)?;
        writeln!(f)?;
        writeln!(f, "- **Points**: {}", self.total_points)?;
        writeln!(
            f,
            "- **Streak**: {} (best {})",
            days(self.current_streak),
            days(self.best_streak)
        )?;
        writeln!(f, "- **Week progress**: {}%", self.week_progress())?;
        writeln!(
            f,
            "- **Plants**: {} ({} need water)",
            self.plant_count, self.urgent_plants
        )?;
        writeln!(
            f,
            "- **Missions**: {} active, {} completed",
            self.active_missions, self.completed_missions
        )?;
        writeln!(f, "- **Plants watered**: {}", self.plants_watered)?;
        writeln!(
            f,
            "- **Success rate**: {:.0}%",
            self.success_rate() * 100.0
        )?;
        writeln!(f, "- **Badges**: {} unlocked", self.badges_unlocked)
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.unlocked { "x" } else { " " };
        writeln!(f, "- [{mark}] **{}**: {}", self.name, self.description)
    }
}

fn days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}
