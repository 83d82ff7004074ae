//! Result wrapper types for displaying command outcomes.
//!
//! These format the outcome of mutating commands with a confirmation line
//! followed by the affected resource.

use std::fmt;

use super::models::{MissionCard, PlantCard};
use crate::{garden::CompletionReport, generator::Generation};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::{tz::TimeZone, Zoned};
/// use plantmission_core::{
///     display::{CreateResult, PlantCard},
///     models::Plant,
/// };
///
/// let now = Zoned::now().with_time_zone(TimeZone::UTC);
/// let plant = Plant::new(
///     1,
///     "Monstera",
///     "Monstera deliciosa",
///     "Office",
///     100,
///     now.timestamp(),
///     now.timestamp(),
///     7,
///     30,
///     now.timestamp(),
/// );
///
/// let output = CreateResult::new(PlantCard::at(plant, &now)).to_string();
/// assert!(output.starts_with("Added plant with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<PlantCard> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added plant with ID: {}", self.resource.plant.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
pub struct UpdateResult<T> {
    pub resource: T,
    pub change: String,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T, change: impl Into<String>) -> Self {
        Self {
            resource,
            change: change.into(),
        }
    }
}

impl fmt::Display for UpdateResult<PlantCard> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.change)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// A completed mission with its reward and any newly unlocked badges.
pub struct CompletionResult(pub CompletionReport);

impl fmt::Display for CompletionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = &self.0;
        writeln!(
            f,
            "Completed mission {}: {} (+{} pts)",
            report.mission.id, report.mission.title, report.completion.points
        )?;
        writeln!(f)?;
        writeln!(f, "- **Total points**: {}", report.completion.total_points)?;
        writeln!(f, "- **Streak**: {}", report.completion.current_streak)?;

        if !report.unlocked.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Badges unlocked")?;
            writeln!(f)?;
            for badge in &report.unlocked {
                write!(f, "{badge}")?;
            }
        }
        Ok(())
    }
}

/// A watering, optionally with the mission it completed.
pub struct WateringResult {
    pub plant: PlantCard,
    pub completion: Option<CompletionResult>,
}

impl fmt::Display for WateringResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Watered {}", self.plant.plant.name)?;
        writeln!(f)?;
        write!(f, "{}", self.plant)?;
        if let Some(completion) = &self.completion {
            write!(f, "{completion}")?;
        }
        Ok(())
    }
}

/// The missions produced by one generation pass.
pub struct GenerationResult {
    pub missions: Vec<MissionCard>,
    pub skipped: Vec<u64>,
}

impl GenerationResult {
    /// Wraps a generation, treating every new mission as fresh at creation.
    pub fn new(generation: Generation) -> Self {
        let missions = generation
            .missions
            .into_iter()
            .map(|mission| {
                let created_at = mission.created_at;
                MissionCard::new(mission, false, created_at)
            })
            .collect();
        Self {
            missions,
            skipped: generation.skipped,
        }
    }
}

impl fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missions.is_empty() {
            writeln!(f, "No new missions. Your plants are happy.")?;
        } else {
            writeln!(f, "Generated {} new mission(s)", self.missions.len())?;
            writeln!(f)?;
            for mission in &self.missions {
                write!(f, "{mission}")?;
            }
        }

        if !self.skipped.is_empty() {
            let ids: Vec<String> = self.skipped.iter().map(u64::to_string).collect();
            writeln!(f)?;
            writeln!(f, "Skipped missions for missing plant(s): {}", ids.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};

    use super::*;
    use crate::{
        badges::Badge,
        ledger::Completion,
        models::{Difficulty, Mission, MissionKind},
    };

    fn mission() -> Mission {
        Mission {
            id: 4,
            plant_id: Some(2),
            kind: MissionKind::Watering,
            title: "Water Pothos".to_string(),
            description: "Pothos needs water today.".to_string(),
            difficulty: Difficulty::Easy,
            points: 10,
            time_left: SignedDuration::from_hours(12),
            urgent: true,
            created_at: Timestamp::from_second(1_718_000_000).unwrap(),
        }
    }

    #[test]
    fn test_completion_result_lists_unlocked_badges() {
        let report = CompletionReport {
            mission: mission(),
            completion: Completion {
                mission_id: 4,
                points: 10,
                total_points: 10,
                current_streak: 1,
            },
            unlocked: vec![Badge {
                id: "first-sprout",
                name: "First Sprout",
                description: "Complete your first mission",
                unlocked: true,
            }],
        };

        let output = CompletionResult(report).to_string();
        assert!(output.starts_with("Completed mission 4: Water Pothos (+10 pts)"));
        assert!(output.contains("## Badges unlocked"));
        assert!(output.contains("First Sprout"));
    }

    #[test]
    fn test_generation_result() {
        let empty = GenerationResult::new(Generation::default());
        assert!(empty.to_string().contains("No new missions"));

        let generation = Generation {
            missions: vec![mission()],
            skipped: vec![9],
        };
        let output = GenerationResult::new(generation).to_string();
        assert!(output.contains("Generated 1 new mission(s)"));
        assert!(output.contains("12h 0m left"));
        assert!(output.contains("missing plant(s): 9"));
    }
}
