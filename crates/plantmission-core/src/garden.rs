//! The explicit state container.
//!
//! [`Garden`] owns the plant collection, the mission history and the ledger.
//! Every command validates before it mutates, so a rejected command leaves
//! the state exactly as it was. Commands take the reference "now" as an
//! argument; the garden never reads the clock itself.

use std::collections::BTreeSet;

use jiff::{civil::Date, Zoned};
use log::{debug, info, warn};

use crate::{
    badges::{self, Badge},
    config::GardenConfig,
    error::{GardenError, Result},
    generator::{self, Generation},
    ledger::{Completion, Ledger},
    models::{Mission, MissionFilter, MissionKind, Plant, Profile, MAX_HEALTH},
    params::AddPlant,
    schedule::{self, CareStatus},
    snapshot::{keys, LoadReport, Snapshot},
};

/// Default feeding cadence when none is given.
pub const DEFAULT_FERTILIZE_INTERVAL_DAYS: u32 = 30;

/// Everything that changed because a mission was completed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionReport {
    pub mission: Mission,
    pub completion: Completion,
    /// Badges that were locked before this completion
    pub unlocked: Vec<Badge>,
}

/// Result of watering a plant.
#[derive(Debug, Clone, PartialEq)]
pub struct WateringReport {
    pub plant: Plant,
    /// Set when an active watering mission was completed along the way
    pub completion: Option<CompletionReport>,
}

/// Single-owner state of one user's garden.
#[derive(Debug, Clone)]
pub struct Garden {
    plants: Vec<Plant>,
    missions: Vec<Mission>,
    ledger: Ledger,
    config: GardenConfig,
    history_complete: bool,
}

impl Garden {
    /// Creates an empty garden.
    pub fn new(config: GardenConfig) -> Self {
        Self {
            plants: Vec::new(),
            missions: Vec::new(),
            ledger: Ledger::default(),
            config,
            history_complete: true,
        }
    }

    /// Rebuilds a garden from a loaded snapshot.
    ///
    /// The ledger is never rewritten on load. When the mission slice was lost,
    /// or the ledger credits missions the history no longer holds, the garden
    /// treats its history as partial and skips the ledger checks in
    /// [`Garden::check_invariants`].
    pub fn from_report(report: LoadReport, config: GardenConfig, today: Date) -> Self {
        let missions_lost = report.malformed.iter().any(
            |e| matches!(e, GardenError::MalformedSnapshot { key, .. } if key == keys::MISSIONS),
        );
        let Snapshot {
            plants,
            missions,
            ledger,
        } = report.snapshot;

        let history_complete = match ledger.verify(&missions) {
            Ok(()) => !missions_lost,
            Err(e) => {
                warn!("Mission history is partial; keeping the ledger as stored ({e})");
                false
            }
        };

        let mut garden = Self {
            plants,
            missions,
            ledger,
            config,
            history_complete,
        };
        garden.refresh(today);
        garden
    }

    /// Copies the persistable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            plants: self.plants.clone(),
            missions: self.missions.clone(),
            ledger: self.ledger.clone(),
        }
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    /// Looks up a plant by id.
    pub fn plant(&self, id: u64) -> Result<&Plant> {
        self.plants
            .iter()
            .find(|p| p.id == id)
            .ok_or(GardenError::InvalidPlantReference { id })
    }

    /// Looks up a mission by id.
    pub fn mission(&self, id: u64) -> Result<&Mission> {
        self.missions
            .iter()
            .find(|m| m.id == id)
            .ok_or(GardenError::UnknownMission { id })
    }

    /// Care status of one plant at `now`.
    pub fn care(&self, id: u64, now: &Zoned) -> Result<CareStatus> {
        Ok(schedule::care_status(self.plant(id)?, now))
    }

    pub fn is_completed(&self, mission_id: u64) -> bool {
        self.ledger.completed_mission_ids.contains(&mission_id)
    }

    /// Missions passing `filter`, in generation order.
    pub fn missions_matching(&self, filter: &MissionFilter) -> Vec<&Mission> {
        self.missions
            .iter()
            .filter(|m| filter.matches(m.kind, m.plant_id, self.is_completed(m.id)))
            .collect()
    }

    /// Applies streak decay for `today`; returns true if the ledger changed.
    pub fn refresh(&mut self, today: Date) -> bool {
        self.ledger.decay(today, self.config.streak_rule)
    }

    /// Adds a plant to the collection.
    pub fn add_plant(&mut self, params: &AddPlant, now: &Zoned) -> Result<Plant> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(GardenError::invalid_input("name").with_reason("must not be empty"));
        }
        if params.watering_interval_days == 0 {
            return Err(GardenError::invalid_input("watering_interval_days")
                .with_reason("must be at least one day"));
        }
        let fertilize_interval_days = params
            .fertilize_interval_days
            .unwrap_or(DEFAULT_FERTILIZE_INTERVAL_DAYS);
        if fertilize_interval_days == 0 {
            return Err(GardenError::invalid_input("fertilize_interval_days")
                .with_reason("must be at least one day"));
        }

        let resolve = |marker: Option<&str>| match marker {
            Some(text) => schedule::parse_care_marker(text, now),
            None => Ok(now.timestamp()),
        };
        let last_watered = resolve(params.last_watered.as_deref())?;
        let last_fertilized = resolve(params.last_fertilized.as_deref())?;

        let id = self.plants.iter().map(|p| p.id).max().map_or(1, |id| id + 1);
        let plant = Plant::new(
            id,
            name,
            params.species.as_deref().unwrap_or_default().trim(),
            params.room.as_deref().unwrap_or_default().trim(),
            params.health.unwrap_or(i64::from(MAX_HEALTH)),
            last_watered,
            last_fertilized,
            params.watering_interval_days,
            fertilize_interval_days,
            now.timestamp(),
        );

        debug!("Adding plant {id} ({})", plant.name);
        self.plants.push(plant.clone());
        Ok(plant)
    }

    /// Records a watering and completes the plant's active watering mission.
    pub fn water_plant(&mut self, id: u64, now: &Zoned) -> Result<WateringReport> {
        let index = self.plant_index(id)?;

        let pending = self
            .missions
            .iter()
            .find(|m| {
                m.plant_id == Some(id)
                    && m.kind == MissionKind::Watering
                    && !self.is_completed(m.id)
            })
            .map(|m| m.id);

        let completion = match pending {
            Some(mission_id) => Some(self.complete_mission(mission_id, now)?),
            None => {
                self.record_watering(index, now);
                None
            }
        };

        Ok(WateringReport {
            plant: self.plants[index].clone(),
            completion,
        })
    }

    /// Records a feeding.
    pub fn fertilize_plant(&mut self, id: u64, now: &Zoned) -> Result<Plant> {
        let index = self.plant_index(id)?;
        let plant = &mut self.plants[index];
        plant.last_fertilized = now.timestamp();
        debug!("Fertilized plant {id}");
        Ok(plant.clone())
    }

    /// Writes a plant's health, clamped into range.
    pub fn update_health(&mut self, id: u64, health: i64) -> Result<Plant> {
        let index = self.plant_index(id)?;
        let plant = &mut self.plants[index];
        plant.set_health(health);
        debug!("Plant {id} health is now {}", plant.health());
        Ok(plant.clone())
    }

    /// Sets or clears the manual urgency flag.
    pub fn set_urgent(&mut self, id: u64, urgent: bool) -> Result<Plant> {
        let index = self.plant_index(id)?;
        let plant = &mut self.plants[index];
        plant.urgent_override = urgent;
        Ok(plant.clone())
    }

    /// Runs the generator and appends its missions to the history.
    pub fn generate_missions(&mut self, now: &Zoned) -> Generation {
        self.refresh(now.date());
        let generation = generator::generate(
            &self.plants,
            &self.missions,
            &self.ledger.completed_mission_ids,
            now,
            &self.config.policy,
        );
        self.missions.extend(generation.missions.iter().cloned());
        generation
    }

    /// Completes a mission and reports newly unlocked badges.
    ///
    /// Completing a watering mission also records the watering on its plant.
    pub fn complete_mission(&mut self, mission_id: u64, now: &Zoned) -> Result<CompletionReport> {
        let today = now.date();
        self.refresh(today);

        let mission = self.mission(mission_id)?.clone();
        let before = self.unlocked_badges();

        let completion = self.ledger.complete(
            &self.missions,
            mission_id,
            mission.points,
            today,
            self.config.streak_rule,
        )?;

        // A completed watering mission means the plant was watered.
        if mission.kind == MissionKind::Watering {
            if let Some(index) = mission
                .plant_id
                .and_then(|id| self.plants.iter().position(|p| p.id == id))
            {
                self.record_watering(index, now);
            }
        }

        let unlocked: Vec<Badge> = self
            .badges()
            .into_iter()
            .filter(|badge| badge.unlocked && !before.contains(badge.id))
            .collect();
        for badge in &unlocked {
            info!("Badge unlocked: {}", badge.name);
        }

        Ok(CompletionReport {
            mission,
            completion,
            unlocked,
        })
    }

    /// Ids of the badges unlocked by the current state.
    pub fn unlocked_badges(&self) -> BTreeSet<&'static str> {
        badges::evaluate(&self.ledger, &self.plants)
    }

    /// Every badge with its current unlock state.
    pub fn badges(&self) -> Vec<Badge> {
        badges::badges(&self.ledger, &self.plants)
    }

    /// Overview of the collection and the ledger at `now`.
    pub fn profile(&self, now: &Zoned) -> Profile {
        let completed_missions = self.ledger.completed_count();
        Profile {
            level: self.ledger.level(),
            total_points: self.ledger.total_points,
            current_streak: self.ledger.current_streak,
            best_streak: self.ledger.best_streak,
            plant_count: self.plants.len(),
            urgent_plants: self
                .plants
                .iter()
                .filter(|p| schedule::care_status(p, now).urgent)
                .count(),
            active_missions: self
                .missions
                .iter()
                .filter(|m| !self.is_completed(m.id))
                .count(),
            completed_missions,
            generated_missions: self.missions.len().max(completed_missions),
            plants_watered: self
                .missions
                .iter()
                .filter(|m| m.kind == MissionKind::Watering && self.is_completed(m.id))
                .count(),
            badges_unlocked: self.unlocked_badges().len(),
        }
    }

    /// Verifies the cross-field invariants.
    ///
    /// Ledger checks are skipped when the mission history was lost on load.
    pub fn check_invariants(&self) -> Result<()> {
        if let Some(plant) = self.plants.iter().find(|p| p.health() > MAX_HEALTH) {
            return Err(GardenError::invariant(format!(
                "plant {} health {} out of range",
                plant.id,
                plant.health()
            )));
        }

        if self.history_complete {
            self.ledger.verify(&self.missions)?;
        }

        let mut pending = BTreeSet::new();
        for mission in self.missions.iter().filter(|m| !self.is_completed(m.id)) {
            if mission.plant_id.is_some() && !pending.insert(mission.obligation()) {
                return Err(GardenError::invariant(format!(
                    "duplicate active {} mission for plant {:?}",
                    mission.kind.as_str(),
                    mission.plant_id
                )));
            }
        }
        Ok(())
    }

    fn record_watering(&mut self, index: usize, now: &Zoned) {
        let plant = &mut self.plants[index];
        plant.last_watered = now.timestamp();
        plant.urgent_override = false;
        debug!("Watered plant {}", plant.id);
    }

    fn plant_index(&self, id: u64) -> Result<usize> {
        self.plants
            .iter()
            .position(|p| p.id == id)
            .ok_or(GardenError::InvalidPlantReference { id })
    }
}
