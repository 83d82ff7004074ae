//! Mission generation policy.
//!
//! [`generate`] turns the current plant collection into new missions:
//!
//! 1. every urgent plant gets a watering mission,
//! 2. every plant is periodically asked for an inspection and a pruning,
//! 3. nothing is emitted for a `(plant, kind)` pair that already has an
//!    active (non-completed) mission.
//!
//! Rule 3 makes generation idempotent: once a batch has been appended to the
//! mission list, generating again from the same state yields nothing.

use std::collections::{BTreeSet, HashSet};

use jiff::{SignedDuration, Zoned};
use log::{debug, error, warn};

use crate::{
    config::MissionPolicy,
    error::GardenError,
    models::{Difficulty, Mission, MissionKind, Plant},
    schedule::{care_status, Due},
};

/// Output of one generation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
    /// Newly created missions, in plant order
    pub missions: Vec<Mission>,
    /// Plant ids referenced by active missions that no longer resolve
    pub skipped: Vec<u64>,
}

impl Generation {
    /// Returns true when the pass produced no missions.
    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }
}

/// Identifier the next generated mission receives.
///
/// Ids recorded in the ledger are never reused, even when the mission
/// history that produced them was lost.
pub fn next_mission_id(missions: &[Mission], completed: &BTreeSet<u64>) -> u64 {
    missions
        .iter()
        .map(|m| m.id)
        .chain(completed.iter().next_back().copied())
        .max()
        .map_or(1, |id| id + 1)
}

/// Produces the missions owed by `plants` at `now`.
///
/// `missions` is the full mission history and `completed` the ledger's
/// completed-id set; together they decide which obligations are already
/// pending.
pub fn generate(
    plants: &[Plant],
    missions: &[Mission],
    completed: &BTreeSet<u64>,
    now: &Zoned,
    policy: &MissionPolicy,
) -> Generation {
    let mut active: HashSet<(Option<u64>, MissionKind)> = missions
        .iter()
        .filter(|m| !completed.contains(&m.id))
        .map(Mission::obligation)
        .collect();

    let skipped = dangling_references(plants, missions, completed);

    let mut candidates = Vec::new();
    for plant in plants {
        let status = care_status(plant, now);

        if status.urgent && !active.contains(&(Some(plant.id), MissionKind::Watering)) {
            candidates.push(watering_mission(plant, status.water_due, now, policy));
        }

        for (kind, interval_days) in [
            (MissionKind::Inspection, policy.inspection_interval_days),
            (MissionKind::Pruning, policy.pruning_interval_days),
        ] {
            if interval_days == 0 || active.contains(&(Some(plant.id), kind)) {
                continue;
            }
            if had_recent(missions, plant.id, kind, interval_days, now) {
                continue;
            }
            candidates.push(periodic_mission(plant, kind, now, policy));
        }
    }

    let mut next_id = next_mission_id(missions, completed);
    let mut batch = Vec::with_capacity(candidates.len());
    for mut mission in candidates {
        if !active.insert(mission.obligation()) {
            let violation = GardenError::invariant(format!(
                "duplicate active {} mission for plant {:?}",
                mission.kind.as_str(),
                mission.plant_id
            ));
            if cfg!(debug_assertions) {
                panic!("{violation}");
            }
            error!("{violation}; dropping mission");
            continue;
        }
        mission.id = next_id;
        next_id += 1;
        batch.push(mission);
    }

    debug!(
        "Generated {} mission(s) for {} plant(s)",
        batch.len(),
        plants.len()
    );

    Generation {
        missions: batch,
        skipped,
    }
}

fn dangling_references(
    plants: &[Plant],
    missions: &[Mission],
    completed: &BTreeSet<u64>,
) -> Vec<u64> {
    let known: HashSet<u64> = plants.iter().map(|p| p.id).collect();
    let mut skipped = BTreeSet::new();
    for mission in missions.iter().filter(|m| !completed.contains(&m.id)) {
        if let Some(plant_id) = mission.plant_id {
            if !known.contains(&plant_id) && skipped.insert(plant_id) {
                warn!(
                    "Mission {} references missing plant {plant_id}; skipping",
                    mission.id
                );
            }
        }
    }
    skipped.into_iter().collect()
}

fn had_recent(
    missions: &[Mission],
    plant_id: u64,
    kind: MissionKind,
    interval_days: u32,
    now: &Zoned,
) -> bool {
    let window = SignedDuration::from_hours(i64::from(interval_days) * 24);
    missions.iter().any(|m| {
        m.plant_id == Some(plant_id)
            && m.kind == kind
            && now.timestamp().duration_since(m.created_at) < window
    })
}

fn watering_mission(plant: &Plant, due: Due, now: &Zoned, policy: &MissionPolicy) -> Mission {
    let description = match due {
        Due::Overdue { days: 1 } => format!("{} is a day overdue for water.", plant.name),
        Due::Overdue { days } => format!("{} is {days} days overdue for water.", plant.name),
        Due::Today => format!("{} needs water today.", plant.name),
        Due::InDays(_) => format!("{} was flagged for attention.", plant.name),
    };

    Mission {
        id: 0,
        plant_id: Some(plant.id),
        kind: MissionKind::Watering,
        title: format!("Water {}", plant.name),
        description,
        difficulty: Difficulty::Easy,
        points: policy.watering_reward(due.days_overdue()),
        time_left: SignedDuration::from_hours(i64::from(policy.watering_window_hours)),
        urgent: true,
        created_at: now.timestamp(),
    }
}

fn periodic_mission(plant: &Plant, kind: MissionKind, now: &Zoned, policy: &MissionPolicy) -> Mission {
    let (title, description, points) = match kind {
        MissionKind::Pruning => (
            format!("Prune {}", plant.name),
            format!("Trim dead leaves and leggy stems on {}.", plant.name),
            policy.pruning_points,
        ),
        _ => (
            format!("Inspect {}", plant.name),
            format!("Check the leaves and soil of {} for pests.", plant.name),
            policy.inspection_points,
        ),
    };

    Mission {
        id: 0,
        plant_id: Some(plant.id),
        kind,
        title,
        description,
        difficulty: Difficulty::Medium,
        points: points.max(1),
        time_left: SignedDuration::from_hours(i64::from(policy.periodic_window_hours)),
        urgent: false,
        created_at: now.timestamp(),
    }
}
