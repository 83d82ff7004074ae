//! Snapshot encoding over a [`SnapshotGateway`].
//!
//! Each slice is decoded on its own. A missing key yields the slice's zero
//! value; a key that fails to parse or validate also yields the zero value
//! and is reported as [`GardenError::MalformedSnapshot`] in the
//! [`LoadReport`] instead of failing the whole load.
//!
//! Once the ledger is known, active missions that answer the same
//! `(plant, kind)` obligation are reduced to the lowest id and reported as
//! [`GardenError::InvariantViolation`].

use std::collections::{BTreeSet, HashSet};

use jiff::civil::Date;
use log::warn;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::{GardenError, Result},
    ledger::Ledger,
    models::{Mission, Plant},
    store::SnapshotGateway,
};

/// Keys of the persisted slices.
pub mod keys {
    pub const PLANTS: &str = "plants";
    pub const MISSIONS: &str = "missions";
    pub const TOTAL_POINTS: &str = "ledger.totalPoints";
    pub const CURRENT_STREAK: &str = "ledger.currentStreak";
    pub const COMPLETED_MISSION_IDS: &str = "ledger.completedMissionIds";
    pub const BEST_STREAK: &str = "ledger.bestStreak";
    pub const LAST_COMPLETED_ON: &str = "ledger.lastCompletedOn";

    /// Every key, in write order.
    pub const ALL: [&str; 7] = [
        PLANTS,
        MISSIONS,
        TOTAL_POINTS,
        CURRENT_STREAK,
        COMPLETED_MISSION_IDS,
        BEST_STREAK,
        LAST_COMPLETED_ON,
    ];
}

/// Full persisted state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub plants: Vec<Plant>,
    pub missions: Vec<Mission>,
    pub ledger: Ledger,
}

/// Result of a load: the usable snapshot plus every slice that fell back.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub snapshot: Snapshot,
    pub malformed: Vec<GardenError>,
}

impl LoadReport {
    /// Returns true when every present slice decoded cleanly.
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }
}

impl Snapshot {
    /// Reads every slice from `gateway`.
    ///
    /// # Errors
    ///
    /// Only gateway failures (for example an unreadable database) are
    /// returned. Malformed slices are reported in the [`LoadReport`].
    pub fn load<G: SnapshotGateway + ?Sized>(gateway: &G) -> Result<LoadReport> {
        let mut malformed = Vec::new();

        let plants = decode::<Vec<Plant>, _>(gateway, keys::PLANTS, &mut malformed, validate_plants)?;
        let missions =
            decode::<Vec<Mission>, _>(gateway, keys::MISSIONS, &mut malformed, validate_missions)?;
        let total_points = decode::<u64, _>(gateway, keys::TOTAL_POINTS, &mut malformed, accept)?;
        let current_streak =
            decode::<u32, _>(gateway, keys::CURRENT_STREAK, &mut malformed, accept)?;
        let completed_mission_ids = decode::<BTreeSet<u64>, _>(
            gateway,
            keys::COMPLETED_MISSION_IDS,
            &mut malformed,
            accept,
        )?;
        let best_streak = decode::<u32, _>(gateway, keys::BEST_STREAK, &mut malformed, accept)?;
        let last_completed_on =
            decode::<Option<Date>, _>(gateway, keys::LAST_COMPLETED_ON, &mut malformed, accept)?;

        let mut plants = plants.unwrap_or_default();
        for plant in &mut plants {
            plant.normalize();
        }
        let current_streak = current_streak.unwrap_or_default();

        let mut snapshot = Snapshot {
            plants,
            missions: missions.unwrap_or_default(),
            ledger: Ledger {
                total_points: total_points.unwrap_or_default(),
                current_streak,
                best_streak: best_streak.unwrap_or_default().max(current_streak),
                completed_mission_ids: completed_mission_ids.unwrap_or_default(),
                last_completed_on: last_completed_on.flatten(),
            },
        };
        drop_duplicate_obligations(&mut snapshot, &mut malformed);

        Ok(LoadReport {
            snapshot,
            malformed,
        })
    }

    /// Serializes every slice to its `(key, json)` pair.
    pub fn encode(&self) -> Result<Vec<(&'static str, String)>> {
        Ok(vec![
            (keys::PLANTS, to_json(&self.plants)?),
            (keys::MISSIONS, to_json(&self.missions)?),
            (keys::TOTAL_POINTS, to_json(&self.ledger.total_points)?),
            (keys::CURRENT_STREAK, to_json(&self.ledger.current_streak)?),
            (
                keys::COMPLETED_MISSION_IDS,
                to_json(&self.ledger.completed_mission_ids)?,
            ),
            (keys::BEST_STREAK, to_json(&self.ledger.best_streak)?),
            (
                keys::LAST_COMPLETED_ON,
                to_json(&self.ledger.last_completed_on)?,
            ),
        ])
    }

    /// Writes every slice to `gateway` as one atomic unit.
    pub fn save<G: SnapshotGateway + ?Sized>(&self, gateway: &mut G) -> Result<()> {
        let slices = self.encode()?;
        gateway.save_slices(&slices)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn decode<T, G>(
    gateway: &G,
    key: &str,
    malformed: &mut Vec<GardenError>,
    validate: fn(&T) -> std::result::Result<(), String>,
) -> Result<Option<T>>
where
    T: DeserializeOwned,
    G: SnapshotGateway + ?Sized,
{
    let Some(raw) = gateway.load_slice(key)? else {
        return Ok(None);
    };

    let parsed = serde_json::from_str::<T>(&raw)
        .map_err(|e| e.to_string())
        .and_then(|value| validate(&value).map(|()| value));

    match parsed {
        Ok(value) => Ok(Some(value)),
        Err(reason) => {
            warn!("Discarding malformed slice '{key}': {reason}");
            malformed.push(GardenError::malformed(key, reason));
            Ok(None)
        }
    }
}

fn accept<T>(_: &T) -> std::result::Result<(), String> {
    Ok(())
}

#[allow(clippy::ptr_arg)]
fn validate_plants(plants: &Vec<Plant>) -> std::result::Result<(), String> {
    let mut seen = HashSet::new();
    for plant in plants {
        if !seen.insert(plant.id) {
            return Err(format!("duplicate plant id {}", plant.id));
        }
        if plant.watering_interval_days == 0 || plant.fertilize_interval_days == 0 {
            return Err(format!("plant {} has a zero care interval", plant.id));
        }
    }
    Ok(())
}

#[allow(clippy::ptr_arg)]
fn validate_missions(missions: &Vec<Mission>) -> std::result::Result<(), String> {
    let mut seen = HashSet::new();
    for mission in missions {
        if !seen.insert(mission.id) {
            return Err(format!("duplicate mission id {}", mission.id));
        }
        if mission.points == 0 {
            return Err(format!("mission {} has no reward", mission.id));
        }
    }
    Ok(())
}

/// Keeps only the lowest-id active mission per `(plant, kind)` obligation.
fn drop_duplicate_obligations(snapshot: &mut Snapshot, malformed: &mut Vec<GardenError>) {
    let completed = &snapshot.ledger.completed_mission_ids;
    let mut active: Vec<&Mission> = snapshot
        .missions
        .iter()
        .filter(|m| m.plant_id.is_some() && !completed.contains(&m.id))
        .collect();
    active.sort_by_key(|m| m.id);

    let mut seen = BTreeSet::new();
    let dropped: BTreeSet<u64> = active
        .into_iter()
        .filter(|m| !seen.insert(m.obligation()))
        .map(|m| m.id)
        .collect();
    if dropped.is_empty() {
        return;
    }

    let ids: Vec<u64> = dropped.iter().copied().collect();
    warn!("Dropping duplicate active missions {ids:?}");
    snapshot.missions.retain(|m| !dropped.contains(&m.id));
    malformed.push(GardenError::invariant(format!(
        "duplicate active missions {ids:?} were dropped"
    )));
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, SignedDuration, Timestamp};

    use super::*;
    use crate::{
        models::{Difficulty, MissionKind},
        store::MemoryGateway,
    };

    fn sample() -> Snapshot {
        let plant = Plant::new(
            1,
            "Pothos",
            "Epipremnum aureum",
            "Office",
            70,
            Timestamp::UNIX_EPOCH,
            Timestamp::UNIX_EPOCH,
            5,
            21,
            Timestamp::UNIX_EPOCH,
        );
        let mission = Mission {
            id: 1,
            plant_id: Some(1),
            kind: MissionKind::Watering,
            title: "Water Pothos".to_string(),
            description: "Pothos needs water today.".to_string(),
            difficulty: Difficulty::Easy,
            points: 10,
            time_left: SignedDuration::from_hours(12),
            urgent: true,
            created_at: Timestamp::UNIX_EPOCH,
        };
        Snapshot {
            plants: vec![plant],
            missions: vec![mission],
            ledger: Ledger {
                total_points: 10,
                current_streak: 1,
                best_streak: 1,
                completed_mission_ids: [1].into_iter().collect(),
                last_completed_on: Some(date(2024, 6, 10)),
            },
        }
    }

    #[test]
    fn test_empty_gateway_loads_zero_values() {
        let report = Snapshot::load(&MemoryGateway::new()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.snapshot, Snapshot::default());
    }

    #[test]
    fn test_saved_snapshot_loads_back() {
        let mut gateway = MemoryGateway::new();
        sample().save(&mut gateway).unwrap();
        assert_eq!(gateway.len(), keys::ALL.len());

        let report = Snapshot::load(&gateway).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.snapshot, sample());
    }

    #[test]
    fn test_corrupted_missions_slice_falls_back_alone() {
        let mut gateway = MemoryGateway::new();
        sample().save(&mut gateway).unwrap();
        gateway.put_raw(keys::MISSIONS, "{not json");

        let report = Snapshot::load(&gateway).unwrap();
        assert!(report.snapshot.missions.is_empty());
        assert_eq!(report.snapshot.plants, sample().plants);
        assert_eq!(report.snapshot.ledger, sample().ledger);
        assert_eq!(report.malformed.len(), 1);
        assert!(matches!(
            &report.malformed[0],
            GardenError::MalformedSnapshot { key, .. } if key == keys::MISSIONS
        ));
    }

    #[test]
    fn test_structurally_invalid_plants_are_rejected() {
        let mut gateway = MemoryGateway::new();
        let mut snapshot = sample();
        snapshot.plants[0].watering_interval_days = 0;
        snapshot.save(&mut gateway).unwrap();

        let report = Snapshot::load(&gateway).unwrap();
        assert!(report.snapshot.plants.is_empty());
        assert_eq!(report.malformed.len(), 1);
    }

    #[test]
    fn test_out_of_range_health_is_clamped_on_load() {
        let mut gateway = MemoryGateway::new();
        sample().save(&mut gateway).unwrap();
        let raw = gateway.load_slice(keys::PLANTS).unwrap().unwrap();
        gateway.put_raw(keys::PLANTS, raw.replace("\"health\":70", "\"health\":250"));

        let report = Snapshot::load(&gateway).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.snapshot.plants[0].health(), 100);
    }

    #[test]
    fn test_duplicate_active_obligation_keeps_lowest_id() {
        let mut snapshot = sample();
        snapshot.ledger = Ledger::default();
        let mut twin = snapshot.missions[0].clone();
        twin.id = 2;
        snapshot.missions.push(twin);
        let mut gateway = MemoryGateway::new();
        snapshot.save(&mut gateway).unwrap();

        let report = Snapshot::load(&gateway).unwrap();
        assert!(!report.is_clean());
        assert!(matches!(
            &report.malformed[0],
            GardenError::InvariantViolation { message } if message.contains("[2]")
        ));
        let ids: Vec<u64> = report.snapshot.missions.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_completed_twin_is_not_a_duplicate() {
        let mut snapshot = sample();
        let mut twin = snapshot.missions[0].clone();
        twin.id = 2;
        snapshot.missions.push(twin);
        let mut gateway = MemoryGateway::new();
        snapshot.save(&mut gateway).unwrap();

        let report = Snapshot::load(&gateway).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.snapshot.missions.len(), 2);
    }

    #[test]
    fn test_wrong_type_in_ledger_slice() {
        let mut gateway = MemoryGateway::new();
        sample().save(&mut gateway).unwrap();
        gateway.put_raw(keys::TOTAL_POINTS, "\"lots\"");

        let report = Snapshot::load(&gateway).unwrap();
        assert_eq!(report.snapshot.ledger.total_points, 0);
        assert_eq!(report.snapshot.ledger.current_streak, 1);
        assert_eq!(report.malformed.len(), 1);
    }
}
