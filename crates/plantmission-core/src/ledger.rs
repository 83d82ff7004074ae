//! Completion ledger: points, streaks and the completed-mission set.
//!
//! The ledger is the only place that records a mission as done. Completion is
//! one-way: an id never leaves [`Ledger::completed_mission_ids`], and the
//! point total only ever grows.
//!
//! How completions move the streak is decided by an explicit
//! [`StreakRule`], passed in by the caller so the behavior can be tested in
//! isolation.

use std::collections::BTreeSet;

use jiff::{civil::Date, ToSpan};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    config::StreakRule,
    error::{GardenError, Result},
    models::Mission,
};

/// Points needed per profile level.
pub const POINTS_PER_LEVEL: u64 = 100;

/// Aggregate gamification record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    pub total_points: u64,
    pub current_streak: u32,
    pub best_streak: u32,
    pub completed_mission_ids: BTreeSet<u64>,
    pub last_completed_on: Option<Date>,
}

/// Outcome of a successful completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub mission_id: u64,
    pub points: u32,
    pub total_points: u64,
    pub current_streak: u32,
}

impl Ledger {
    /// Records `mission_id` as completed on `today`, crediting `points`.
    ///
    /// # Errors
    ///
    /// * `UnknownMission` if no mission in `missions` carries the id.
    /// * `AlreadyCompleted` if the id is already recorded.
    ///
    /// The ledger is untouched on error.
    pub fn complete(
        &mut self,
        missions: &[Mission],
        mission_id: u64,
        points: u32,
        today: Date,
        rule: StreakRule,
    ) -> Result<Completion> {
        if !missions.iter().any(|m| m.id == mission_id) {
            return Err(GardenError::UnknownMission { id: mission_id });
        }
        if self.completed_mission_ids.contains(&mission_id) {
            return Err(GardenError::AlreadyCompleted { id: mission_id });
        }

        self.completed_mission_ids.insert(mission_id);
        self.total_points += u64::from(points);
        self.advance_streak(today, rule);

        info!(
            "Completed mission {mission_id} for {points} points (total {}, streak {})",
            self.total_points, self.current_streak
        );

        Ok(Completion {
            mission_id,
            points,
            total_points: self.total_points,
            current_streak: self.current_streak,
        })
    }

    /// Resets the streak when a full day passed without a completion.
    ///
    /// A last completion later than `today` counts as alive.
    ///
    /// Only [`StreakRule::Daily`] decays; returns true if the streak changed.
    pub fn decay(&mut self, today: Date, rule: StreakRule) -> bool {
        if rule != StreakRule::Daily || self.current_streak == 0 {
            return false;
        }
        let still_alive = self
            .last_completed_on
            .is_some_and(|last| last >= today || Some(last) == yesterday(today));
        if still_alive {
            return false;
        }
        debug!(
            "Streak of {} lapsed (last completion {:?})",
            self.current_streak, self.last_completed_on
        );
        self.current_streak = 0;
        true
    }

    /// Profile level derived from the point total, starting at 1.
    pub fn level(&self) -> u64 {
        1 + self.total_points / POINTS_PER_LEVEL
    }

    /// Number of completed missions.
    pub fn completed_count(&self) -> usize {
        self.completed_mission_ids.len()
    }

    /// Sum of the points of completed missions found in `missions`.
    pub fn expected_points(&self, missions: &[Mission]) -> u64 {
        missions
            .iter()
            .filter(|m| self.completed_mission_ids.contains(&m.id))
            .map(|m| u64::from(m.points))
            .sum()
    }

    /// Checks the subset and point-sum invariants against `missions`.
    pub fn verify(&self, missions: &[Mission]) -> Result<()> {
        let known: BTreeSet<u64> = missions.iter().map(|m| m.id).collect();
        if let Some(stray) = self.completed_mission_ids.difference(&known).next() {
            return Err(GardenError::invariant(format!(
                "completed mission {stray} was never generated"
            )));
        }
        let expected = self.expected_points(missions);
        if expected != self.total_points {
            return Err(GardenError::invariant(format!(
                "total points {} differ from completed mission sum {expected}",
                self.total_points
            )));
        }
        Ok(())
    }

    fn advance_streak(&mut self, today: Date, rule: StreakRule) {
        match rule {
            StreakRule::PerCompletion => self.current_streak += 1,
            StreakRule::Daily => match self.last_completed_on {
                Some(last) if last >= today => {
                    // Already counted today, or the clock moved back; a
                    // lapsed streak restarts.
                    if self.current_streak == 0 {
                        self.current_streak = 1;
                    }
                }
                Some(last) if Some(last) == yesterday(today) => self.current_streak += 1,
                _ => self.current_streak = 1,
            },
        }
        if self.last_completed_on.map_or(true, |last| last < today) {
            self.last_completed_on = Some(today);
        }
        self.best_streak = self.best_streak.max(self.current_streak);
    }
}

fn yesterday(today: Date) -> Option<Date> {
    today.checked_sub(1.day()).ok()
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, SignedDuration, Timestamp};

    use super::*;
    use crate::models::{Difficulty, MissionKind};

    fn mission(id: u64, points: u32) -> Mission {
        Mission {
            id,
            plant_id: Some(1),
            kind: MissionKind::Watering,
            title: format!("Mission {id}"),
            description: String::new(),
            difficulty: Difficulty::Easy,
            points,
            time_left: SignedDuration::from_hours(12),
            urgent: true,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_first_completion_scenario() {
        let missions = vec![mission(1, 10)];
        let mut ledger = Ledger::default();

        let completion = ledger
            .complete(&missions, 1, 10, date(2024, 6, 10), StreakRule::Daily)
            .unwrap();

        assert_eq!(completion.total_points, 10);
        assert_eq!(ledger.total_points, 10);
        assert_eq!(ledger.current_streak, 1);
        assert_eq!(ledger.completed_mission_ids, [1].into_iter().collect());
        assert!(ledger.verify(&missions).is_ok());
    }

    #[test]
    fn test_double_completion_is_rejected() {
        let missions = vec![mission(1, 10)];
        let mut ledger = Ledger::default();
        let today = date(2024, 6, 10);
        ledger
            .complete(&missions, 1, 10, today, StreakRule::Daily)
            .unwrap();
        let before = ledger.clone();

        let err = ledger
            .complete(&missions, 1, 10, today, StreakRule::Daily)
            .unwrap_err();
        assert!(matches!(err, GardenError::AlreadyCompleted { id: 1 }));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_unknown_mission_is_rejected() {
        let mut ledger = Ledger::default();
        let err = ledger
            .complete(&[mission(1, 10)], 9, 10, date(2024, 6, 10), StreakRule::Daily)
            .unwrap_err();
        assert!(matches!(err, GardenError::UnknownMission { id: 9 }));
        assert_eq!(ledger, Ledger::default());
    }

    #[test]
    fn test_daily_streak_counts_days_not_completions() {
        let missions: Vec<Mission> = (1..=4).map(|id| mission(id, 5)).collect();
        let mut ledger = Ledger::default();
        let rule = StreakRule::Daily;

        ledger.complete(&missions, 1, 5, date(2024, 6, 10), rule).unwrap();
        ledger.complete(&missions, 2, 5, date(2024, 6, 10), rule).unwrap();
        assert_eq!(ledger.current_streak, 1);

        ledger.complete(&missions, 3, 5, date(2024, 6, 11), rule).unwrap();
        assert_eq!(ledger.current_streak, 2);

        // Skipped the 12th.
        ledger.complete(&missions, 4, 5, date(2024, 6, 13), rule).unwrap();
        assert_eq!(ledger.current_streak, 1);
        assert_eq!(ledger.best_streak, 2);
        assert_eq!(ledger.total_points, 20);
    }

    #[test]
    fn test_daily_streak_decays_after_missed_day() {
        let missions = vec![mission(1, 5)];
        let mut ledger = Ledger::default();
        ledger
            .complete(&missions, 1, 5, date(2024, 6, 10), StreakRule::Daily)
            .unwrap();

        assert!(!ledger.decay(date(2024, 6, 11), StreakRule::Daily));
        assert_eq!(ledger.current_streak, 1);

        assert!(ledger.decay(date(2024, 6, 12), StreakRule::Daily));
        assert_eq!(ledger.current_streak, 0);
        assert_eq!(ledger.best_streak, 1);
    }

    #[test]
    fn test_per_completion_rule_never_decays() {
        let missions: Vec<Mission> = (1..=3).map(|id| mission(id, 5)).collect();
        let mut ledger = Ledger::default();
        let rule = StreakRule::PerCompletion;
        let today = date(2024, 6, 10);

        for id in 1..=3 {
            ledger.complete(&missions, id, 5, today, rule).unwrap();
        }
        assert_eq!(ledger.current_streak, 3);
        assert!(!ledger.decay(date(2024, 7, 1), rule));
        assert_eq!(ledger.current_streak, 3);
    }

    #[test]
    fn test_verify_detects_divergence() {
        let missions = vec![mission(1, 10)];
        let mut ledger = Ledger::default();
        ledger
            .complete(&missions, 1, 10, date(2024, 6, 10), StreakRule::Daily)
            .unwrap();

        let mut inflated = ledger.clone();
        inflated.total_points = 99;
        assert!(matches!(
            inflated.verify(&missions),
            Err(GardenError::InvariantViolation { .. })
        ));

        let mut stray = ledger;
        stray.completed_mission_ids.insert(77);
        assert!(stray.verify(&missions).is_err());
    }

    #[test]
    fn test_level_follows_points() {
        let mut ledger = Ledger::default();
        assert_eq!(ledger.level(), 1);
        ledger.total_points = 250;
        assert_eq!(ledger.level(), 3);
    }

    #[test]
    fn test_future_last_completion_keeps_streak() {
        let missions = vec![mission(1, 5), mission(2, 5)];
        let mut ledger = Ledger::default();
        let rule = StreakRule::Daily;
        ledger.complete(&missions, 1, 5, date(2024, 6, 12), rule).unwrap();

        // The calendar moved back two days.
        assert!(!ledger.decay(date(2024, 6, 10), rule));
        assert_eq!(ledger.current_streak, 1);

        ledger.complete(&missions, 2, 5, date(2024, 6, 10), rule).unwrap();
        assert_eq!(ledger.current_streak, 1);
        assert_eq!(ledger.last_completed_on, Some(date(2024, 6, 12)));
    }
}
