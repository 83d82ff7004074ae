//! Tunable policy for mission generation and streak keeping.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rewards and cadences used by the mission generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MissionPolicy {
    /// Reward for a watering mission that is due today
    pub watering_points: u32,
    /// Extra reward per day a watering is overdue
    pub overdue_bonus_per_day: u32,
    /// Cap on the overdue bonus
    pub max_overdue_bonus: u32,
    /// Hours a watering mission stays valid before health suffers
    pub watering_window_hours: u32,
    /// Days between inspections of the same plant, zero disables them
    pub inspection_interval_days: u32,
    /// Reward for an inspection mission
    pub inspection_points: u32,
    /// Days between prunings of the same plant, zero disables them
    pub pruning_interval_days: u32,
    /// Reward for a pruning mission
    pub pruning_points: u32,
    /// Hours an inspection or pruning mission stays valid
    pub periodic_window_hours: u32,
}

impl Default for MissionPolicy {
    fn default() -> Self {
        Self {
            watering_points: 10,
            overdue_bonus_per_day: 5,
            max_overdue_bonus: 20,
            watering_window_hours: 12,
            inspection_interval_days: 7,
            inspection_points: 15,
            pruning_interval_days: 30,
            pruning_points: 25,
            periodic_window_hours: 72,
        }
    }
}

impl MissionPolicy {
    /// Reward for a watering mission `days_overdue` days past its deadline.
    pub fn watering_reward(&self, days_overdue: u32) -> u32 {
        let bonus = self
            .overdue_bonus_per_day
            .saturating_mul(days_overdue)
            .min(self.max_overdue_bonus);
        self.watering_points.saturating_add(bonus).max(1)
    }
}

/// How completions advance the care streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StreakRule {
    /// One step per calendar day with a completion. Missing a whole day
    /// resets the streak to zero.
    #[default]
    Daily,
    /// Every completion adds one and the streak never decays.
    PerCompletion,
}

impl FromStr for StreakRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(StreakRule::Daily),
            "per-completion" | "per_completion" => Ok(StreakRule::PerCompletion),
            _ => Err(format!("Invalid streak rule: {s}")),
        }
    }
}

/// Everything a [`crate::Garden`] needs besides its state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GardenConfig {
    pub policy: MissionPolicy,
    pub streak_rule: StreakRule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watering_reward_grows_with_lateness() {
        let policy = MissionPolicy::default();
        assert_eq!(policy.watering_reward(0), 10);
        assert_eq!(policy.watering_reward(1), 15);
        assert_eq!(policy.watering_reward(2), 20);
        // capped
        assert_eq!(policy.watering_reward(30), 30);
    }

    #[test]
    fn test_streak_rule_parsing() {
        assert_eq!("daily".parse::<StreakRule>(), Ok(StreakRule::Daily));
        assert_eq!(
            "Per-Completion".parse::<StreakRule>(),
            Ok(StreakRule::PerCompletion)
        );
        assert!("weekly".parse::<StreakRule>().is_err());
    }

    #[test]
    fn test_policy_deserializes_partial_overrides() {
        let policy: MissionPolicy =
            serde_json::from_str(r#"{"inspectionIntervalDays": 14}"#).unwrap();
        assert_eq!(policy.inspection_interval_days, 14);
        assert_eq!(policy.watering_points, 10);
    }
}
