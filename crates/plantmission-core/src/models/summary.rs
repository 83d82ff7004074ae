//! Profile summary types.

use serde::Serialize;

/// Gamification and collection overview for the profile screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Plant parent level, starting at 1
    pub level: u64,
    /// Points earned so far
    pub total_points: u64,
    /// Live care streak
    pub current_streak: u32,
    /// Longest streak ever reached
    pub best_streak: u32,
    /// Plants in the collection
    pub plant_count: usize,
    /// Plants whose watering is due today or overdue
    pub urgent_plants: usize,
    /// Missions waiting to be completed
    pub active_missions: usize,
    /// Missions completed
    pub completed_missions: usize,
    /// Missions generated so far
    pub generated_missions: usize,
    /// Completed watering missions
    pub plants_watered: usize,
    /// Badges currently unlocked
    pub badges_unlocked: usize,
}

impl Profile {
    /// Share of generated missions that were completed, in `0.0..=1.0`.
    pub fn success_rate(&self) -> f64 {
        if self.generated_missions == 0 {
            0.0
        } else {
            self.completed_missions as f64 / self.generated_missions as f64
        }
    }

    /// Progress toward a 7-day streak, in percent.
    pub fn week_progress(&self) -> u32 {
        (self.current_streak.min(7) * 100) / 7
    }
}
