//! Badge catalog and evaluation.
//!
//! Badges are never stored as unlocked. [`evaluate`] recomputes them from the
//! ledger and plant collection every time, so a change to a criterion takes
//! effect immediately. Point and count badges can only unlock since their
//! inputs never decrease. The streak badge follows the live streak and may
//! lock again when a daily streak lapses.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{ledger::Ledger, models::Plant};

/// Pure unlock predicate over ledger and plants.
pub type Criterion = fn(&Ledger, &[Plant]) -> bool;

/// Static definition of a badge.
pub struct BadgeDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub criterion: Criterion,
}

/// A badge with its unlock state at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// All badges, in display order.
pub const CATALOG: &[BadgeDef] = &[
    BadgeDef {
        id: "first-sprout",
        name: "First Sprout",
        description: "Complete your first mission",
        criterion: |ledger, _| ledger.completed_count() >= 1,
    },
    BadgeDef {
        id: "green-thumb",
        name: "Green Thumb",
        description: "Earn 100 points",
        criterion: |ledger, _| ledger.total_points >= 100,
    },
    BadgeDef {
        id: "mission-master",
        name: "Mission Master",
        description: "Complete 10 missions",
        criterion: |ledger, _| ledger.completed_count() >= 10,
    },
    BadgeDef {
        id: "plant-collector",
        name: "Plant Collector",
        description: "Grow a collection of 5 plants",
        criterion: |_, plants| plants.len() >= 5,
    },
    BadgeDef {
        id: "week-streak",
        name: "Week Warrior",
        description: "Keep a 7-day care streak",
        criterion: |ledger, _| ledger.current_streak >= 7,
    },
];

/// Ids of the badges unlocked by the given state.
pub fn evaluate(ledger: &Ledger, plants: &[Plant]) -> BTreeSet<&'static str> {
    CATALOG
        .iter()
        .filter(|def| (def.criterion)(ledger, plants))
        .map(|def| def.id)
        .collect()
}

/// Every badge with its current unlock state.
pub fn badges(ledger: &Ledger, plants: &[Plant]) -> Vec<Badge> {
    CATALOG
        .iter()
        .map(|def| Badge {
            id: def.id,
            name: def.name,
            description: def.description,
            unlocked: (def.criterion)(ledger, plants),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn plants(count: u64) -> Vec<Plant> {
        (1..=count)
            .map(|id| {
                Plant::new(
                    id,
                    format!("Plant {id}"),
                    "",
                    "",
                    100,
                    Timestamp::UNIX_EPOCH,
                    Timestamp::UNIX_EPOCH,
                    7,
                    30,
                    Timestamp::UNIX_EPOCH,
                )
            })
            .collect()
    }

    #[test]
    fn test_fresh_state_has_no_badges() {
        assert!(evaluate(&Ledger::default(), &[]).is_empty());
        assert!(badges(&Ledger::default(), &[]).iter().all(|b| !b.unlocked));
    }

    #[test]
    fn test_green_thumb_is_monotonic_in_points() {
        let mut ledger = Ledger::default();
        for points in [0_u64, 50, 99] {
            ledger.total_points = points;
            assert!(!evaluate(&ledger, &[]).contains("green-thumb"));
        }
        for points in [100_u64, 101, 250, 10_000] {
            ledger.total_points = points;
            assert!(evaluate(&ledger, &[]).contains("green-thumb"));
        }
    }

    #[test]
    fn test_collection_and_count_badges() {
        let mut ledger = Ledger::default();
        ledger.completed_mission_ids = (1..=10).collect();

        let unlocked = evaluate(&ledger, &plants(5));
        assert!(unlocked.contains("first-sprout"));
        assert!(unlocked.contains("mission-master"));
        assert!(unlocked.contains("plant-collector"));

        assert!(!evaluate(&ledger, &plants(4)).contains("plant-collector"));
    }

    #[test]
    fn test_streak_badge_follows_live_streak() {
        let mut ledger = Ledger {
            current_streak: 7,
            ..Ledger::default()
        };
        assert!(evaluate(&ledger, &[]).contains("week-streak"));

        // A lapsed streak locks the badge again.
        ledger.current_streak = 0;
        assert!(!evaluate(&ledger, &[]).contains("week-streak"));
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: BTreeSet<&str> = CATALOG.iter().map(|def| def.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }
}
