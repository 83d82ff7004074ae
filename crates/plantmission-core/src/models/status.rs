//! Mission kind and difficulty enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of mission kinds.
///
/// The kind is a symbolic tag only; icons and colors belong to whatever
/// renders it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MissionKind {
    /// Give the plant water
    Watering,

    /// Trim dead or leggy growth
    Pruning,

    /// Check leaves and soil for pests or problems
    Inspection,
}

impl FromStr for MissionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "watering" | "water" => Ok(MissionKind::Watering),
            "pruning" | "prune" => Ok(MissionKind::Pruning),
            "inspection" | "inspect" => Ok(MissionKind::Inspection),
            _ => Err(format!("Invalid mission kind: {s}")),
        }
    }
}

impl MissionKind {
    /// Every mission kind, in generation order.
    pub const ALL: [MissionKind; 3] = [
        MissionKind::Watering,
        MissionKind::Inspection,
        MissionKind::Pruning,
    ];

    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionKind::Watering => "watering",
            MissionKind::Pruning => "pruning",
            MissionKind::Inspection => "inspection",
        }
    }
}

/// Type-safe enumeration of mission difficulties.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl Difficulty {
    /// Convert to the persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}
