use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use plantmission_core::StreakRule;

use crate::cli::{MissionCommands, PlantCommands};

/// Level up your plant parenting from the terminal
///
/// PlantMission keeps track of your houseplants, tells you which ones are
/// thirsty, turns their care into missions and rewards completed missions
/// with points, streaks and badges. Run without a command to see the
/// dashboard.
#[derive(Parser)]
#[command(version, about, name = "plantmission")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/plantmission/garden.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// How completions advance the care streak
    #[arg(long, global = true, value_enum)]
    pub streak_rule: Option<StreakRuleArg>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plants
    #[command(alias = "p")]
    Plant {
        #[command(subcommand)]
        command: PlantCommands,
    },
    /// Generate, list and complete missions
    #[command(alias = "m")]
    Mission {
        #[command(subcommand)]
        command: MissionCommands,
    },
    /// Show level, points and streak
    Profile,
    /// Show the badge catalog
    Badges,
}

/// Command-line representation of [`StreakRule`].
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StreakRuleArg {
    /// One step per day with a completion; a missed day resets the streak
    Daily,
    /// One step per completion, never resets
    PerCompletion,
}

impl From<StreakRuleArg> for StreakRule {
    fn from(val: StreakRuleArg) -> Self {
        match val {
            StreakRuleArg::Daily => StreakRule::Daily,
            StreakRuleArg::PerCompletion => StreakRule::PerCompletion,
        }
    }
}
