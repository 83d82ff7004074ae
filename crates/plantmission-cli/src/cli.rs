//! Subcommand definitions and their handlers.
//!
//! Each command has a clap argument struct that converts into a core
//! parameter type with a `From` impl, keeping clap attributes out of the
//! core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Keeper
//! ```
//!
//! [`Cli`] runs the converted commands against a [`Keeper`] and renders the
//! markdown they produce.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use plantmission_core::{
    display::OperationStatus,
    params::{AddPlant, Id, ListMissions, SetUrgent, UpdateHealth},
    Keeper, MissionKind,
};

use crate::renderer::TerminalRenderer;

/// Add a plant to the collection
///
/// Last-care dates accept `today`, `yesterday`, `N days ago`, a date such as
/// `2024-05-01` or a full RFC 3339 timestamp.
#[derive(Args)]
pub struct AddPlantArgs {
    /// Name of the plant
    pub name: String,
    #[arg(short, long, help = "Species, e.g. 'Ficus lyrata'")]
    pub species: Option<String>,
    #[arg(short, long, help = "Room the plant lives in")]
    pub room: Option<String>,
    #[arg(long, allow_negative_numbers = true, help = "Health from 0 to 100 (default 100)")]
    pub health: Option<i64>,
    #[arg(long, help = "When the plant was last watered (default: now)")]
    pub last_watered: Option<String>,
    #[arg(long, help = "When the plant was last fertilized (default: now)")]
    pub last_fertilized: Option<String>,
    #[arg(short, long, default_value_t = 7, help = "Days between waterings")]
    pub water_every: u32,
    #[arg(short, long, help = "Days between feedings (default 30)")]
    pub fertilize_every: Option<u32>,
}

impl From<AddPlantArgs> for AddPlant {
    fn from(val: AddPlantArgs) -> Self {
        AddPlant {
            name: val.name,
            species: val.species,
            room: val.room,
            health: val.health,
            last_watered: val.last_watered,
            last_fertilized: val.last_fertilized,
            watering_interval_days: val.water_every,
            fertilize_interval_days: val.fertilize_every,
        }
    }
}

/// Select a plant by ID
#[derive(Args)]
pub struct PlantIdArgs {
    #[arg(help = "Unique identifier of the plant")]
    pub id: u64,
}

impl From<PlantIdArgs> for Id {
    fn from(val: PlantIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Record a health score
///
/// Values outside 0..=100 are clamped.
#[derive(Args)]
pub struct HealthArgs {
    #[arg(help = "Unique identifier of the plant")]
    pub id: u64,
    #[arg(allow_negative_numbers = true, help = "New health score")]
    pub health: i64,
}

impl From<HealthArgs> for UpdateHealth {
    fn from(val: HealthArgs) -> Self {
        UpdateHealth {
            id: val.id,
            health: val.health,
        }
    }
}

/// Flag a plant for attention, or clear the flag
#[derive(Args)]
pub struct FlagArgs {
    #[arg(help = "Unique identifier of the plant")]
    pub id: u64,
    #[arg(long, help = "Clear the flag instead of setting it")]
    pub clear: bool,
}

impl From<FlagArgs> for SetUrgent {
    fn from(val: FlagArgs) -> Self {
        SetUrgent {
            id: val.id,
            urgent: !val.clear,
        }
    }
}

#[derive(Subcommand)]
pub enum PlantCommands {
    /// Add a plant
    #[command(alias = "a")]
    Add(AddPlantArgs),
    /// List every plant with its care status
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one plant
    #[command(alias = "s")]
    Show(PlantIdArgs),
    /// Record a watering (completes a pending watering mission)
    #[command(alias = "w")]
    Water(PlantIdArgs),
    /// Record a feeding
    #[command(alias = "f")]
    Fertilize(PlantIdArgs),
    /// Record a health score
    Health(HealthArgs),
    /// List plants that need water now
    #[command(alias = "u")]
    Urgent,
    /// Flag a plant for attention
    Flag(FlagArgs),
}

/// List missions
///
/// Shows active missions unless --completed or --all is given.
#[derive(Args)]
pub struct ListMissionsArgs {
    #[arg(long, help = "Show completed missions instead of active ones")]
    pub completed: bool,
    #[arg(long, conflicts_with = "completed", help = "Show every mission")]
    pub all: bool,
    #[arg(short, long, value_enum, help = "Only missions of this kind")]
    pub kind: Option<KindArg>,
    #[arg(short, long, help = "Only missions for this plant")]
    pub plant: Option<u64>,
}

impl From<ListMissionsArgs> for ListMissions {
    fn from(val: ListMissionsArgs) -> Self {
        ListMissions {
            completed: val.completed,
            all: val.all,
            kind: val.kind.map(Into::into),
            plant_id: val.plant,
        }
    }
}

/// Complete a mission
#[derive(Args)]
pub struct CompleteMissionArgs {
    #[arg(help = "Unique identifier of the mission")]
    pub id: u64,
}

impl From<CompleteMissionArgs> for Id {
    fn from(val: CompleteMissionArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum MissionCommands {
    /// Create missions for plants that need care
    #[command(alias = "g")]
    Generate,
    /// List missions
    #[command(aliases = ["l", "ls"])]
    List(ListMissionsArgs),
    /// Complete a mission and collect its points
    #[command(alias = "c")]
    Complete(CompleteMissionArgs),
}

/// Command-line representation of mission kinds
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Watering,
    Pruning,
    Inspection,
}

impl From<KindArg> for MissionKind {
    fn from(val: KindArg) -> Self {
        match val {
            KindArg::Watering => MissionKind::Watering,
            KindArg::Pruning => MissionKind::Pruning,
            KindArg::Inspection => MissionKind::Inspection,
        }
    }
}

/// Runs commands against a keeper and renders the results.
pub struct Cli {
    keeper: Keeper,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(keeper: Keeper, renderer: TerminalRenderer) -> Self {
        Self { keeper, renderer }
    }

    /// Reports what was repaired on load.
    pub fn warn_load_issues(&self) -> Result<()> {
        for issue in self.keeper.load_issues() {
            let status = OperationStatus::warning(issue.as_str());
            self.renderer.render(&status.to_string())?;
        }
        Ok(())
    }

    pub async fn handle_plant_command(&self, command: PlantCommands) -> Result<()> {
        let output = match command {
            PlantCommands::Add(args) => self
                .keeper
                .add_plant(&args.into())
                .await
                .context("Failed to add plant")?
                .to_string(),
            PlantCommands::List => {
                let plants = self.keeper.list_plants().await.context("Failed to list plants")?;
                format!("# Plants\n\n{plants}")
            }
            PlantCommands::Show(args) => self
                .keeper
                .show_plant(&args.into())
                .await
                .context("Failed to show plant")?
                .to_string(),
            PlantCommands::Water(args) => self
                .keeper
                .water_plant(&args.into())
                .await
                .context("Failed to water plant")?
                .to_string(),
            PlantCommands::Fertilize(args) => self
                .keeper
                .fertilize_plant(&args.into())
                .await
                .context("Failed to fertilize plant")?
                .to_string(),
            PlantCommands::Health(args) => self
                .keeper
                .update_health(&args.into())
                .await
                .context("Failed to update health")?
                .to_string(),
            PlantCommands::Urgent => {
                let plants = self
                    .keeper
                    .urgent_plants()
                    .await
                    .context("Failed to list urgent plants")?;
                format!("# Needs Water\n\n{plants}")
            }
            PlantCommands::Flag(args) => self
                .keeper
                .set_urgent(&args.into())
                .await
                .context("Failed to flag plant")?
                .to_string(),
        };
        self.renderer.render(&output)
    }

    pub async fn handle_mission_command(&self, command: MissionCommands) -> Result<()> {
        let output = match command {
            MissionCommands::Generate => self
                .keeper
                .generate_missions()
                .await
                .context("Failed to generate missions")?
                .to_string(),
            MissionCommands::List(args) => {
                let params = ListMissions::from(args);
                let title = if params.all {
                    "All Missions"
                } else if params.completed {
                    "Completed Missions"
                } else {
                    "Active Missions"
                };
                let missions = self
                    .keeper
                    .list_missions(&params)
                    .await
                    .context("Failed to list missions")?;
                format!("# {title}\n\n{missions}")
            }
            MissionCommands::Complete(args) => self
                .keeper
                .complete_mission(&args.into())
                .await
                .context("Failed to complete mission")?
                .to_string(),
        };
        self.renderer.render(&output)
    }

    pub async fn show_profile(&self) -> Result<()> {
        let profile = self.keeper.profile().await.context("Failed to load profile")?;
        self.renderer.render(&profile.to_string())
    }

    pub async fn show_badges(&self) -> Result<()> {
        let badges = self.keeper.badges().await.context("Failed to load badges")?;
        self.renderer.render(&format!("# Badges\n\n{badges}"))
    }

    /// Profile followed by the active missions.
    pub async fn show_dashboard(&self) -> Result<()> {
        let profile = self.keeper.profile().await.context("Failed to load profile")?;
        let missions = self
            .keeper
            .list_missions(&ListMissions::default())
            .await
            .context("Failed to list missions")?;
        self.renderer
            .render(&format!("{profile}\n# Active Missions\n\n{missions}"))
    }
}
