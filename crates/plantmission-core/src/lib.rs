//! Core library for the PlantMission plant care game.
//!
//! The crate tracks houseplants, derives their care deadlines, turns due care
//! into rewarded missions and keeps the gamification ledger (points, streak,
//! badges) those missions feed.
//!
//! # Layers
//!
//! - **Pure policy**: [`schedule`] computes care status, [`generator`] decides
//!   which missions are owed, [`ledger`] books completions and [`badges`]
//!   evaluates achievements. None of them read the clock or touch storage.
//! - **State**: [`garden::Garden`] owns plants, missions and the ledger and
//!   exposes every command. Rejected commands leave it unchanged.
//! - **Persistence**: [`snapshot`] maps the state onto independently keyed
//!   JSON slices behind the [`store::SnapshotGateway`] trait.
//! - **Service**: [`keeper::Keeper`] serializes commands and writes a snapshot
//!   after each mutation. Its handlers return [`display`] wrappers.
//!
//! # Quick Start
//!
//! ```rust
//! use plantmission_core::{params::AddPlant, KeeperBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let keeper = KeeperBuilder::new()
//!     .with_database_path(Some("garden.db"))
//!     .build()
//!     .await?;
//!
//! keeper
//!     .add_plant(&AddPlant {
//!         name: "Fiddle Leaf Fig".to_string(),
//!         last_watered: Some("yesterday".to_string()),
//!         watering_interval_days: 7,
//!         ..AddPlant::default()
//!     })
//!     .await?;
//!
//! println!("{}", keeper.generate_missions().await?);
//! println!("{}", keeper.profile().await?);
//! # Ok(())
//! # }
//! ```

pub mod badges;
pub mod config;
pub mod display;
pub mod error;
pub mod garden;
pub mod generator;
pub mod keeper;
pub mod ledger;
pub mod models;
pub mod params;
pub mod schedule;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use badges::Badge;
pub use config::{GardenConfig, MissionPolicy, StreakRule};
pub use display::{
    Badges, CompletionResult, CreateResult, GenerationResult, MissionCard, Missions,
    OperationStatus, PlantCard, Plants, UpdateResult, WateringResult,
};
pub use error::{GardenError, Result};
pub use garden::{CompletionReport, Garden, WateringReport};
pub use generator::Generation;
pub use keeper::{Keeper, KeeperBuilder};
pub use ledger::{Completion, Ledger};
pub use models::{
    CompletionFilter, Difficulty, Mission, MissionFilter, MissionKind, Plant, Profile,
};
pub use params::{AddPlant, Id, ListMissions, SetUrgent, UpdateHealth};
pub use schedule::{CareStatus, Due};
pub use snapshot::{LoadReport, Snapshot};
pub use store::{Database, MemoryGateway, SnapshotGateway};
