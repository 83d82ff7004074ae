//! Async service facade over the garden.
//!
//! [`Keeper`] is the handle applications hold. It owns one [`Garden`] behind a
//! [`tokio::sync::Mutex`], so commands run one at a time and every cross-field
//! update lands atomically. Each command follows the same sequence:
//!
//! 1. lock the garden and take "now" in the configured time zone,
//! 2. apply streak decay, then run the command on a working copy,
//! 3. if the state changed, write the snapshot through
//!    [`tokio::task::spawn_blocking`] while still holding the lock,
//! 4. only then publish the working copy.
//!
//! A rejected command or a failed write leaves the in-memory state untouched.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │     Garden      │    │    Snapshot     │
//! │ (plant_handlers,│───▶│ (commands and   │───▶│ (store::Database│
//! │ mission_handlers│    │  queries)       │    │  via gateway)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use plantmission_core::{params::AddPlant, KeeperBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let keeper = KeeperBuilder::new()
//!     .with_database_path(Some("/tmp/garden.db"))
//!     .build()
//!     .await?;
//!
//! let created = keeper
//!     .add_plant(&AddPlant {
//!         name: "Pothos".to_string(),
//!         last_watered: Some("3 days ago".to_string()),
//!         watering_interval_days: 2,
//!         ..AddPlant::default()
//!     })
//!     .await?;
//! println!("{created}");
//!
//! let generated = keeper.generate_missions().await?;
//! println!("{generated}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use jiff::{tz::TimeZone, Zoned};
use log::debug;
use tokio::{sync::Mutex, task};

use crate::{
    error::{GardenError, Result},
    garden::Garden,
    snapshot::Snapshot,
    store::Database,
};

pub mod builder;
pub mod mission_handlers;
pub mod plant_handlers;


pub use builder::KeeperBuilder;

/// Main handle for managing a garden.
pub struct Keeper {
    db_path: PathBuf,
    time_zone: TimeZone,
    garden: Mutex<Garden>,
    load_issues: Vec<String>,
}

impl Keeper {
    pub(crate) fn new(
        db_path: PathBuf,
        time_zone: TimeZone,
        garden: Garden,
        load_issues: Vec<String>,
    ) -> Self {
        Self {
            db_path,
            time_zone,
            garden: Mutex::new(garden),
            load_issues,
        }
    }

    /// Path of the backing database.
    pub fn database_path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Slices that could not be read when the keeper was built.
    ///
    /// Each entry describes one key that was reset to its empty value.
    pub fn load_issues(&self) -> &[String] {
        &self.load_issues
    }

    /// A copy of the current persistable state.
    pub async fn snapshot(&self) -> Snapshot {
        self.garden.lock().await.snapshot()
    }

    /// Verifies the cross-field invariants of the current state.
    pub async fn check_invariants(&self) -> Result<()> {
        self.garden.lock().await.check_invariants()
    }

    pub(crate) fn now(&self) -> Zoned {
        Zoned::now().with_time_zone(self.time_zone.clone())
    }

    /// Runs `command` against the garden with write-after-mutate semantics.
    pub(crate) async fn transact<T, F>(&self, command: F) -> Result<T>
    where
        F: FnOnce(&mut Garden, &Zoned) -> Result<T>,
    {
        let mut garden = self.garden.lock().await;
        let now = self.now();

        let mut working = garden.clone();
        working.refresh(now.date());
        let output = command(&mut working, &now)?;

        let snapshot = working.snapshot();
        if snapshot != garden.snapshot() {
            persist(self.db_path.clone(), snapshot).await?;
        }
        *garden = working;
        Ok(output)
    }
}

async fn persist(db_path: PathBuf, snapshot: Snapshot) -> Result<()> {
    task::spawn_blocking(move || {
        let mut db = Database::new(&db_path)?;
        snapshot.save(&mut db)?;
        debug!("Saved snapshot to {}", db_path.display());
        Ok(())
    })
    .await
    .map_err(join_error)?
}

pub(crate) fn join_error(e: task::JoinError) -> GardenError {
    GardenError::Configuration {
        message: format!("Task join error: {e}"),
    }
}
