//! Builder for creating and configuring Keeper instances.

use std::path::{Path, PathBuf};

use jiff::{tz::TimeZone, Zoned};
use log::{info, warn};
use tokio::task;

use super::{join_error, Keeper};
use crate::{
    config::{GardenConfig, MissionPolicy, StreakRule},
    error::{GardenError, Result},
    garden::Garden,
    snapshot::Snapshot,
    store::Database,
};

/// Builder for creating and configuring Keeper instances.
#[derive(Debug, Clone)]
pub struct KeeperBuilder {
    database_path: Option<PathBuf>,
    config: GardenConfig,
    time_zone: Option<TimeZone>,
}

impl KeeperBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            config: GardenConfig::default(),
            time_zone: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/plantmission/garden.db` or
    /// `~/.local/share/plantmission/garden.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Replaces the mission rewards and cadences.
    pub fn with_policy(mut self, policy: MissionPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn with_streak_rule(mut self, rule: StreakRule) -> Self {
        self.config.streak_rule = rule;
        self
    }

    /// Sets the zone that decides calendar days. Defaults to the system zone.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    /// Opens the database, loads the last snapshot and builds the keeper.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::FileSystem` if the database directory cannot be
    /// created and `GardenError::Database` if the database cannot be opened.
    /// Malformed slices and duplicate active missions are not errors; see
    /// [`Keeper::load_issues`].
    pub async fn build(self) -> Result<Keeper> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GardenError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        let report = task::spawn_blocking(move || {
            let db = Database::new(&db_path_clone)?;
            Snapshot::load(&db)
        })
        .await
        .map_err(join_error)??;

        let load_issues: Vec<String> = report
            .malformed
            .iter()
            .map(|e| match e {
                GardenError::MalformedSnapshot { .. } => format!("{e}; the slice was reset"),
                _ => e.to_string(),
            })
            .collect();
        if !load_issues.is_empty() {
            warn!(
                "Loaded {} with {} load issue(s)",
                db_path.display(),
                load_issues.len()
            );
        }

        let time_zone = self.time_zone.unwrap_or_else(TimeZone::system);
        let today = Zoned::now().with_time_zone(time_zone.clone()).date();
        let garden = Garden::from_report(report, self.config, today);
        info!(
            "Opened garden at {} ({} plants, {} missions)",
            db_path.display(),
            garden.plants().len(),
            garden.missions().len()
        );

        Ok(Keeper::new(db_path, time_zone, garden, load_issues))
    }

    /// Returns the default database path following the XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("plantmission")
            .place_data_file("garden.db")
            .map_err(|e| GardenError::XdgDirectory(e.to_string()))
    }
}

impl Default for KeeperBuilder {
    fn default() -> Self {
        Self::new()
    }
}
