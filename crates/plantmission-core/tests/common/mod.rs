use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use plantmission_core::{Keeper, KeeperBuilder};
use tempfile::TempDir;

/// Helper function to create a temporary directory and database path
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("garden.db");
    (temp_dir, db_path)
}

/// Helper function to open a keeper on `db_path`
pub async fn open_keeper(db_path: &Path) -> Keeper {
    KeeperBuilder::new()
        .with_database_path(Some(db_path))
        .with_time_zone(TimeZone::UTC)
        .build()
        .await
        .expect("Failed to create keeper")
}
