//! Checks that CLI output matches the core's Display implementations.

use std::process::Command;

use jiff::tz::TimeZone;
use plantmission_core::{params::AddPlant, Keeper, KeeperBuilder};
use tempfile::TempDir;

/// Helper function to create a test keeper with temporary database
async fn create_test_keeper() -> (Keeper, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let keeper = KeeperBuilder::new()
        .with_database_path(Some(db_path))
        .with_time_zone(TimeZone::system())
        .build()
        .await
        .expect("Failed to create keeper");

    (keeper, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_plantmission"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_plant_list_display_consistency() {
    let (keeper, temp_dir) = create_test_keeper().await;
    keeper
        .add_plant(&AddPlant {
            name: "Peace Lily".to_string(),
            room: Some("Study".to_string()),
            last_watered: Some("2 days ago".to_string()),
            watering_interval_days: 5,
            ..AddPlant::default()
        })
        .await
        .expect("Failed to add plant");
    let expected = keeper.list_plants().await.unwrap().to_string();
    drop(keeper);

    let db_path = temp_dir.path().join("test.db");
    let cli_output = run_cli_command(db_path.to_str().unwrap(), &["plant", "list"]);

    assert_eq!(cli_output, format!("# Plants\n\n{expected}"));
}

#[tokio::test]
async fn test_profile_display_consistency() {
    let (keeper, temp_dir) = create_test_keeper().await;
    let expected = keeper.profile().await.unwrap().to_string();
    drop(keeper);

    let db_path = temp_dir.path().join("test.db");
    let cli_output = run_cli_command(db_path.to_str().unwrap(), &["profile"]);

    assert_eq!(cli_output, expected);
}
