use plantmission_core::{
    snapshot::keys, Database, GardenError, MemoryGateway, Snapshot, SnapshotGateway,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.slice_keys().expect("Failed to list keys").is_empty());
    assert_eq!(db.load_slice(keys::PLANTS).unwrap(), None);
}

#[test]
fn test_reopening_keeps_existing_slices() {
    let (temp_file, mut db) = create_test_db();
    db.save_slices(&[(keys::BEST_STREAK, "6".to_string())])
        .expect("Failed to write slice");
    drop(db);

    for _ in 0..2 {
        let db = Database::new(temp_file.path()).expect("Failed to reopen database");
        assert_eq!(db.load_slice(keys::BEST_STREAK).unwrap().as_deref(), Some("6"));
        assert_eq!(db.slice_keys().unwrap(), vec![keys::BEST_STREAK.to_string()]);
    }
}

#[test]
fn test_write_and_read_slices() {
    let (_temp_file, mut db) = create_test_db();

    db.save_slices(&[
        (keys::TOTAL_POINTS, "40".to_string()),
        (keys::CURRENT_STREAK, "2".to_string()),
    ])
    .expect("Failed to write slices");

    assert_eq!(db.load_slice(keys::TOTAL_POINTS).unwrap().as_deref(), Some("40"));
    assert_eq!(
        db.slice_keys().unwrap(),
        vec![keys::CURRENT_STREAK.to_string(), keys::TOTAL_POINTS.to_string()]
    );

    // Writing again replaces the value in place.
    db.save_slices(&[(keys::TOTAL_POINTS, "55".to_string())])
        .expect("Failed to overwrite slice");
    assert_eq!(db.load_slice(keys::TOTAL_POINTS).unwrap().as_deref(), Some("55"));
    assert_eq!(db.slice_keys().unwrap().len(), 2);
}

#[test]
fn test_snapshot_round_trip_through_sqlite() {
    let (temp_file, mut db) = create_test_db();

    let mut snapshot = Snapshot::default();
    snapshot.ledger.total_points = 25;
    snapshot.ledger.current_streak = 1;
    snapshot.ledger.best_streak = 4;
    snapshot.ledger.completed_mission_ids.insert(3);
    snapshot.save(&mut db).expect("Failed to save snapshot");
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let report = Snapshot::load(&db).expect("Failed to load snapshot");
    assert!(report.is_clean());
    assert_eq!(report.snapshot, snapshot);
    assert_eq!(db.slice_keys().unwrap().len(), keys::ALL.len());
}

#[test]
fn test_malformed_slice_is_reported_not_fatal() {
    let (_temp_file, mut db) = create_test_db();

    db.save_slices(&[
        (keys::PLANTS, "[]".to_string()),
        (keys::MISSIONS, "not json at all".to_string()),
        (keys::TOTAL_POINTS, "10".to_string()),
    ])
    .unwrap();

    let report = Snapshot::load(&db).expect("Load should not fail");
    assert_eq!(report.malformed.len(), 1);
    assert!(matches!(
        &report.malformed[0],
        GardenError::MalformedSnapshot { key, .. } if key == keys::MISSIONS
    ));
    assert!(report.snapshot.missions.is_empty());
    assert_eq!(report.snapshot.ledger.total_points, 10);
}

#[test]
fn test_memory_gateway_matches_database() {
    let (_temp_file, mut db) = create_test_db();
    let mut memory = MemoryGateway::new();

    let mut snapshot = Snapshot::default();
    snapshot.ledger.total_points = 5;
    snapshot.save(&mut db).unwrap();
    snapshot.save(&mut memory).unwrap();

    assert_eq!(memory.len(), keys::ALL.len());
    for key in keys::ALL {
        assert_eq!(memory.load_slice(key).unwrap(), db.load_slice(key).unwrap());
    }
}
