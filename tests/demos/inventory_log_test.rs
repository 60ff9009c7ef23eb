//! Persistence tests for the inventory log

use chrono::NaiveDate;
use record_store::demos::{InventoryLogError, InventoryLogger};
use record_store::models::InventoryItem;

#[test]
fn test_run_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let now = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    record_store::demos::inventory_log::run(&path, now).unwrap();

    let mut logger: InventoryLogger<InventoryItem> = InventoryLogger::new(&path);
    logger.load_from_file().unwrap();
    let items = logger.get_all();
    assert_eq!(items.len(), 5);
    assert_eq!(items[4].name, "Headphones");
    assert_eq!(items[4].date_added, now);
}

#[test]
fn test_load_from_non_array_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, r#"{"Id": 1}"#).unwrap();

    let mut logger: InventoryLogger<InventoryItem> = InventoryLogger::new(&path);
    assert!(matches!(logger.load_from_file(), Err(InventoryLogError::Json { .. })));
    assert!(logger.get_all().is_empty());
}
