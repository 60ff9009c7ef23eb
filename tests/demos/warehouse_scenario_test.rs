//! End-to-end warehouse scenario

use crate::utils::fixed_today;
use record_store::StoreError;
use record_store::common::traits::ModelCollection;
use record_store::demos::WarehouseManager;
use record_store::demos::warehouse::{increase_stock, remove_item_by_id};
use record_store::models::ElectronicItem;

#[test]
fn test_duplicate_invalid_and_missing_operations() {
    let mut manager = WarehouseManager::new();
    manager.seed_data(fixed_today()).unwrap();

    let electronics = manager.electronics_mut();
    assert!(matches!(
        electronics.add(ElectronicItem::new(201, "Duplicate Phone", 5, "Tecno", 24)),
        Err(StoreError::DuplicateKey(_))
    ));
    assert_eq!(electronics.get(&201).unwrap().name, "Smartphone");

    assert!(matches!(
        electronics.update_quantity(&202, -10),
        Err(StoreError::InvalidValue(_))
    ));
    assert_eq!(electronics.get(&202).unwrap().quantity, 8);

    assert!(matches!(
        remove_item_by_id(manager.groceries_mut(), &999),
        Err(StoreError::NotFound(_))
    ));
    assert_eq!(manager.groceries().count(), 3);

    assert_eq!(increase_stock(manager.electronics_mut(), &203, 7).unwrap(), 32);
}

#[test]
fn test_demo_run_completes() {
    record_store::demos::warehouse::run(fixed_today()).unwrap();
}
