//! Tests for the keyed repository
//!
//! These go through the public API only and check that every failed
//! operation leaves the store exactly as it was.

use crate::utils::{bread, phone};
use record_store::common::traits::{LookupCollection, ModelCollection};
use record_store::models::ElectronicItem;
use record_store::{KeyedRepository, StoreError};

fn snapshot_sorted(repo: &KeyedRepository<ElectronicItem>) -> Vec<ElectronicItem> {
    let mut items: Vec<ElectronicItem> = repo.get_all().iter().map(|i| (**i).clone()).collect();
    items.sort_by_key(|i| i.id);
    items
}

#[test]
fn test_add_then_get_returns_same_record() {
    let mut repo = KeyedRepository::new();
    let item = phone(1, 5);
    repo.add(item.clone()).unwrap();

    assert_eq!(*repo.get(&1).unwrap(), item);
    assert_eq!(repo.count(), 1);
}

#[test]
fn test_second_add_with_same_key_is_rejected() {
    let mut repo = KeyedRepository::new();
    repo.add(phone(1, 5)).unwrap();
    let before = snapshot_sorted(&repo);

    let err = repo
        .add(ElectronicItem::new(1, "Other", 99, "Dell", 6))
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey(_)));
    assert_eq!(err.message(), "item with ID 1 already exists");
    assert_eq!(snapshot_sorted(&repo), before);

    // Failure is repeatable
    assert!(matches!(repo.add(phone(1, 5)), Err(StoreError::DuplicateKey(_))));
}

#[test]
fn test_absent_key_operations_fail_with_not_found() {
    let mut repo = KeyedRepository::from_models(vec![phone(1, 5), phone(2, 6)]).unwrap();
    let before = snapshot_sorted(&repo);

    assert!(matches!(repo.get(&42), Err(StoreError::NotFound(_))));
    assert!(matches!(repo.remove(&42), Err(StoreError::NotFound(_))));
    assert!(matches!(repo.update_quantity(&42, 1), Err(StoreError::NotFound(_))));
    assert!(matches!(
        repo.update_with(&42, |item| {
            item.quantity = 1;
            Ok(())
        }),
        Err(StoreError::NotFound(_))
    ));

    assert_eq!(snapshot_sorted(&repo), before);
}

#[test]
fn test_invalid_quantity_leaves_value_unchanged() {
    let mut repo = KeyedRepository::from_models(vec![phone(1, 5)]).unwrap();

    let err = repo.update_quantity(&1, -1).unwrap_err();
    assert!(matches!(err, StoreError::InvalidValue(_)));
    assert_eq!(repo.get(&1).unwrap().quantity, 5);
}

#[test]
fn test_valid_quantity_changes_only_quantity() {
    let mut repo = KeyedRepository::from_models(vec![phone(1, 5)]).unwrap();

    repo.update_quantity(&1, 0).unwrap();
    let updated = repo.get(&1).unwrap();
    assert_eq!(*updated, ElectronicItem::new(1, "Smartphone", 0, "Tecno", 24));
}

#[test]
fn test_remove_is_not_idempotent() {
    let mut repo = KeyedRepository::from_models(vec![bread(7, 3)]).unwrap();

    let removed = repo.remove(&7).unwrap();
    assert_eq!(removed.id, 7);
    assert!(matches!(repo.get(&7), Err(StoreError::NotFound(_))));
    assert!(matches!(repo.remove(&7), Err(StoreError::NotFound(_))));
    assert!(repo.is_empty());
}

#[test]
fn test_get_all_is_a_snapshot() {
    let mut repo = KeyedRepository::from_models(vec![phone(1, 5), phone(2, 6)]).unwrap();
    let snapshot = repo.get_all();

    repo.add(phone(3, 7)).unwrap();
    repo.remove(&1).unwrap();
    repo.update_quantity(&2, 100).unwrap();

    assert_eq!(snapshot.len(), 2);
    let mut quantities: Vec<i32> = snapshot.iter().map(|i| i.quantity).collect();
    quantities.sort_unstable();
    assert_eq!(quantities, vec![5, 6]);
}

#[test]
fn test_update_with_rejects_key_change() {
    let mut repo = KeyedRepository::from_models(vec![phone(1, 5)]).unwrap();

    let err = repo
        .update_with(&1, |item| {
            item.id = 2;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidValue(_)));
    assert!(repo.contains(&1));
    assert!(!repo.contains(&2));
}

#[test]
fn test_lookup_by_brand() {
    let repo = KeyedRepository::from_models(vec![
        ElectronicItem::new(1, "Laptop", 2, "Dell", 12),
        ElectronicItem::new(2, "Monitor", 4, "Dell", 12),
        ElectronicItem::new(3, "Speaker", 9, "JBL", 18),
    ])
    .unwrap();

    let by_brand = repo.create_multi_lookup(|item| item.brand.clone());
    assert_eq!(by_brand.get(&"Dell".to_string()).len(), 2);
    assert_eq!(by_brand.get(&"JBL".to_string()).len(), 1);
    assert!(by_brand.get(&"Sony".to_string()).is_empty());

    let by_name = repo.create_lookup(|item| item.name.clone());
    assert_eq!(by_name["Speaker"].id, 3);
}
