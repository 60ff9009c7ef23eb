//! Tests for the predicate repository

use crate::utils::prescription;
use record_store::PredicateRepository;
use record_store::common::traits::ModelCollection;
use record_store::models::Patient;

#[test]
fn test_duplicates_are_kept_in_insertion_order() {
    let mut repo = PredicateRepository::new();
    repo.add(Patient::new(1, "Ama Mensah", 29, "Female"));
    repo.add(Patient::new(1, "Ama Mensah", 29, "Female"));
    repo.add(Patient::new(2, "Kofi Boateng", 41, "Male"));

    let ids: Vec<i32> = repo.get_all().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 1, 2]);
}

#[test]
fn test_find_first_returns_earliest_match() {
    let repo: PredicateRepository<Patient> = vec![
        Patient::new(1, "Ama Mensah", 29, "Female"),
        Patient::new(2, "Kofi Boateng", 41, "Male"),
        Patient::new(3, "Yaw Owusu", 35, "Male"),
    ]
    .into_iter()
    .collect();

    assert_eq!(repo.find_first(|p| p.gender == "Male").unwrap().id, 2);
    assert!(repo.find_first(|p| p.age > 100).is_none());
}

#[test]
fn test_remove_first_removes_one_match() {
    let mut repo = PredicateRepository::new();
    repo.add(prescription(1, 10));
    repo.add(prescription(2, 10));

    assert!(repo.remove_first(|p| p.patient_id == 10));
    let remaining = repo.get_all();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 2);

    assert!(!repo.remove_first(|p| p.patient_id == 99));
    assert_eq!(repo.count(), 1);
}

#[test]
fn test_snapshot_survives_later_changes() {
    let mut repo = PredicateRepository::new();
    repo.add(prescription(1, 10));
    let snapshot = repo.get_all();

    repo.add(prescription(2, 11));
    repo.remove_first(|p| p.id == 1);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, 1);
}
