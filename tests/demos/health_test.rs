//! Health demo tests

use crate::utils::{fixed_today, prescription};
use record_store::demos::HealthSystemApp;

#[test]
fn test_demo_run_completes() {
    record_store::demos::health::run(fixed_today()).unwrap();
}

#[test]
fn test_removed_patient_keeps_indexed_prescriptions() {
    let mut app = HealthSystemApp::new();
    app.seed_data(fixed_today());
    app.prescriptions_mut().add(prescription(106, 1));
    app.build_prescription_map();

    assert!(app.remove_patient(1));
    assert!(app.find_patient(1).is_none());

    let ids: Vec<i32> = app
        .prescriptions_for_patient(1)
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![101, 102, 106]);
}
