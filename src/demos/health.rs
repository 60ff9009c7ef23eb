//! Health system demo
//!
//! Patients and prescriptions live in predicate repositories. Prescriptions are
//! looked up per patient through a group index that is rebuilt on demand.

use crate::collections::{GroupIndex, PredicateRepository};
use crate::common::traits::ModelCollection;
use crate::models::{Patient, Prescription};
use crate::utils::logging::{log_operation_complete, log_operation_start, print_section};
use chrono::{Days, NaiveDate};
use std::sync::Arc;

/// Patient registry with a per-patient prescription index
#[derive(Debug, Default)]
pub struct HealthSystemApp {
    patients: PredicateRepository<Patient>,
    prescriptions: PredicateRepository<Prescription>,
    prescription_map: GroupIndex<i32, Prescription>,
}

impl HealthSystemApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn patients(&self) -> &PredicateRepository<Patient> {
        &self.patients
    }

    #[must_use]
    pub fn prescriptions(&self) -> &PredicateRepository<Prescription> {
        &self.prescriptions
    }

    pub fn prescriptions_mut(&mut self) -> &mut PredicateRepository<Prescription> {
        &mut self.prescriptions
    }

    /// Seed three patients and five prescriptions issued up to ten days before `today`
    pub fn seed_data(&mut self, today: NaiveDate) {
        self.patients.add(Patient::new(1, "Ama Mensah", 29, "Female"));
        self.patients.add(Patient::new(2, "Kofi Boateng", 41, "Male"));
        self.patients.add(Patient::new(3, "Yaw Owusu", 35, "Male"));

        let days_ago = |days| today.checked_sub_days(Days::new(days)).unwrap_or(today);

        self.prescriptions
            .add(Prescription::new(101, 1, "Amoxicillin 500mg", days_ago(10)));
        self.prescriptions
            .add(Prescription::new(102, 1, "Vitamin C 1000mg", days_ago(7)));
        self.prescriptions
            .add(Prescription::new(103, 2, "Ibuprofen 200mg", days_ago(3)));
        self.prescriptions
            .add(Prescription::new(104, 2, "Paracetamol 500mg", days_ago(1)));
        self.prescriptions
            .add(Prescription::new(105, 3, "Loratadine 10mg", today));
    }

    /// Rebuild the prescription index from the current prescriptions
    pub fn build_prescription_map(&mut self) {
        log_operation_start("Indexing prescriptions for", "patients");
        self.prescription_map = self.prescriptions.group_by(|p| p.patient_id);
        log_operation_complete(
            "indexed",
            "patients",
            self.prescriptions.count(),
            None,
        );
    }

    /// Prescriptions of a patient as of the last index build
    #[must_use]
    pub fn prescriptions_for_patient(&self, patient_id: i32) -> Vec<Arc<Prescription>> {
        self.prescription_map.get(&patient_id)
    }

    #[must_use]
    pub fn find_patient(&self, patient_id: i32) -> Option<Arc<Patient>> {
        self.patients.find_first(|p| p.id == patient_id)
    }

    /// Remove a patient, returning whether one was removed
    ///
    /// Their prescriptions stay in place; the index is not touched.
    pub fn remove_patient(&mut self, patient_id: i32) -> bool {
        self.patients.remove_first(|p| p.id == patient_id)
    }

    pub fn print_all_patients(&self) {
        println!("=== All Patients ===");
        for patient in self.patients.get_all() {
            println!("{patient}");
        }
        println!();
    }

    pub fn print_prescriptions_for_patient(&self, patient_id: i32) {
        println!("=== Prescriptions for PatientId: {patient_id} ===");
        let prescriptions = self.prescriptions_for_patient(patient_id);
        if prescriptions.is_empty() {
            println!("No prescriptions found.");
        } else {
            for prescription in prescriptions {
                println!("{prescription}");
            }
        }
        println!();
    }
}

/// Run the health system demo
pub fn run(today: NaiveDate) -> anyhow::Result<()> {
    print_section("Healthcare System");

    let mut app = HealthSystemApp::new();
    app.seed_data(today);
    app.build_prescription_map();
    app.print_all_patients();
    app.print_prescriptions_for_patient(2);

    Ok(())
}
