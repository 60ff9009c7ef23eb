//! Health entity models
//!
//! Patients and the prescriptions issued to them. Prescriptions reference their
//! patient through `patient_id`, which is the grouping key used to index them.

use super::traits::EntityModel;
use chrono::NaiveDate;
use std::fmt;

/// A registered patient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Patient {
    #[must_use]
    pub fn new(id: i32, name: &str, age: u32, gender: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            gender: gender.to_string(),
        }
    }
}

impl EntityModel for Patient {
    type Id = i32;

    fn id(&self) -> &i32 {
        &self.id
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient(Id: {}, Name: {}, Age: {}, Gender: {})",
            self.id, self.name, self.age, self.gender
        )
    }
}

/// A medication prescribed to a patient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prescription {
    pub id: i32,
    /// Identifier of the patient the prescription belongs to
    pub patient_id: i32,
    pub medication_name: String,
    pub date_issued: NaiveDate,
}

impl Prescription {
    #[must_use]
    pub fn new(id: i32, patient_id: i32, medication_name: &str, date_issued: NaiveDate) -> Self {
        Self {
            id,
            patient_id,
            medication_name: medication_name.to_string(),
            date_issued,
        }
    }
}

impl EntityModel for Prescription {
    type Id = i32;

    fn id(&self) -> &i32 {
        &self.id
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prescription(Id: {}, PatientId: {}, Medication: {}, DateIssued: {})",
            self.id,
            self.patient_id,
            self.medication_name,
            self.date_issued.format("%Y-%m-%d")
        )
    }
}
