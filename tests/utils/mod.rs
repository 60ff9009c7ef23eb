//! Shared fixtures for the integration tests

use chrono::NaiveDate;
use record_store::models::{ElectronicItem, GroceryItem, Prescription};

/// Fixed reference date so expiry and issue dates are deterministic
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn phone(id: i32, quantity: i32) -> ElectronicItem {
    ElectronicItem::new(id, "Smartphone", quantity, "Tecno", 24)
}

pub fn bread(id: i32, quantity: i32) -> GroceryItem {
    GroceryItem::new(id, "Bread", quantity, fixed_today())
}

pub fn prescription(id: i32, patient_id: i32) -> Prescription {
    Prescription::new(id, patient_id, "Ibuprofen 200mg", fixed_today())
}
