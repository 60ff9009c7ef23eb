//! Domain models for the record-keeping demos
//!
//! This module contains the record types stored in the repositories and the
//! traits that make them storable.

pub mod finance;
pub mod health;
pub mod inventory;
pub mod student;
pub mod traits;

// Re-export commonly used types
pub use finance::{Amount, Transaction};
pub use health::{Patient, Prescription};
pub use inventory::{ElectronicItem, GroceryItem, InventoryItem};
pub use student::{Grade, Student};
pub use traits::{EntityModel, Stocked};
