//! Inventory entity models
//!
//! Warehouse stock items (electronics and groceries) and the timestamped
//! inventory records written by the inventory logger.

use super::traits::{EntityModel, Stocked};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An electronic product held in the warehouse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElectronicItem {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub brand: String,
    pub warranty_months: u32,
}

impl ElectronicItem {
    #[must_use]
    pub fn new(id: i32, name: &str, quantity: i32, brand: &str, warranty_months: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            quantity,
            brand: brand.to_string(),
            warranty_months,
        }
    }
}

impl EntityModel for ElectronicItem {
    type Id = i32;

    fn id(&self) -> &i32 {
        &self.id
    }
}

impl Stocked for ElectronicItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}

impl fmt::Display for ElectronicItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ElectronicItem(Id: {}, Name: {}, Qty: {}, Brand: {}, Warranty: {}m)",
            self.id, self.name, self.quantity, self.brand, self.warranty_months
        )
    }
}

/// A perishable grocery product held in the warehouse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroceryItem {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub expiry_date: NaiveDate,
}

impl GroceryItem {
    #[must_use]
    pub fn new(id: i32, name: &str, quantity: i32, expiry_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.to_string(),
            quantity,
            expiry_date,
        }
    }
}

impl EntityModel for GroceryItem {
    type Id = i32;

    fn id(&self) -> &i32 {
        &self.id
    }
}

impl Stocked for GroceryItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GroceryItem(Id: {}, Name: {}, Qty: {}, Expiry: {})",
            self.id,
            self.name,
            self.quantity,
            self.expiry_date.format("%Y-%m-%d")
        )
    }
}

/// An immutable inventory log entry, persisted as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub date_added: NaiveDateTime,
}

impl InventoryItem {
    #[must_use]
    pub fn new(id: i32, name: &str, quantity: i32, date_added: NaiveDateTime) -> Self {
        Self {
            id,
            name: name.to_string(),
            quantity,
            date_added,
        }
    }
}

impl EntityModel for InventoryItem {
    type Id = i32;

    fn id(&self) -> &i32 {
        &self.id
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Quantity: {}, Date Added: {}",
            self.id,
            self.name,
            self.quantity,
            self.date_added.format("%Y-%m-%d %H:%M:%S")
        )
    }
}
