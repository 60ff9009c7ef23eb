//! Warehouse inventory demo
//!
//! Two keyed repositories, one per item kind, with stock adjustments that
//! surface duplicate, missing and negative-quantity failures to the console.

use crate::collections::KeyedRepository;
use crate::common::traits::ModelCollection;
use crate::error::{Result, StoreError};
use crate::models::traits::Stocked;
use crate::models::{ElectronicItem, GroceryItem};
use crate::utils::logging::{
    log_operation_complete, log_operation_start, log_warning, print_failure, print_items,
    print_section, print_success,
};
use chrono::{Days, Months, NaiveDate};
use std::fmt::Display;
use std::sync::Arc;

/// Owner of the electronics and grocery repositories
#[derive(Debug, Default)]
pub struct WarehouseManager {
    electronics: KeyedRepository<ElectronicItem>,
    groceries: KeyedRepository<GroceryItem>,
}

impl WarehouseManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn electronics(&self) -> &KeyedRepository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut KeyedRepository<ElectronicItem> {
        &mut self.electronics
    }

    #[must_use]
    pub fn groceries(&self) -> &KeyedRepository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut KeyedRepository<GroceryItem> {
        &mut self.groceries
    }

    /// Seed three items of each kind, with grocery expiry dates relative to `today`
    pub fn seed_data(&mut self, today: NaiveDate) -> Result<()> {
        log_operation_start("Seeding", "warehouse");

        self.electronics
            .add(ElectronicItem::new(201, "Smartphone", 15, "Tecno", 24))?;
        self.electronics
            .add(ElectronicItem::new(202, "Laptop", 8, "Dell", 12))?;
        self.electronics
            .add(ElectronicItem::new(203, "Bluetooth Speaker", 25, "JBL", 18))?;

        let in_months = |months| today.checked_add_months(Months::new(months)).unwrap_or(today);
        let in_days = |days| today.checked_add_days(Days::new(days)).unwrap_or(today);

        self.groceries
            .add(GroceryItem::new(301, "Rice (5kg)", 40, in_months(8)))?;
        self.groceries
            .add(GroceryItem::new(302, "Milk (1L)", 60, in_days(30)))?;
        self.groceries
            .add(GroceryItem::new(303, "Bread", 20, in_days(3)))?;

        log_operation_complete(
            "seeded",
            "warehouse",
            self.electronics.count() + self.groceries.count(),
            None,
        );
        Ok(())
    }
}

/// Add `by` to the stored quantity of `id`, returning the new quantity
pub fn increase_stock<T: Stocked>(
    repo: &mut KeyedRepository<T>,
    id: &T::Id,
    by: i32,
) -> Result<i32> {
    let item = repo.get(id)?;
    let new_quantity = item
        .quantity()
        .checked_add(by)
        .ok_or_else(|| StoreError::invalid_value("quantity overflow"))?;
    repo.update_quantity(id, new_quantity)?;
    Ok(new_quantity)
}

/// Remove `id` from the repository, returning the removed item
pub fn remove_item_by_id<T: Stocked>(
    repo: &mut KeyedRepository<T>,
    id: &T::Id,
) -> Result<Arc<T>> {
    repo.remove(id)
}

/// Snapshot sorted by ID for stable console output
fn sorted_items<T>(repo: &KeyedRepository<T>) -> Vec<Arc<T>>
where
    T: Stocked,
    T::Id: Ord,
{
    let mut items = repo.get_all();
    items.sort_by(|a, b| a.id().cmp(b.id()));
    items
}

fn report<T: Display>(context: &str, outcome: Result<T>) {
    match outcome {
        Ok(value) => print_success(value),
        Err(err) => {
            log_warning(context, Some(&err));
            print_failure(context, err);
        }
    }
}

/// Run the warehouse demo
pub fn run(today: NaiveDate) -> anyhow::Result<()> {
    print_section("Warehouse Inventory System");

    let mut manager = WarehouseManager::new();
    manager.seed_data(today)?;

    println!("Groceries:");
    print_items(&sorted_items(manager.groceries()));
    println!();

    println!("Electronics:");
    print_items(&sorted_items(manager.electronics()));
    println!();

    println!("— Test: Add duplicate electronic item (ID 201) —");
    report(
        "Duplicate add blocked",
        manager
            .electronics_mut()
            .add(ElectronicItem::new(201, "Duplicate Phone", 5, "Tecno", 24))
            .map(|()| "duplicate added"),
    );
    println!();

    println!("— Test: Remove non-existent grocery item (ID 999) —");
    report(
        "Error removing item",
        remove_item_by_id(manager.groceries_mut(), &999)
            .map(|item| format!("Removed item with ID {}", item.id)),
    );
    println!();

    println!("— Test: Set invalid quantity (negative) on Electronic ID 202 —");
    report(
        "Invalid quantity blocked",
        manager
            .electronics_mut()
            .update_quantity(&202, -10)
            .map(|()| "invalid quantity accepted"),
    );
    println!();

    println!("— Increase stock normally (Electronic ID 203 by +7) —");
    report(
        "Error increasing stock",
        increase_stock(manager.electronics_mut(), &203, 7)
            .map(|quantity| format!("Stock increased: ID 203 → {quantity}")),
    );
    println!();

    Ok(())
}
