//! Standardized record repositories
//!
//! This module provides the in-memory stores used by the demos:
//!
//! - [`KeyedRepository`] stores records under their unique identifier and
//!   rejects duplicates, missing keys and invalid field values with a
//!   [`StoreError`].
//! - [`PredicateRepository`] keeps records in insertion order without any
//!   uniqueness constraint and finds or removes them by predicate.
//! - [`GroupIndex`] is a snapshot grouping of records by a derived key.
//!
//! All of them are single-owner, synchronous structures. Records are held
//! behind `Arc`, so snapshots are cheap and updates replace the stored `Arc`
//! instead of mutating a value a snapshot may still reference.

pub mod group_index;
pub mod predicate;

pub use group_index::GroupIndex;
pub use predicate::PredicateRepository;

use crate::common::traits::{LookupCollection, ModelCollection};
use crate::error::{Result, StoreError};
use crate::models::traits::{EntityModel, Stocked};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Keyed record repository
///
/// Stores models in a hash map indexed by their ID. No two stored models share
/// an ID, and every stored model's ID equals the key it is stored under.
#[derive(Debug)]
pub struct KeyedRepository<T: EntityModel> {
    /// Models indexed by ID
    items: FxHashMap<T::Id, Arc<T>>,
}

impl<T: EntityModel> KeyedRepository<T> {
    /// Create a new empty repository
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: FxHashMap::default(),
        }
    }

    /// Create a repository from a vector of models
    ///
    /// Fails on the first duplicate ID.
    pub fn from_models(models: Vec<T>) -> Result<Self> {
        let mut repository = Self::new();
        for model in models {
            repository.add(model)?;
        }
        Ok(repository)
    }

    /// Insert a model whose ID is not yet stored
    pub fn add(&mut self, model: T) -> Result<()> {
        let id = model.id().clone();
        if self.items.contains_key(&id) {
            return Err(StoreError::duplicate_key(&id));
        }
        self.items.insert(id, Arc::new(model));
        Ok(())
    }

    /// Get the model stored under `id`
    pub fn get(&self, id: &T::Id) -> Result<Arc<T>> {
        self.items
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Remove the model stored under `id`, returning it
    pub fn remove(&mut self, id: &T::Id) -> Result<Arc<T>> {
        self.items.remove(id).ok_or_else(|| {
            StoreError::NotFound(format!("cannot remove: item with ID {id:?} was not found"))
        })
    }

    /// Update the model stored under `id` in place
    ///
    /// Existence is checked first, so a missing key always reports `NotFound`
    /// regardless of the new value. The update runs on a copy that only
    /// replaces the stored model when `update` succeeds; on error the stored
    /// model is untouched. An update that changes the model's ID is rejected
    /// with `InvalidValue`.
    pub fn update_with<F>(&mut self, id: &T::Id, update: F) -> Result<()>
    where
        F: FnOnce(&mut T) -> Result<()>,
    {
        let current = self
            .items
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(id))?;

        let mut updated = T::clone(&**current);
        update(&mut updated)?;
        if updated.id() != id {
            return Err(StoreError::invalid_value(format!(
                "update may not change the key of item {id:?}"
            )));
        }

        *current = Arc::new(updated);
        Ok(())
    }

    /// Snapshot of all stored models
    ///
    /// Order is unspecified but fixed within the returned vector.
    #[must_use]
    pub fn get_all(&self) -> Vec<Arc<T>> {
        self.items.values().cloned().collect()
    }

    /// Check if a model with the given ID is stored
    #[must_use]
    pub fn contains(&self, id: &T::Id) -> bool {
        self.items.contains_key(id)
    }

}

impl<T: Stocked> KeyedRepository<T> {
    /// Set the quantity of the model stored under `id`
    ///
    /// Fails with `NotFound` for a missing ID, then with `InvalidValue` for a
    /// negative quantity. No other field is touched.
    pub fn update_quantity(&mut self, id: &T::Id, new_quantity: i32) -> Result<()> {
        self.update_with(id, |item| {
            if new_quantity < 0 {
                return Err(StoreError::invalid_value("quantity cannot be negative"));
            }
            item.set_quantity(new_quantity);
            Ok(())
        })
    }
}

impl<T: EntityModel> Default for KeyedRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EntityModel> ModelCollection<T> for KeyedRepository<T> {
    fn all(&self) -> Vec<Arc<T>> {
        self.get_all()
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.items
            .values()
            .filter(|model| predicate(model))
            .cloned()
            .collect()
    }
}

impl<T: EntityModel> LookupCollection<T> for KeyedRepository<T> {
    // All methods are inherited from the default implementations
}
