//! Predicate repository
//!
//! An insertion-ordered record list with scan-based lookup. There is no
//! uniqueness constraint, and not finding a match is a normal outcome.

use super::GroupIndex;
use crate::common::traits::{LookupCollection, ModelCollection};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// Ordered, non-unique record repository
#[derive(Debug)]
pub struct PredicateRepository<T> {
    items: Vec<Arc<T>>,
}

impl<T> PredicateRepository<T> {
    /// Create a new empty repository
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a model. Always succeeds.
    pub fn add(&mut self, model: T) {
        self.items.push(Arc::new(model));
    }

    /// Insertion-ordered snapshot of all models
    #[must_use]
    pub fn get_all(&self) -> Vec<Arc<T>> {
        self.items.clone()
    }

    /// First model, in insertion order, matching the predicate
    pub fn find_first<F>(&self, predicate: F) -> Option<Arc<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().find(|model| predicate(model)).cloned()
    }

    /// Remove the first model, in insertion order, matching the predicate
    ///
    /// Returns whether a model was removed.
    pub fn remove_first<F>(&mut self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        match self.items.iter().position(|model| predicate(model)) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Group a snapshot of this repository by `key_of`
    pub fn group_by<K, F>(&self, key_of: F) -> GroupIndex<K, T>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        GroupIndex::build(self.get_all(), key_of)
    }
}

impl<T> Default for PredicateRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PredicateRepository<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl<T: Debug> ModelCollection<T> for PredicateRepository<T> {
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
            .iter()
            .filter(|model| predicate(model))
            .cloned()
            .collect()
    }
}

impl<T: Debug> LookupCollection<T> for PredicateRepository<T> {
    // All methods are inherited from the default implementations
}
