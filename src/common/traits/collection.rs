//! Standardized collection traits
//!
//! This module defines the read-side interface shared by the keyed and the
//! predicate repositories, so that snapshot, filtering and grouping code can be
//! written once for both.

use crate::collections::GroupIndex;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Core trait for model collections
///
/// Every method returns owned snapshots. Mutating the collection afterwards
/// never changes a previously returned vector.
pub trait ModelCollection<T>: std::fmt::Debug {
    /// Snapshot of all models in the collection
    fn all(&self) -> Vec<Arc<T>>;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool;

    /// Check whether the collection holds no models
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Trait for creating lookups from collections
///
/// Lookups are built from a snapshot and are never kept in sync with the
/// collection. Rebuild them after the collection changes.
pub trait LookupCollection<T>: ModelCollection<T> {
    /// Create a lookup map using a key function. The last model per key wins.
    fn create_lookup<K, F>(&self, key_fn: F) -> FxHashMap<K, Arc<T>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let models = self.all();
        let mut lookup = FxHashMap::with_capacity_and_hasher(models.len(), Default::default());
        for model in models {
            let key = key_fn(&*model);
            lookup.insert(key, model);
        }
        lookup
    }

    /// Group the collection's snapshot by a key function
    fn create_multi_lookup<K, F>(&self, key_fn: F) -> GroupIndex<K, T>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        GroupIndex::build(self.all(), |model: &T| key_fn(model))
    }
}
