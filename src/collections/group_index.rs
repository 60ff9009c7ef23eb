//! Group index
//!
//! A one-shot grouping of records by a derived key, typically a foreign-key
//! field. The index owns its groups and is never updated after it is built;
//! rebuild it whenever the source changes.

use rustc_hash::FxHashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Records grouped by key, each group in source order
#[derive(Debug)]
pub struct GroupIndex<K, T> {
    groups: FxHashMap<K, Vec<Arc<T>>>,
}

impl<K: Eq + Hash, T> GroupIndex<K, T> {
    /// Build an index from `source`, bucketing each record under `key_of(record)`
    ///
    /// The source is consumed once, in order, and records keep that order
    /// within their group.
    pub fn build<I, F>(source: I, key_of: F) -> Self
    where
        I: IntoIterator<Item = Arc<T>>,
        F: Fn(&T) -> K,
    {
        let mut groups: FxHashMap<K, Vec<Arc<T>>> = FxHashMap::default();
        for record in source {
            groups.entry(key_of(&*record)).or_default().push(record);
        }
        Self { groups }
    }

    /// Copy of the group for `key`, empty if there is none
    #[must_use]
    pub fn get(&self, key: &K) -> Vec<Arc<T>> {
        self.groups.get(key).cloned().unwrap_or_default()
    }

    /// Number of groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<K, T> Default for GroupIndex<K, T> {
    fn default() -> Self {
        Self {
            groups: FxHashMap::default(),
        }
    }
}
