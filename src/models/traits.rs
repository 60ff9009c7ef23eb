//! Trait definitions for domain models
//!
//! This module defines the traits that stored records implement, providing
//! identifier access for keyed storage and the designated mutable quantity field.

use std::fmt::Debug;
use std::hash::Hash;

/// A trait that all stored records implement.
///
/// The identifier returned by [`EntityModel::id`] is the record's key in a
/// keyed repository. It must not change while the record is stored.
pub trait EntityModel: Clone + Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> &Self::Id;
}

/// A record that carries a stock quantity.
///
/// The quantity is the one field a keyed repository mutates in place.
pub trait Stocked: EntityModel {
    /// Display name of the record
    fn name(&self) -> &str;

    /// Current quantity
    fn quantity(&self) -> i32;

    /// Overwrite the quantity. Validation happens in the repository.
    fn set_quantity(&mut self, quantity: i32);
}
