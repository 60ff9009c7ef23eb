//! In-memory record repositories with typed failures.
//!
//! The core consists of three structures:
//! - [`KeyedRepository`]: records addressed by a unique key, with
//!   add/get/remove/update operations that fail with a [`StoreError`].
//! - [`PredicateRepository`]: an insertion-ordered list searched by predicate.
//! - [`GroupIndex`]: a snapshot grouping of records by a derived key.
//!
//! The [`demos`] module builds small record-keeping applications on top of
//! them (warehouse stock, patient prescriptions, finance, grading, inventory
//! logging).

pub mod collections;
pub mod common;
pub mod config;
pub mod demos;
pub mod error;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
pub use collections::{GroupIndex, KeyedRepository, PredicateRepository};
pub use common::traits::{LookupCollection, ModelCollection};
pub use config::AppConfig;
pub use error::{Result, StoreError};
pub use models::{EntityModel, Stocked};
