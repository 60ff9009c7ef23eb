//! Common traits used across the codebase
//!
//! This module defines traits that are shared by the repository types to avoid
//! circular dependencies and provide clear interfaces.

pub mod collection;

// Re-export collection traits
pub use collection::{LookupCollection, ModelCollection};
