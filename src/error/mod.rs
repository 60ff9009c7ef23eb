//! Error handling for the record repositories.
//!
//! Every failure raised by a repository is one of three kinds. None of them is
//! resolved internally; they are returned to the immediate caller, which decides
//! whether to skip the operation or abort. Absence in predicate lookups and
//! group-index lookups is not an error and never produces a `StoreError`.

/// Errors raised by keyed repository operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A record with the same key is already stored
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// No record is stored under the requested key
    #[error("not found: {0}")]
    NotFound(String),

    /// A new field value violates the field's domain constraint
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl StoreError {
    /// Build a `DuplicateKey` error for the given key
    pub fn duplicate_key(key: &impl std::fmt::Debug) -> Self {
        Self::DuplicateKey(format!("item with ID {key:?} already exists"))
    }

    /// Build a `NotFound` error for the given key
    pub fn not_found(key: &impl std::fmt::Debug) -> Self {
        Self::NotFound(format!("item with ID {key:?} was not found"))
    }

    /// Build an `InvalidValue` error with a free-form reason
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue(reason.into())
    }

    /// The message payload without the kind prefix
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::DuplicateKey(msg) | Self::NotFound(msg) | Self::InvalidValue(msg) => msg,
        }
    }
}

/// Result type for repository operations
pub type Result<T> = std::result::Result<T, StoreError>;
