//! Error types for the version store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Why a proposed version number was rejected. The `Display` strings are
/// shown inline next to the submitted value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Version number must be a valid semantic version")]
    Invalid(String),

    #[error("Version numbers must only increase; the most recent version is {newest}")]
    NotIncreasing { proposed: String, newest: String },

    #[error("No patch version follows {0}; choose a higher minor or major version")]
    NoPatchSuccessor(String),
}

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document or version not found.
    #[error("entity not found: {0}")]
    NotFound(String),

    /// Slug is one of the reserved words.
    #[error("{0}")]
    ReservedSlug(String),

    #[error("Collection slug must not be empty")]
    EmptySlug,

    #[error("A dynamic collection with slug {0} already exists")]
    DuplicateSlug(String),

    /// Rejected version number.
    #[error(transparent)]
    Version(#[from] VersionError),
}
