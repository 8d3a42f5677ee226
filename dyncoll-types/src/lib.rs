//! Core type definitions for dynamic collections.
//!
//! This crate defines the small, domain-agnostic value types shared by every
//! other crate in the workspace:
//! - Document and version identifiers (UUID v7)
//! - Semantic version numbers used to order collection snapshots
//!
//! Collection, field, and snapshot shapes live in `dyncoll-model`.

mod ids;
mod semver;

pub use ids::{DocumentId, VersionId};
pub use semver::SemanticVersion;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid semantic version: {0:?}")]
    InvalidVersion(String),
}
