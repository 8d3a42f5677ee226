//! Versioning and rollout for dynamic collections.
//!
//! Provides persistent storage for dynamic collection documents, immutable
//! version snapshots, and the current-version pointer, plus the watcher that
//! detects when the running process has drifted from that pointer.
//!
//! # Architecture
//!
//! - [`VersionStore`] is the storage seam; [`CollectionStore`] implements it
//!   in memory or backed by a single JSON file
//! - Creating a version captures every collection document under the same
//!   write lock, so a version is always a complete point-in-time copy
//! - The snapshot file holds the version the process should load at its next
//!   start; [`RolloutWatcher`] rewrites it on drift and asks for a restart

mod error;
mod rules;
mod snapshot;
mod store;
mod watcher;

pub use error::{StoreError, StoreResult, VersionError};
pub use rules::{newest, suggest_next, validate_proposed};
pub use snapshot::{read_snapshot, write_snapshot};
pub use store::{CollectionStore, VersionStore};
pub use watcher::{RESTART_EXIT_CODE, RolloutOutcome, RolloutWatcher};
