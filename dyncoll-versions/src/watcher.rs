//! Drift detection between the loaded snapshot and the current pointer.
//!
//! The watcher never restarts anything itself. On drift it persists the
//! target snapshot and reports [`RolloutOutcome::RestartRequested`]; the
//! caller exits with [`RESTART_EXIT_CODE`] and an external supervisor
//! starts a fresh process that loads the new snapshot.

use crate::error::StoreResult;
use crate::snapshot::write_snapshot;
use crate::store::VersionStore;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Process exit status that asks the supervisor for a restart.
pub const RESTART_EXIT_CODE: i32 = 1;

/// Result of one drift check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RolloutOutcome {
    InSync,
    /// The current pointer selects `target`; the snapshot file has been
    /// rewritten (or the write was attempted) and the process should exit.
    RestartRequested { target: String },
}

pub struct RolloutWatcher {
    store: Arc<dyn VersionStore>,
    snapshot_path: PathBuf,
    loaded_version: String,
    interval: Duration,
}

impl RolloutWatcher {
    pub fn new(
        store: Arc<dyn VersionStore>,
        snapshot_path: impl Into<PathBuf>,
        loaded_version: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self {
            store,
            snapshot_path: snapshot_path.into(),
            loaded_version: loaded_version.into(),
            interval,
        }
    }

    /// Compares the loaded version with the current pointer once.
    ///
    /// On drift the target snapshot is written to the snapshot path. A failed
    /// write is logged and the restart is still requested; the next start
    /// reads the previous file and the watcher detects drift again.
    pub async fn check_once(&self) -> StoreResult<RolloutOutcome> {
        let target = self.store.current_snapshot().await?;
        if target.version == self.loaded_version {
            return Ok(RolloutOutcome::InSync);
        }

        if let Err(e) = write_snapshot(&self.snapshot_path, &target).await {
            error!(
                path = %self.snapshot_path.display(),
                error = %e,
                "Failed to write dynamic collections snapshot"
            );
        }
        info!(
            "Outdated dynamic collections detected; updating to version {}",
            target.version
        );
        Ok(RolloutOutcome::RestartRequested {
            target: target.version,
        })
    }

    /// Checks on every tick until drift is found, then returns the outcome.
    /// Store errors are logged and the next tick tries again.
    pub async fn run(self) -> RolloutOutcome {
        let mut ticker = tokio::time::interval(self.interval);
        loop {
            ticker.tick().await;
            match self.check_once().await {
                Ok(RolloutOutcome::InSync) => {}
                Ok(outcome) => return outcome,
                Err(e) => warn!(error = %e, "Failed to read current dynamic collections version"),
            }
        }
    }
}
