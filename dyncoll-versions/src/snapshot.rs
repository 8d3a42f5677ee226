//! The local snapshot file read at startup.

use crate::error::StoreResult;
use dyncoll_model::Snapshot;
use std::path::Path;
use tracing::{debug, warn};

/// Reads the snapshot at `path`.
///
/// A missing, unreadable, or malformed file yields [`Snapshot::empty`];
/// startup never fails here.
pub async fn read_snapshot(path: &Path) -> Snapshot {
    let data = match tokio::fs::read_to_string(path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No snapshot file; starting from the empty version");
            return Snapshot::empty();
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Failed to read snapshot file; starting from the empty version"
            );
            return Snapshot::empty();
        }
    };

    match serde_json::from_str::<Option<Snapshot>>(&data) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => Snapshot::empty(),
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Malformed snapshot file; starting from the empty version"
            );
            Snapshot::empty()
        }
    }
}

/// Overwrites the snapshot at `path` with pretty-printed JSON.
pub async fn write_snapshot(path: &Path, snapshot: &Snapshot) -> StoreResult<()> {
    let data = serde_json::to_string_pretty(snapshot)?;
    tokio::fs::write(path, data).await?;
    debug!(path = %path.display(), version = %snapshot.version, "Wrote snapshot file");
    Ok(())
}
