use dyncoll_model::{DynamicCollection, Snapshot};
use dyncoll_versions::{
    CollectionStore, RolloutOutcome, RolloutWatcher, VersionStore, read_snapshot,
};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

async fn store_at(version: Option<&str>) -> Arc<CollectionStore> {
    let store = CollectionStore::open_in_memory();
    store.create_collection(DynamicCollection::new("posts")).await.unwrap();
    if let Some(version) = version {
        let created = store.create_version(version).await.unwrap();
        store.set_current_version(Some(created.id)).await.unwrap();
    }
    Arc::new(store)
}

#[tokio::test]
async fn in_sync_leaves_snapshot_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dynamicCollections.json");
    let store = store_at(Some("0.0.1")).await;

    let watcher = RolloutWatcher::new(store, &path, "0.0.1", Duration::from_millis(10));
    assert_eq!(watcher.check_once().await.unwrap(), RolloutOutcome::InSync);
    assert!(!path.exists());
}

#[tokio::test]
async fn unset_pointer_matches_empty_snapshot() {
    let dir = TempDir::new().unwrap();
    let store = store_at(None).await;
    let watcher = RolloutWatcher::new(
        store,
        dir.path().join("dynamicCollections.json"),
        "0",
        Duration::from_millis(10),
    );
    assert_eq!(watcher.check_once().await.unwrap(), RolloutOutcome::InSync);
}

#[tokio::test]
async fn drift_writes_target_and_requests_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dynamicCollections.json");
    let store = store_at(Some("0.2.0")).await;

    let watcher = RolloutWatcher::new(store, &path, "0", Duration::from_millis(10));
    assert_eq!(
        watcher.check_once().await.unwrap(),
        RolloutOutcome::RestartRequested {
            target: "0.2.0".into()
        }
    );

    let written = read_snapshot(&path).await;
    assert_eq!(written.version, "0.2.0");
    assert_eq!(written.collection_definitions[0].slug, "posts");
}

#[tokio::test]
async fn failed_write_still_requests_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("dynamicCollections.json");
    let store = store_at(Some("1.0.0")).await;

    let watcher = RolloutWatcher::new(store, &path, "0.9.0", Duration::from_millis(10));
    assert!(matches!(
        watcher.check_once().await.unwrap(),
        RolloutOutcome::RestartRequested { .. }
    ));
    assert!(!path.exists());
}

#[tokio::test]
async fn run_returns_once_pointer_moves() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dynamicCollections.json");
    let store = store_at(Some("0.0.1")).await;

    let watcher = RolloutWatcher::new(
        store.clone() as Arc<dyn VersionStore>,
        &path,
        "0.0.1",
        Duration::from_millis(10),
    );
    let handle = tokio::spawn(watcher.run());

    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(!handle.is_finished());

    let next = store.create_version("0.0.2").await.unwrap();
    store.set_current_version(Some(next.id)).await.unwrap();

    let outcome = tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        outcome,
        RolloutOutcome::RestartRequested {
            target: "0.0.2".into()
        }
    );
    assert_ne!(read_snapshot(&path).await, Snapshot::empty());
}
