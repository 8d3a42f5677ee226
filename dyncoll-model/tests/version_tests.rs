use dyncoll_model::{CurrentVersion, DynamicCollection, EMPTY_VERSION, Snapshot, Version};
use dyncoll_types::{SemanticVersion, VersionId};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn empty_snapshot_is_version_zero() {
    let snapshot = Snapshot::empty();
    assert_eq!(snapshot.version, EMPTY_VERSION);
    assert!(snapshot.is_empty_version());
    assert!(snapshot.collection_definitions.is_empty());
    assert_eq!(Snapshot::default(), snapshot);
}

#[test]
fn snapshot_from_version_copies_everything() {
    let version = Version::capture(
        SemanticVersion::new(1, 2, 0),
        vec![DynamicCollection::new("posts")],
    );
    let snapshot = Snapshot::from(&version);
    assert_eq!(snapshot.id, Some(version.id));
    assert_eq!(snapshot.version, "1.2.0");
    assert_eq!(snapshot.collection_definitions, version.collection_definitions);
    assert_eq!(snapshot.created_at, Some(version.created_at));
}

#[test]
fn snapshot_uses_camel_case_keys() {
    let version = Version::capture(SemanticVersion::new(0, 0, 1), Vec::new());
    let value = serde_json::to_value(Snapshot::from(version)).unwrap();
    assert!(value.get("collectionDefinitions").is_some());
    assert!(value.get("createdAt").is_some());
    assert_eq!(value["version"], json!("0.0.1"));
}

#[test]
fn snapshot_tolerates_missing_optional_keys() {
    let snapshot: Snapshot = serde_json::from_value(json!({"version": "0"})).unwrap();
    assert_eq!(snapshot, Snapshot::empty());
}

#[test]
fn version_rejects_non_semantic_label() {
    let raw = json!({
        "id": VersionId::new(),
        "version": "0",
        "collectionDefinitions": [],
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    });
    assert!(serde_json::from_value::<Version>(raw).is_err());
}

#[test]
fn current_version_defaults_to_unset() {
    let pointer: CurrentVersion = serde_json::from_value(json!({})).unwrap();
    assert_eq!(pointer.current_version, None);
}
