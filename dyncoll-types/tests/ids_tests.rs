use dyncoll_types::{DocumentId, VersionId};
use std::collections::HashSet;
use std::str::FromStr;

// ── DocumentId ───────────────────────────────────────────────────

#[test]
fn document_id_new_is_unique() {
    let a = DocumentId::new();
    let b = DocumentId::new();
    assert_ne!(a, b);
}

#[test]
fn document_id_display_and_parse() {
    let id = DocumentId::new();
    let parsed = id.to_string().parse::<DocumentId>().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn document_id_parse_invalid() {
    assert!("not-a-uuid".parse::<DocumentId>().is_err());
    assert!(DocumentId::from_str("garbage").is_err());
}

#[test]
fn document_id_serializes_as_plain_string() {
    let id = DocumentId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
}

// ── VersionId ────────────────────────────────────────────────────

#[test]
fn version_id_hash_and_eq() {
    let id = VersionId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id);
    assert_eq!(set.len(), 1);
}

#[test]
fn version_ids_sort_by_creation() {
    let first = VersionId::new();
    let second = VersionId::new();
    assert!(first < second);
}

#[test]
fn version_id_from_str_roundtrip() {
    let id = VersionId::new();
    let parsed: VersionId = id.to_string().parse().unwrap();
    assert_eq!(id, parsed);
}
