use dyncoll_model::{FieldKind, FieldShape, SanitizedField};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::BTreeMap;

// ── FieldKind ────────────────────────────────────────────────────

#[test]
fn kind_tags_roundtrip_through_from_str() {
    for kind in FieldKind::ALL {
        assert_eq!(kind.as_str().parse::<FieldKind>(), Ok(kind));
    }
}

#[test]
fn unknown_tag_does_not_parse() {
    assert!("richText".parse::<FieldKind>().is_err());
    assert!("Text".parse::<FieldKind>().is_err());
}

#[test]
fn tag_list_names_every_kind() {
    assert_eq!(
        FieldKind::tag_list(),
        "text, textarea, email, code, json, number, date, point, checkbox, select, relationship, array, group"
    );
}

#[test]
fn only_array_and_group_are_composite() {
    let composite: Vec<FieldKind> = FieldKind::ALL
        .into_iter()
        .filter(FieldKind::is_composite)
        .collect();
    assert_eq!(composite, vec![FieldKind::Array, FieldKind::Group]);
}

#[test]
fn required_attributes_are_whitelisted_for_their_kind() {
    assert!(FieldKind::Select.permits("options"));
    assert!(FieldKind::Relationship.permits("relationTo"));
    assert!(FieldKind::Array.permits("fields"));
    assert!(FieldKind::Group.permits("fields"));
    assert!(!FieldKind::Text.permits("options"));
    assert!(!FieldKind::Text.permits("fields"));
}

#[test]
fn whitelists_never_contain_name_or_type() {
    for kind in FieldKind::ALL {
        assert!(!kind.permits("name"));
        assert!(!kind.permits("type"));
    }
}

#[test]
fn kind_serde_is_lowercase_tag() {
    assert_eq!(serde_json::to_value(FieldKind::Relationship).unwrap(), json!("relationship"));
}

// ── SanitizedField ───────────────────────────────────────────────

#[test]
fn plain_field_renders_name_type_and_attributes() {
    let mut attributes = BTreeMap::new();
    attributes.insert("required".to_string(), json!(true));
    let field = SanitizedField {
        name: "title".into(),
        kind: FieldKind::Text,
        attributes,
        shape: FieldShape::Plain,
    };
    assert_eq!(field.to_value(), json!({"name": "title", "type": "text", "required": true}));
    assert!(field.children().is_empty());
}

#[test]
fn composite_field_renders_children() {
    let child = SanitizedField {
        name: "street".into(),
        kind: FieldKind::Text,
        attributes: BTreeMap::new(),
        shape: FieldShape::Plain,
    };
    let field = SanitizedField {
        name: "address".into(),
        kind: FieldKind::Group,
        attributes: BTreeMap::new(),
        shape: FieldShape::Composite { fields: vec![child] },
    };
    assert_eq!(field.children().len(), 1);
    assert_eq!(
        serde_json::to_value(&field).unwrap(),
        json!({
            "name": "address",
            "type": "group",
            "fields": [{"name": "street", "type": "text"}]
        })
    );
}

#[test]
fn select_and_relationship_render_required_keys() {
    let select = SanitizedField {
        name: "status".into(),
        kind: FieldKind::Select,
        attributes: BTreeMap::new(),
        shape: FieldShape::Select { options: json!(["draft", "live"]) },
    };
    assert_eq!(select.to_value()["options"], json!(["draft", "live"]));

    let relation = SanitizedField {
        name: "author".into(),
        kind: FieldKind::Relationship,
        attributes: BTreeMap::new(),
        shape: FieldShape::Relationship { relation_to: json!("users") },
    };
    assert_eq!(relation.to_value()["relationTo"], json!("users"));
}
