use dyncoll_derivation::{ValidationError, sanitize, validate};
use dyncoll_model::FieldKind;
use proptest::prelude::*;
use serde_json::{Value, json};

#[test]
fn text_field_is_valid() {
    assert_eq!(validate(&json!({"name": "title", "type": "text"})), Ok(FieldKind::Text));
}

#[test]
fn missing_name_or_type() {
    let expected = "Field definition must include string values for \"type\" and \"name\"";
    for raw in [
        json!({"type": "text"}),
        json!({"name": "title"}),
        json!({"name": 4, "type": "text"}),
        json!({"name": "title", "type": true}),
        json!({"name": "", "type": "text"}),
        json!("text"),
        Value::Null,
    ] {
        assert_eq!(validate(&raw).unwrap_err().to_string(), expected, "{raw}");
    }
}

#[test]
fn unknown_type_lists_every_kind() {
    let err = validate(&json!({"name": "body", "type": "richText"})).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidType {
            found: "richText".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "Invalid field type; must be one of text, textarea, email, code, json, number, date, point, checkbox, select, relationship, array, group"
    );
}

#[test]
fn select_requires_options() {
    let err = validate(&json!({"type": "select", "name": "status"})).unwrap_err();
    assert_eq!(err.to_string(), "Select field type requires parameter 'options'");
    assert!(validate(&json!({"type": "select", "name": "status", "options": null})).is_err());
    assert!(validate(&json!({"type": "select", "name": "status", "options": ["a"]})).is_ok());
}

#[test]
fn relationship_requires_relation_to() {
    let err = validate(&json!({"type": "relationship", "name": "author"})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Relationship field type requires parameter 'relationTo'"
    );
    let author = json!({"type": "relationship", "name": "author", "relationTo": "users"});
    assert!(validate(&author).is_ok());
}

#[test]
fn composites_require_non_empty_fields() {
    let err = validate(&json!({"type": "array", "name": "rows"})).unwrap_err();
    assert_eq!(err.to_string(), "Array field type requires parameter 'fields'");

    let err = validate(&json!({"type": "group", "name": "meta", "fields": []})).unwrap_err();
    assert_eq!(err.to_string(), "Group field type requires parameter 'fields'");

    let err = validate(&json!({"type": "group", "name": "meta", "fields": {"a": 1}})).unwrap_err();
    assert_eq!(err.to_string(), "Group field type requires parameter 'fields'");
}

#[test]
fn nested_validation_reports_first_failure_only() {
    let raw = json!({
        "type": "array",
        "name": "rows",
        "fields": [
            {"type": "text", "name": "ok"},
            {"type": "select", "name": "status"},
            {"type": "relationship", "name": "owner"},
        ]
    });
    assert_eq!(
        validate(&raw).unwrap_err().to_string(),
        "Select field type requires parameter 'options'"
    );
}

#[test]
fn deeply_nested_failure_surfaces() {
    let raw = json!({
        "type": "group",
        "name": "outer",
        "fields": [{
            "type": "array",
            "name": "inner",
            "fields": [{"type": "nope", "name": "x"}]
        }]
    });
    assert!(matches!(
        validate(&raw),
        Err(ValidationError::InvalidType { found }) if found == "nope"
    ));
}

fn any_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
        prop::sample::select(vec!["text", "array", "group", "select", "relationship", "bogus"])
            .prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(
                prop::sample::select(vec![
                    "name", "type", "fields", "options", "relationTo", "label",
                ])
                .prop_map(str::to_string),
                inner,
                0..5,
            )
            .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    /// Validation is total: every input yields a kind or a non-empty message,
    /// and sanitization accepts exactly what validation accepts.
    #[test]
    fn validation_is_total(raw in any_json()) {
        match validate(&raw) {
            Ok(_) => prop_assert!(sanitize(&raw).is_ok()),
            Err(e) => {
                prop_assert!(!e.to_string().is_empty());
                prop_assert_eq!(sanitize(&raw).unwrap_err(), e);
            }
        }
    }
}
