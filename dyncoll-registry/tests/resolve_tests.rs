use dyncoll_model::FieldKind;
use dyncoll_registry::*;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn tagged(tag: &'static str) -> CollectionHookFn {
    collection_hook_fn(move |_| json!(tag))
}

fn run(hook: &CollectionHookFn) -> Value {
    hook(&HookArgs {
        collection: "posts".into(),
        operation: None,
        doc: json!({}),
        user: None,
    })
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn add_single_field() -> HookWithProps<CollectionHookFn> {
    let structure = PropsStructure::group(
        "addSingleField",
        vec![
            PropField::required("fieldName", FieldKind::Text),
            PropField::required("fieldValue", FieldKind::Text),
        ],
    )
    .unwrap();
    HookWithProps::new(structure, |props: &Value| {
        let name = props["fieldName"].as_str().unwrap_or_default().to_string();
        let value = props["fieldValue"].clone();
        collection_hook_fn(move |args| {
            let mut doc = args.doc.clone();
            doc[name.as_str()] = value.clone();
            doc
        })
    })
}

// ── Single selection ─────────────────────────────────────────────

#[test]
fn single_registered_name_resolves() {
    let registry = builtins::collection_access();
    let open = resolve_one(&registry, Some("open")).unwrap();
    assert!(open(&AccessArgs::anonymous()));
}

#[test]
fn single_unregistered_name_resolves_to_nothing() {
    let registry = builtins::collection_access();
    assert!(resolve_one(&registry, Some("isAdmin")).is_none());
}

#[test]
fn absent_or_empty_selection_resolves_to_nothing() {
    let registry = builtins::collection_access();
    assert!(resolve_one(&registry, None).is_none());
    assert!(resolve_one(&registry, Some("")).is_none());
}

// ── List selection ───────────────────────────────────────────────

#[test]
fn list_drops_unregistered_names() {
    let registry = FunctionRegistry::new().with_function("a", tagged("a"));
    let resolved = resolve_many(&registry, &names(&["a", "ghost"]), None).unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(run(&resolved[0]), json!("a"));
}

#[test]
fn list_preserves_selection_order() {
    let registry = FunctionRegistry::new()
        .with_function("a", tagged("a"))
        .with_function("b", tagged("b"))
        .with_function("c", tagged("c"));
    let resolved = resolve_many(&registry, &names(&["c", "a", "b"]), None).unwrap();
    let tags: Vec<Value> = resolved.iter().map(run).collect();
    assert_eq!(tags, vec![json!("c"), json!("a"), json!("b")]);
}

#[test]
fn list_with_nothing_resolvable_is_none() {
    let registry = FunctionRegistry::new().with_function("a", tagged("a"));
    assert!(resolve_many(&registry, &names(&["ghost"]), None).is_none());
    assert!(resolve_many(&registry, &[], None).is_none());
}

// ── Hooks with props ─────────────────────────────────────────────

#[test]
fn hook_with_props_receives_its_payload() {
    let registry = FunctionRegistry::new().with_hook("addSingleField", add_single_field());
    let mut props = Map::new();
    props.insert(
        "addSingleField".into(),
        json!({"fieldName": "source", "fieldValue": "cms"}),
    );
    let resolved = resolve_many(&registry, &names(&["addSingleField"]), Some(&props)).unwrap();
    assert_eq!(run(&resolved[0]), json!({"source": "cms"}));
}

#[test]
fn hook_with_props_missing_payload_fails_validation_and_is_skipped() {
    let registry = FunctionRegistry::new().with_hook("addSingleField", add_single_field());
    assert!(resolve_many(&registry, &names(&["addSingleField"]), None).is_none());
}

#[test]
fn hook_with_null_payload_is_skipped() {
    let registry = FunctionRegistry::new()
        .with_hook("addSingleField", add_single_field())
        .with_function("basicHook", tagged("basic"));
    let mut props = Map::new();
    props.insert("addSingleField".into(), Value::Null);
    let resolved =
        resolve_many(&registry, &names(&["addSingleField", "basicHook"]), Some(&props)).unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(run(&resolved[0]), json!("basic"));
}

#[test]
fn hook_with_malformed_payload_is_skipped() {
    let registry = FunctionRegistry::new().with_hook("addSingleField", add_single_field());
    let mut props = Map::new();
    props.insert("addSingleField".into(), json!({"fieldName": 7, "fieldValue": "x"}));
    assert!(resolve_many(&registry, &names(&["addSingleField"]), Some(&props)).is_none());
}

#[test]
fn hook_with_optional_props_accepts_default_empty_object() {
    let structure =
        PropsStructure::group("tagged", vec![PropField::new("tag", FieldKind::Text)]).unwrap();
    let hook = HookWithProps::new(structure, |_| tagged("generated"));
    let registry = FunctionRegistry::new().with_hook("tagged", hook);
    let resolved = resolve_many(&registry, &names(&["tagged"]), None).unwrap();
    assert_eq!(run(&resolved[0]), json!("generated"));
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    /// Resolution never yields more functions than registered names selected,
    /// and selecting only unknown names yields nothing.
    #[test]
    fn resolution_only_includes_registered_names(
        registered in prop::collection::btree_set("[a-e]", 0..5),
        selected in prop::collection::vec("[a-h]", 0..8),
    ) {
        let registry = registered.iter().fold(FunctionRegistry::new(), |r, name| {
            let tag = name.clone();
            r.with_function(name.clone(), collection_hook_fn(move |_| json!(tag)))
        });
        let expected: Vec<Value> = selected
            .iter()
            .filter(|name| registered.contains(*name))
            .map(|name| json!(name))
            .collect();

        let resolved = resolve_many(&registry, &selected, None);
        match resolved {
            None => prop_assert!(expected.is_empty()),
            Some(list) => {
                let tags: Vec<Value> = list.iter().map(run).collect();
                prop_assert_eq!(tags, expected);
            }
        }
    }
}
