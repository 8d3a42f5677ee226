//! Function registries the demo host offers to collection authors.

use dyncoll_derivation::PluginOptions;
use dyncoll_model::{CollectionHookKind, FieldHookKind, FieldKind};
use dyncoll_registry::{
    AccessArgs, CollectionHookFn, CollectionHookRegistries, FieldHookRegistries,
    FunctionRegistry, HiddenArgs, HookWithProps, PropField, PropsStructure, RegistryError,
    access_fn, collection_hook_fn, field_hook_fn, hidden_fn,
};
use serde_json::{Value, json};
use tracing::debug;

fn is_admin(user: Option<&Value>) -> bool {
    user.and_then(|u| u.get("role"))
        .and_then(Value::as_str)
        .is_some_and(|role| role == "admin")
}

/// Writes `fieldValue` into `fieldName` on every document passing through
/// the hook.
fn add_single_field() -> Result<HookWithProps<CollectionHookFn>, RegistryError> {
    let structure = PropsStructure::group(
        "addSingleField",
        vec![
            PropField::required("fieldName", FieldKind::Text),
            PropField::required("fieldValue", FieldKind::Json),
        ],
    )?;
    Ok(HookWithProps::new(structure, |props| {
        let name = props["fieldName"].as_str().unwrap_or_default().to_string();
        let value = props["fieldValue"].clone();
        collection_hook_fn(move |args| {
            let mut doc = args.doc.clone();
            if let Value::Object(map) = &mut doc {
                map.insert(name.clone(), value.clone());
            }
            doc
        })
    }))
}

/// The options the host boots the plugin with.
pub fn options() -> Result<PluginOptions, RegistryError> {
    let collection_hooks = CollectionHookRegistries::new()
        .with_function(
            CollectionHookKind::AfterRead,
            "logCollectionRead",
            collection_hook_fn(|args| {
                debug!(collection = %args.collection, "Document read");
                args.doc.clone()
            }),
        )
        .with_hook(
            CollectionHookKind::BeforeChange,
            "addSingleField",
            add_single_field()?,
        );

    let field_hooks = FieldHookRegistries::new().with_function(
        FieldHookKind::BeforeChange,
        "trimWhitespace",
        field_hook_fn(|args| match &args.value {
            Value::String(s) => json!(s.trim()),
            other => other.clone(),
        }),
    );

    let admin_only = access_fn(|args: &AccessArgs| is_admin(args.user.as_ref()));

    Ok(PluginOptions::new()
        .with_collection_access_functions(
            FunctionRegistry::new().with_function("isAdmin", admin_only.clone()),
        )
        .with_field_access_functions(FunctionRegistry::new().with_function("isAdmin", admin_only))
        .with_hidden_functions(FunctionRegistry::new().with_function(
            "nonAdmins",
            hidden_fn(|args: &HiddenArgs| !is_admin(args.user.as_ref())),
        ))
        .with_collection_hooks(collection_hooks)
        .with_field_hooks(field_hooks)
        .with_common_fields(vec![json!({
            "name": "createdBy",
            "type": "text",
            "admin": {"readOnly": true}
        })]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dyncoll_registry::{FieldHookArgs, HookArgs, RegistryEntry};

    #[test]
    fn add_single_field_sets_the_configured_field() {
        let options = options().unwrap();
        let entry = options
            .collection_hooks()
            .get(CollectionHookKind::BeforeChange)
            .get("addSingleField")
            .cloned()
            .unwrap();
        let RegistryEntry::WithProps(hook) = entry else {
            panic!("expected a hook with props");
        };
        let hook = hook
            .generate(&json!({"fieldName": "status", "fieldValue": "draft"}))
            .unwrap();
        let doc = hook(&HookArgs {
            collection: "posts".into(),
            operation: None,
            doc: json!({"title": "Hello"}),
            user: None,
        });
        assert_eq!(doc, json!({"title": "Hello", "status": "draft"}));
    }

    #[test]
    fn trim_whitespace_only_touches_strings() {
        let options = options().unwrap();
        let Some(RegistryEntry::Function(trim)) = options
            .field_hooks()
            .get(FieldHookKind::BeforeChange)
            .get("trimWhitespace")
            .cloned()
        else {
            panic!("expected trimWhitespace");
        };
        let args = |value| FieldHookArgs {
            field: "title".into(),
            value,
            doc: json!({}),
            user: None,
        };
        assert_eq!(trim(&args(json!("  hi "))), json!("hi"));
        assert_eq!(trim(&args(json!(3))), json!(3));
    }

    #[test]
    fn admin_checks_read_the_role() {
        assert!(is_admin(Some(&json!({"role": "admin"}))));
        assert!(!is_admin(Some(&json!({"role": "editor"}))));
        assert!(!is_admin(None));
    }
}
