//! Framework-managed collections and global.
//!
//! The editor collection stores dynamic collection documents, the versions
//! collection stores snapshots, and the current-version global points at the
//! active snapshot. Their field lists describe the admin forms; select
//! options are filled from the registries so authors can only pick names
//! that resolve.

use dyncoll_derivation::{
    AdminConfig, CollectionAccess, CollectionConfig, GraphQlSetting, HookSet, PluginOptions,
};
use dyncoll_model::{AccessOperation, CollectionHookKind, FieldAccessOperation, FieldHookKind};
use dyncoll_registry::{AccessFn, builtins};
use serde_json::{Value, json};
use std::fmt;

pub const EDITOR_SLUG: &str = "dynamicCollection";
pub const VERSIONS_SLUG: &str = "versions";
pub const CURRENT_VERSION_SLUG: &str = "currentVersion";
pub const MANAGEMENT_GROUP: &str = "Dynamic Collection Configuration";

/// A singleton document installed alongside the collections.
#[derive(Clone)]
pub struct GlobalConfig {
    pub slug: String,
    pub group: Option<String>,
    pub fields: Vec<Value>,
    pub read: AccessFn,
    pub update: AccessFn,
}

impl GlobalConfig {
    pub fn describe(&self) -> Value {
        json!({
            "slug": self.slug,
            "admin": {"group": self.group},
            "fields": self.fields,
        })
    }
}

impl fmt::Debug for GlobalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalConfig")
            .field("slug", &self.slug)
            .field("group", &self.group)
            .field("fields", &self.fields.len())
            .finish_non_exhaustive()
    }
}

fn managed(
    slug: &str,
    use_as_title: &str,
    default_sort: Option<&str>,
    fields: Vec<Value>,
    access: CollectionAccess,
) -> CollectionConfig {
    CollectionConfig {
        slug: slug.to_string(),
        fields: Vec::new(),
        passthrough_fields: fields,
        labels: None,
        default_sort: default_sort.map(str::to_string),
        graphql: GraphQlSetting::Enabled {
            singular_name: None,
            plural_name: None,
        },
        admin: AdminConfig {
            use_as_title: use_as_title.to_string(),
            group: Some(MANAGEMENT_GROUP.to_string()),
            hidden: None,
        },
        access,
        hooks: HookSet::empty(),
    }
}

fn access_select(name: &str, options: &[String]) -> Value {
    json!({
        "name": name,
        "type": "select",
        "options": options,
        "defaultValue": builtins::ALL_USERS
    })
}

fn hook_select(name: &str, options: Vec<&str>) -> Value {
    json!({"name": name, "type": "select", "options": options, "hasMany": true})
}

/// The collection where authors edit dynamic collection documents.
pub fn editor_collection(options: &PluginOptions) -> CollectionConfig {
    let collection_access: Vec<String> = options
        .collection_access_functions()
        .names()
        .map(str::to_string)
        .collect();
    let field_access: Vec<String> = options
        .field_access_functions()
        .names()
        .map(str::to_string)
        .collect();
    let hidden: Vec<&str> = options.hidden_functions().names().collect();

    let field_hook_selects: Vec<Value> = FieldHookKind::ALL
        .into_iter()
        .map(|kind| (kind, options.field_hooks().get(kind)))
        .filter(|(_, registry)| !registry.is_empty())
        .map(|(kind, registry)| hook_select(kind.as_str(), registry.names().collect()))
        .collect();

    let field_access_selects: Vec<Value> = FieldAccessOperation::ALL
        .into_iter()
        .map(|op| access_select(op.as_str(), &field_access))
        .collect();
    let mut field_entry: Vec<Value> = vec![
        json!({
            "name": "def",
            "type": "json",
            "required": true,
            "defaultValue": {"name": "", "type": "text"}
        }),
        json!({"name": "hooks", "type": "group", "fields": field_hook_selects}),
        json!({"name": "access", "type": "group", "fields": field_access_selects}),
    ];
    field_entry.extend_from_slice(options.extra_field_data());

    let collection_hooks = options.collection_hooks();
    let mut hook_selects: Vec<Value> = CollectionHookKind::ALL
        .into_iter()
        .map(|kind| (kind, collection_hooks.get(kind)))
        .filter(|(_, registry)| !registry.is_empty())
        .map(|(kind, registry)| hook_select(kind.as_str(), registry.names().collect()))
        .collect();
    let hook_props: Vec<Value> = CollectionHookKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let props: Vec<Value> = collection_hooks
                .get(kind)
                .hooks_with_props()
                .map(|(name, hook)| {
                    let mut def = hook.props_structure().to_field_definition();
                    def["name"] = json!(name);
                    def
                })
                .collect();
            (!props.is_empty())
                .then(|| json!({"name": kind.as_str(), "type": "group", "fields": props}))
        })
        .collect();
    if !hook_props.is_empty() {
        hook_selects.push(json!({"name": "hookProps", "type": "group", "fields": hook_props}));
    }

    let access_selects: Vec<Value> = AccessOperation::ALL
        .into_iter()
        .map(|op| access_select(op.as_str(), &collection_access))
        .collect();
    let mut fields = vec![
        json!({"name": "slug", "type": "text", "required": true, "unique": true, "index": true}),
        json!({"name": "defaultSort", "type": "text"}),
        json!({"name": "labels", "type": "group", "fields": [
            {"name": "singular", "type": "text"},
            {"name": "plural", "type": "text"}
        ]}),
        json!({"name": "graphQL", "type": "group", "fields": [
            {"name": "singularName", "type": "text"},
            {"name": "pluralName", "type": "text"},
            {"name": "allow", "type": "checkbox", "defaultValue": true}
        ]}),
        json!({"name": "fields", "type": "array", "required": true, "fields": field_entry}),
        json!({"name": "group", "type": "text"}),
        json!({"name": "useAsTitle", "type": "text"}),
        json!({"name": "hidden", "type": "select", "options": hidden}),
        json!({"name": "access", "type": "group", "fields": access_selects}),
        json!({"name": "hooks", "type": "group", "fields": hook_selects}),
    ];
    fields.extend_from_slice(options.extra_collection_data());

    let access = options.access();
    managed(
        EDITOR_SLUG,
        "slug",
        None,
        fields,
        CollectionAccess::from_grants([
            (AccessOperation::Create, access.edit_collections.clone()),
            (AccessOperation::Read, access.view_collections.clone()),
            (AccessOperation::Update, access.edit_collections.clone()),
            (AccessOperation::Delete, access.edit_collections.clone()),
        ]),
    )
}

/// The version-history collection. `collectionDefinitions` is filled by the
/// store when a version is created and is read-only in the admin console.
pub fn versions_collection(options: &PluginOptions) -> CollectionConfig {
    let access = options.access();
    managed(
        VERSIONS_SLUG,
        "version",
        Some("-createdAt"),
        vec![
            json!({"name": "version", "type": "text", "required": true, "unique": true}),
            json!({
                "name": "collectionDefinitions",
                "type": "json",
                "defaultValue": [],
                "admin": {"readOnly": true}
            }),
        ],
        CollectionAccess::from_grants([
            (AccessOperation::Create, access.create_version.clone()),
            (AccessOperation::Read, access.view_versions.clone()),
            (AccessOperation::Update, access.create_version.clone()),
            (AccessOperation::Delete, access.create_version.clone()),
        ]),
    )
}

/// The global holding the current-version pointer.
pub fn current_version_global(options: &PluginOptions) -> GlobalConfig {
    let access = options.access();
    GlobalConfig {
        slug: CURRENT_VERSION_SLUG.to_string(),
        group: Some(MANAGEMENT_GROUP.to_string()),
        fields: vec![json!({
            "name": CURRENT_VERSION_SLUG,
            "type": "relationship",
            "relationTo": VERSIONS_SLUG
        })],
        read: access.view_versions.clone(),
        update: access.create_version.clone(),
    }
}
