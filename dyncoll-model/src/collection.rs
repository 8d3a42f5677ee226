use crate::hooks::{AccessOperation, CollectionHookKind, FieldAccessOperation, FieldHookKind};
use chrono::{DateTime, Utc};
use dyncoll_types::DocumentId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Slugs a dynamic collection may not use.
pub const RESERVED_SLUGS: [&str; 2] = ["user", "collection"];

/// Checks a proposed slug against the reserved words.
/// Returns the user-facing message on rejection.
pub fn validate_slug(slug: &str) -> Result<(), String> {
    if RESERVED_SLUGS.contains(&slug) {
        return Err(format!(
            "Invalid slug: {slug}. Cannot be one of {}.",
            RESERVED_SLUGS.join(", ")
        ));
    }
    Ok(())
}

/// A user-authored collection schema, as stored in the editor collection
/// and captured inside version snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    #[serde(default, rename = "graphQL", skip_serializing_if = "Option::is_none")]
    pub graphql: Option<GraphQlOptions>,
    #[serde(default)]
    pub fields: Vec<FieldBinding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_as_title: Option<String>,
    /// Name of the visibility predicate deciding whether the collection is
    /// hidden in the admin console.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<CollectionAccessSelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<CollectionHookSelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl DynamicCollection {
    /// Creates an empty definition with the given slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Default::default()
        }
    }

    /// Appends a field binding (builder style).
    pub fn with_field(mut self, binding: FieldBinding) -> Self {
        self.fields.push(binding);
        self
    }
}

/// Display names for a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
}

/// GraphQL exposure settings as authored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub singular_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow: Option<bool>,
}

/// A raw field definition plus its named access and hook selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBinding {
    /// Loosely typed definition exactly as submitted.
    pub def: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<FieldHookSelection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<FieldAccessSelection>,
}

impl FieldBinding {
    /// A binding with no access or hook selections.
    pub fn new(def: Value) -> Self {
        Self {
            def,
            hooks: None,
            access: None,
        }
    }

    pub fn with_access(mut self, access: FieldAccessSelection) -> Self {
        self.access = Some(access);
        self
    }

    pub fn with_hooks(mut self, hooks: FieldHookSelection) -> Self {
        self.hooks = Some(hooks);
        self
    }
}

/// Named field access predicates, one per operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldAccessSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
}

impl FieldAccessSelection {
    pub fn get(&self, operation: FieldAccessOperation) -> Option<&str> {
        match operation {
            FieldAccessOperation::Create => self.create.as_deref(),
            FieldAccessOperation::Read => self.read.as_deref(),
            FieldAccessOperation::Update => self.update.as_deref(),
        }
    }
}

/// Named field hooks, a list per hook slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldHookSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_validate: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_change: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_change: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_read: Option<Vec<String>>,
}

impl FieldHookSelection {
    pub fn get(&self, kind: FieldHookKind) -> &[String] {
        let names = match kind {
            FieldHookKind::BeforeValidate => &self.before_validate,
            FieldHookKind::BeforeChange => &self.before_change,
            FieldHookKind::AfterChange => &self.after_change,
            FieldHookKind::AfterRead => &self.after_read,
        };
        names.as_deref().unwrap_or_default()
    }
}

/// Named collection access predicates, one per operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionAccessSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<String>,
}

impl CollectionAccessSelection {
    pub fn get(&self, operation: AccessOperation) -> Option<&str> {
        match operation {
            AccessOperation::Create => self.create.as_deref(),
            AccessOperation::Read => self.read.as_deref(),
            AccessOperation::Update => self.update.as_deref(),
            AccessOperation::Delete => self.delete.as_deref(),
        }
    }
}

/// Named collection hooks per slot, plus parameter payloads for hooks that
/// take props.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionHookSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_operation: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_validate: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_change: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_change: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_read: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_read: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_delete: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_delete: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_operation: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook_props: Option<HookProps>,
}

impl CollectionHookSelection {
    pub fn get(&self, kind: CollectionHookKind) -> &[String] {
        let names = match kind {
            CollectionHookKind::BeforeOperation => &self.before_operation,
            CollectionHookKind::BeforeValidate => &self.before_validate,
            CollectionHookKind::BeforeChange => &self.before_change,
            CollectionHookKind::AfterChange => &self.after_change,
            CollectionHookKind::BeforeRead => &self.before_read,
            CollectionHookKind::AfterRead => &self.after_read,
            CollectionHookKind::BeforeDelete => &self.before_delete,
            CollectionHookKind::AfterDelete => &self.after_delete,
            CollectionHookKind::AfterOperation => &self.after_operation,
        };
        names.as_deref().unwrap_or_default()
    }

    /// Parameter payloads recorded for one hook slot, keyed by hook name.
    pub fn props_for(&self, kind: CollectionHookKind) -> Option<&Map<String, Value>> {
        self.hook_props.as_ref().and_then(|props| props.get(kind))
    }
}

/// Parameter payloads for parameterized hooks, grouped by hook slot and
/// keyed by hook name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_operation: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_validate: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_change: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_change: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_read: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_read: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_delete: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_delete: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_operation: Option<Map<String, Value>>,
}

impl HookProps {
    pub fn get(&self, kind: CollectionHookKind) -> Option<&Map<String, Value>> {
        match kind {
            CollectionHookKind::BeforeOperation => self.before_operation.as_ref(),
            CollectionHookKind::BeforeValidate => self.before_validate.as_ref(),
            CollectionHookKind::BeforeChange => self.before_change.as_ref(),
            CollectionHookKind::AfterChange => self.after_change.as_ref(),
            CollectionHookKind::BeforeRead => self.before_read.as_ref(),
            CollectionHookKind::AfterRead => self.after_read.as_ref(),
            CollectionHookKind::BeforeDelete => self.before_delete.as_ref(),
            CollectionHookKind::AfterDelete => self.after_delete.as_ref(),
            CollectionHookKind::AfterOperation => self.after_operation.as_ref(),
        }
    }

    /// Records the payload for one hook.
    pub fn insert(
        &mut self,
        kind: CollectionHookKind,
        hook_name: impl Into<String>,
        payload: Value,
    ) {
        let slot = match kind {
            CollectionHookKind::BeforeOperation => &mut self.before_operation,
            CollectionHookKind::BeforeValidate => &mut self.before_validate,
            CollectionHookKind::BeforeChange => &mut self.before_change,
            CollectionHookKind::AfterChange => &mut self.after_change,
            CollectionHookKind::BeforeRead => &mut self.before_read,
            CollectionHookKind::AfterRead => &mut self.after_read,
            CollectionHookKind::BeforeDelete => &mut self.before_delete,
            CollectionHookKind::AfterDelete => &mut self.after_delete,
            CollectionHookKind::AfterOperation => &mut self.after_operation,
        };
        slot.get_or_insert_with(Map::new).insert(hook_name.into(), payload);
    }
}
