//! Derived configuration objects handed to the host framework.
//!
//! Attached functions are opaque closures. [`CollectionConfig::describe`]
//! and [`FieldConfig::describe`] render a configuration as JSON, showing
//! each attached function only by the key it occupies.

use dyncoll_model::{
    AccessOperation, CollectionHookKind, FieldAccessOperation, FieldHookKind, Labels,
    SanitizedField,
};
use dyncoll_registry::{
    AccessFn, CollectionHookFn, FieldHookFn, FunctionRegistry, HiddenFn, HookRegistries,
    resolve_many, resolve_one,
};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::fmt;

/// Resolved access predicates keyed by operation. Operations with no
/// resolvable selection are absent.
#[derive(Clone)]
pub struct AccessSet<O> {
    grants: BTreeMap<O, AccessFn>,
}

pub type CollectionAccess = AccessSet<AccessOperation>;
pub type FieldAccess = AccessSet<FieldAccessOperation>;

impl<O: Ord + Copy + fmt::Display> AccessSet<O> {
    pub(crate) fn resolve<'a>(
        operations: impl IntoIterator<Item = O>,
        registry: &FunctionRegistry<AccessFn>,
        selected: impl Fn(O) -> Option<&'a str>,
    ) -> Self {
        let grants = operations
            .into_iter()
            .filter_map(|op| resolve_one(registry, selected(op)).map(|f| (op, f)))
            .collect();
        Self { grants }
    }

    /// Builds a set from already resolved predicates.
    pub fn from_grants(grants: impl IntoIterator<Item = (O, AccessFn)>) -> Self {
        Self {
            grants: grants.into_iter().collect(),
        }
    }

    pub fn get(&self, operation: O) -> Option<&AccessFn> {
        self.grants.get(&operation)
    }

    pub fn operations(&self) -> impl Iterator<Item = O> + '_ {
        self.grants.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    fn describe(&self) -> Value {
        Value::Array(self.operations().map(|op| json!(op.to_string())).collect())
    }
}

impl<O: fmt::Display> fmt::Debug for AccessSet<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.grants.keys().map(ToString::to_string))
            .finish()
    }
}

/// Resolved hooks keyed by slot, in selection order. Slots with nothing
/// resolvable are absent, never empty.
#[derive(Clone)]
pub struct HookSet<K, F> {
    slots: BTreeMap<K, Vec<F>>,
}

pub type CollectionHooks = HookSet<CollectionHookKind, CollectionHookFn>;
pub type FieldHooks = HookSet<FieldHookKind, FieldHookFn>;

impl<K: Ord + Copy + fmt::Display, F: Clone> HookSet<K, F> {
    pub(crate) fn resolve<'a>(
        kinds: impl IntoIterator<Item = K>,
        registries: &HookRegistries<K, F>,
        selected: impl Fn(K) -> (&'a [String], Option<&'a Map<String, Value>>),
    ) -> Self {
        let slots = kinds
            .into_iter()
            .filter_map(|kind| {
                let (names, props) = selected(kind);
                resolve_many(registries.get(kind), names, props).map(|hooks| (kind, hooks))
            })
            .collect();
        Self { slots }
    }

    pub fn empty() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Hooks attached to `kind`; empty when none.
    pub fn get(&self, kind: K) -> &[F] {
        self.slots.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn kinds(&self) -> impl Iterator<Item = K> + '_ {
        self.slots.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn describe(&self) -> Value {
        let slots: Map<String, Value> = self
            .slots
            .iter()
            .map(|(kind, hooks)| (kind.to_string(), json!(hooks.len())))
            .collect();
        Value::Object(slots)
    }
}

impl<K: fmt::Display, F> fmt::Debug for HookSet<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().map(|(k, v)| (k.to_string(), v.len())))
            .finish()
    }
}

/// One derived field.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub field: SanitizedField,
    pub access: FieldAccess,
    pub hooks: FieldHooks,
}

impl FieldConfig {
    /// The sanitized definition, plus `access` and `hooks` keys only when
    /// something is attached.
    pub fn describe(&self) -> Value {
        let mut value = self.field.to_value();
        if let Value::Object(map) = &mut value {
            if !self.access.is_empty() {
                map.insert("access".into(), self.access.describe());
            }
            if !self.hooks.is_empty() {
                map.insert("hooks".into(), self.hooks.describe());
            }
        }
        value
    }
}

/// GraphQL exposure of a derived collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphQlSetting {
    Disabled,
    Enabled {
        singular_name: Option<String>,
        plural_name: Option<String>,
    },
}

impl GraphQlSetting {
    fn describe(&self) -> Value {
        match self {
            Self::Disabled => Value::Bool(false),
            Self::Enabled {
                singular_name,
                plural_name,
            } => {
                let mut map = Map::new();
                if let Some(name) = singular_name {
                    map.insert("singularName".into(), json!(name));
                }
                if let Some(name) = plural_name {
                    map.insert("pluralName".into(), json!(name));
                }
                Value::Object(map)
            }
        }
    }
}

/// Admin console display options.
#[derive(Clone)]
pub struct AdminConfig {
    pub use_as_title: String,
    pub group: Option<String>,
    pub hidden: Option<HiddenFn>,
}

impl fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminConfig")
            .field("use_as_title", &self.use_as_title)
            .field("group", &self.group)
            .field("hidden", &self.hidden.is_some())
            .finish()
    }
}

/// One derived collection, ready to install.
#[derive(Debug, Clone)]
pub struct CollectionConfig {
    pub slug: String,
    pub fields: Vec<FieldConfig>,
    /// Field definitions appended at install time without derivation.
    pub passthrough_fields: Vec<Value>,
    pub labels: Option<Labels>,
    pub default_sort: Option<String>,
    pub graphql: GraphQlSetting,
    pub admin: AdminConfig,
    pub access: CollectionAccess,
    pub hooks: CollectionHooks,
}

impl CollectionConfig {
    /// Appends unprocessed field definitions after the derived fields.
    pub fn with_passthrough_fields(mut self, fields: &[Value]) -> Self {
        self.passthrough_fields.extend_from_slice(fields);
        self
    }

    pub fn describe(&self) -> Value {
        let fields: Vec<Value> = self
            .fields
            .iter()
            .map(FieldConfig::describe)
            .chain(self.passthrough_fields.iter().cloned())
            .collect();

        let mut admin = Map::new();
        admin.insert("useAsTitle".into(), json!(self.admin.use_as_title));
        if let Some(group) = &self.admin.group {
            admin.insert("group".into(), json!(group));
        }
        if self.admin.hidden.is_some() {
            admin.insert("hidden".into(), json!("hidden"));
        }

        let mut map = Map::new();
        map.insert("slug".into(), json!(self.slug));
        map.insert("fields".into(), Value::Array(fields));
        if let Some(labels) = &self.labels {
            map.insert("labels".into(), json!(labels));
        }
        if let Some(sort) = &self.default_sort {
            map.insert("defaultSort".into(), json!(sort));
        }
        map.insert("graphQL".into(), self.graphql.describe());
        map.insert("admin".into(), Value::Object(admin));
        map.insert("access".into(), self.access.describe());
        map.insert("hooks".into(), self.hooks.describe());
        Value::Object(map)
    }
}
