//! Signatures of the functions a registry can hold.
//!
//! Every function type is a shared, thread-safe closure so a registry can be
//! cloned into each derived configuration without copying behavior.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// The operation that triggered an access check or hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

/// Input to an access predicate.
#[derive(Debug, Clone, Default)]
pub struct AccessArgs {
    /// The authenticated user, if any.
    pub user: Option<Value>,
    /// Id of the document being accessed, when the operation targets one.
    pub id: Option<String>,
    /// Incoming data for create/update operations.
    pub data: Option<Value>,
}

impl AccessArgs {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user: Value) -> Self {
        Self {
            user: Some(user),
            ..Default::default()
        }
    }
}

/// Input to an admin visibility predicate.
#[derive(Debug, Clone, Default)]
pub struct HiddenArgs {
    pub user: Option<Value>,
}

/// Input to a collection lifecycle hook.
#[derive(Debug, Clone)]
pub struct HookArgs {
    pub collection: String,
    pub operation: Option<Operation>,
    pub doc: Value,
    pub user: Option<Value>,
}

/// Input to a field lifecycle hook.
#[derive(Debug, Clone)]
pub struct FieldHookArgs {
    pub field: String,
    pub value: Value,
    pub doc: Value,
    pub user: Option<Value>,
}

/// Grants or denies an operation on a collection or field.
pub type AccessFn = Arc<dyn Fn(&AccessArgs) -> bool + Send + Sync>;

/// Returns true when a collection should be hidden from the admin console.
pub type HiddenFn = Arc<dyn Fn(&HiddenArgs) -> bool + Send + Sync>;

/// Collection hook; returns the (possibly modified) document.
pub type CollectionHookFn = Arc<dyn Fn(&HookArgs) -> Value + Send + Sync>;

/// Field hook; returns the (possibly modified) field value.
pub type FieldHookFn = Arc<dyn Fn(&FieldHookArgs) -> Value + Send + Sync>;

pub fn access_fn(f: impl Fn(&AccessArgs) -> bool + Send + Sync + 'static) -> AccessFn {
    Arc::new(f)
}

pub fn hidden_fn(f: impl Fn(&HiddenArgs) -> bool + Send + Sync + 'static) -> HiddenFn {
    Arc::new(f)
}

pub fn collection_hook_fn(
    f: impl Fn(&HookArgs) -> Value + Send + Sync + 'static,
) -> CollectionHookFn {
    Arc::new(f)
}

pub fn field_hook_fn(f: impl Fn(&FieldHookArgs) -> Value + Send + Sync + 'static) -> FieldHookFn {
    Arc::new(f)
}
