//! Derivation of host collection configurations from dynamic collections.
//!
//! A [`DynamicCollection`](dyncoll_model::DynamicCollection) is loosely typed
//! JSON as far as its field definitions go. Derivation runs in three steps:
//!
//! 1. [`validate`] checks every raw field definition against the closed set of
//!    [`FieldKind`](dyncoll_model::FieldKind)s and their required parameters.
//! 2. [`sanitize`] keeps only the attributes whitelisted for each kind and
//!    builds a typed [`SanitizedField`](dyncoll_model::SanitizedField) tree.
//! 3. [`derive_field`] and [`derive_collection`] resolve the named access,
//!    visibility, and hook selections against the registries carried by
//!    [`PluginOptions`].
//!
//! Derivation is pure: it reads its inputs and the registries and returns a
//! value. Registries are read-only once the options are built.

mod collection;
mod config;
mod error;
mod field;
mod options;
mod sanitize;
mod validate;

pub use collection::derive_collection;
pub use config::{
    AccessSet, AdminConfig, CollectionAccess, CollectionConfig, CollectionHooks, FieldAccess,
    FieldConfig, FieldHooks, GraphQlSetting, HookSet,
};
pub use error::{DerivationError, ValidationError};
pub use field::derive_field;
pub use options::{ManagementAccess, PluginOptions};
pub use sanitize::sanitize;
pub use validate::validate;
