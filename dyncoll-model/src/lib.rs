//! Data model for dynamic collections.
//!
//! Defines the serde shapes that cross the persistence and API boundaries:
//! - [`FieldKind`] and [`SanitizedField`]: the closed set of supported field
//!   kinds and the strongly typed tree a raw field definition becomes
//! - [`DynamicCollection`] and [`FieldBinding`]: user-authored schemas with
//!   their named access, visibility, and hook selections
//! - [`Version`], [`Snapshot`], [`CurrentVersion`]: immutable version
//!   snapshots and the pointer selecting the active one
//!
//! These types carry no behavior beyond accessors; validation and derivation
//! live in `dyncoll-derivation`.

mod collection;
mod field;
mod hooks;
mod version;

pub use collection::{
    CollectionAccessSelection, CollectionHookSelection, DynamicCollection, FieldAccessSelection,
    FieldBinding, FieldHookSelection, GraphQlOptions, HookProps, Labels, RESERVED_SLUGS,
    validate_slug,
};
pub use field::{FieldKind, FieldShape, SanitizedField};
pub use hooks::{AccessOperation, CollectionHookKind, FieldAccessOperation, FieldHookKind};
pub use version::{CurrentVersion, EMPTY_VERSION, Snapshot, Version};
