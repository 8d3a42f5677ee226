//! Function registries for dynamic collections.
//!
//! Dynamic collections refer to behavior by name: access predicates,
//! admin visibility predicates, and lifecycle hooks. This crate holds the
//! name-keyed tables those names resolve against and the lookup-or-skip
//! resolver that turns a selection into concrete functions.
//!
//! Registries are built once at configuration time (built-ins merged with
//! caller entries, caller wins) and are read-only afterwards.

pub mod builtins;
mod entry;
mod error;
mod functions;
mod props;
mod registry;
mod resolve;

pub use entry::{HookWithProps, RegistryEntry};
pub use error::RegistryError;
pub use functions::{
    AccessArgs, AccessFn, CollectionHookFn, FieldHookArgs, FieldHookFn, HiddenArgs, HiddenFn,
    HookArgs, Operation, access_fn, collection_hook_fn, field_hook_fn, hidden_fn,
};
pub use props::{PropField, PropsShape, PropsStructure};
pub use registry::{CollectionHookRegistries, FieldHookRegistries, FunctionRegistry, HookRegistries};
pub use resolve::{resolve_many, resolve_one};
