//! Functions every registry starts with.
//!
//! Caller-supplied entries with the same name replace these.

use crate::functions::{AccessFn, HiddenFn, access_fn, hidden_fn};
use crate::registry::FunctionRegistry;

/// Access predicate granting every request.
pub const OPEN: &str = "open";
/// Access predicate granting any authenticated user.
pub const ALL_USERS: &str = "allUsers";
/// Visibility predicate that always hides the collection.
pub const ALWAYS: &str = "always";
/// Visibility predicate that never hides the collection.
pub const NEVER: &str = "never";

pub fn open() -> AccessFn {
    access_fn(|_| true)
}

pub fn all_users() -> AccessFn {
    access_fn(|args| args.user.as_ref().is_some_and(|user| !user.is_null()))
}

/// Built-in collection access predicates.
pub fn collection_access() -> FunctionRegistry<AccessFn> {
    FunctionRegistry::new()
        .with_function(OPEN, open())
        .with_function(ALL_USERS, all_users())
}

/// Built-in field access predicates. Same behavior as the collection
/// predicates, kept as a separate table so overrides stay independent.
pub fn field_access() -> FunctionRegistry<AccessFn> {
    collection_access()
}

/// Built-in admin visibility predicates.
pub fn hidden() -> FunctionRegistry<HiddenFn> {
    FunctionRegistry::new()
        .with_function(ALWAYS, hidden_fn(|_| true))
        .with_function(NEVER, hidden_fn(|_| false))
}
