//! Plugin options supplied by the host application.
//!
//! Registries hold closures, so options are built in code rather than read
//! from a settings file. Every registry setter merges over the built-ins;
//! on a name collision the caller's entry wins.

use dyncoll_registry::{
    AccessFn, CollectionHookRegistries, FieldHookRegistries, FunctionRegistry, HiddenFn, builtins,
};
use serde_json::Value;
use std::fmt;

/// Access predicates guarding the framework-managed editor and version
/// collections. Each defaults to the built-in `allUsers` predicate.
#[derive(Clone)]
pub struct ManagementAccess {
    pub create_version: AccessFn,
    pub edit_collections: AccessFn,
    pub view_versions: AccessFn,
    pub view_collections: AccessFn,
}

impl Default for ManagementAccess {
    fn default() -> Self {
        Self {
            create_version: builtins::all_users(),
            edit_collections: builtins::all_users(),
            view_versions: builtins::all_users(),
            view_collections: builtins::all_users(),
        }
    }
}

impl fmt::Debug for ManagementAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagementAccess").finish_non_exhaustive()
    }
}

/// Effective registries and passthrough data for derivation and install.
#[derive(Clone)]
pub struct PluginOptions {
    access: ManagementAccess,
    collection_access_functions: FunctionRegistry<AccessFn>,
    field_access_functions: FunctionRegistry<AccessFn>,
    hidden_functions: FunctionRegistry<HiddenFn>,
    collection_hooks: CollectionHookRegistries,
    field_hooks: FieldHookRegistries,
    common_fields: Vec<Value>,
    extra_collection_data: Vec<Value>,
    extra_field_data: Vec<Value>,
}

impl PluginOptions {
    /// Options holding only the built-in registries and no hooks.
    pub fn new() -> Self {
        Self {
            access: ManagementAccess::default(),
            collection_access_functions: builtins::collection_access(),
            field_access_functions: builtins::field_access(),
            hidden_functions: builtins::hidden(),
            collection_hooks: CollectionHookRegistries::new(),
            field_hooks: FieldHookRegistries::new(),
            common_fields: Vec::new(),
            extra_collection_data: Vec::new(),
            extra_field_data: Vec::new(),
        }
    }

    pub fn with_access(mut self, access: ManagementAccess) -> Self {
        self.access = access;
        self
    }

    pub fn with_collection_access_functions(
        mut self,
        functions: FunctionRegistry<AccessFn>,
    ) -> Self {
        self.collection_access_functions = self.collection_access_functions.merged(&functions);
        self
    }

    pub fn with_field_access_functions(mut self, functions: FunctionRegistry<AccessFn>) -> Self {
        self.field_access_functions = self.field_access_functions.merged(&functions);
        self
    }

    pub fn with_hidden_functions(mut self, functions: FunctionRegistry<HiddenFn>) -> Self {
        self.hidden_functions = self.hidden_functions.merged(&functions);
        self
    }

    /// Collection hooks have no built-ins; this replaces any previous set.
    pub fn with_collection_hooks(mut self, hooks: CollectionHookRegistries) -> Self {
        self.collection_hooks = hooks;
        self
    }

    /// Field hooks have no built-ins; this replaces any previous set.
    pub fn with_field_hooks(mut self, hooks: FieldHookRegistries) -> Self {
        self.field_hooks = hooks;
        self
    }

    /// Field definitions appended, unprocessed, to every installed dynamic
    /// collection.
    pub fn with_common_fields(mut self, fields: Vec<Value>) -> Self {
        self.common_fields = fields;
        self
    }

    /// Field definitions appended, unprocessed, to the editor collection.
    pub fn with_extra_collection_data(mut self, fields: Vec<Value>) -> Self {
        self.extra_collection_data = fields;
        self
    }

    /// Field definitions appended, unprocessed, to each entry of the editor
    /// collection's field list.
    pub fn with_extra_field_data(mut self, fields: Vec<Value>) -> Self {
        self.extra_field_data = fields;
        self
    }

    pub fn access(&self) -> &ManagementAccess {
        &self.access
    }

    pub fn collection_access_functions(&self) -> &FunctionRegistry<AccessFn> {
        &self.collection_access_functions
    }

    pub fn field_access_functions(&self) -> &FunctionRegistry<AccessFn> {
        &self.field_access_functions
    }

    pub fn hidden_functions(&self) -> &FunctionRegistry<HiddenFn> {
        &self.hidden_functions
    }

    pub fn collection_hooks(&self) -> &CollectionHookRegistries {
        &self.collection_hooks
    }

    pub fn field_hooks(&self) -> &FieldHookRegistries {
        &self.field_hooks
    }

    pub fn common_fields(&self) -> &[Value] {
        &self.common_fields
    }

    pub fn extra_collection_data(&self) -> &[Value] {
        &self.extra_collection_data
    }

    pub fn extra_field_data(&self) -> &[Value] {
        &self.extra_field_data
    }
}

impl Default for PluginOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PluginOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginOptions")
            .field("collection_access_functions", &self.collection_access_functions)
            .field("field_access_functions", &self.field_access_functions)
            .field("hidden_functions", &self.hidden_functions)
            .field("collection_hooks", &self.collection_hooks)
            .field("field_hooks", &self.field_hooks)
            .field("common_fields", &self.common_fields.len())
            .finish_non_exhaustive()
    }
}
