use crate::entry::{HookWithProps, RegistryEntry};
use crate::functions::{CollectionHookFn, FieldHookFn};
use dyncoll_model::{CollectionHookKind, FieldHookKind};
use std::collections::BTreeMap;
use std::fmt;

/// Name-keyed table of functions of one signature.
///
/// Built with the `with_*` methods, then combined with [`merged`](Self::merged);
/// there is no way to mutate a registry once it is shared.
#[derive(Clone)]
pub struct FunctionRegistry<F> {
    entries: BTreeMap<String, RegistryEntry<F>>,
}

impl<F> FunctionRegistry<F> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) a bare function.
    pub fn with_function(mut self, name: impl Into<String>, function: F) -> Self {
        self.entries.insert(name.into(), RegistryEntry::Function(function));
        self
    }

    /// Adds (or replaces) a hook generator with props.
    pub fn with_hook(mut self, name: impl Into<String>, hook: HookWithProps<F>) -> Self {
        self.entries.insert(name.into(), RegistryEntry::WithProps(hook));
        self
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry<F>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries that are generators with props, by name.
    pub fn hooks_with_props(&self) -> impl Iterator<Item = (&str, &HookWithProps<F>)> {
        self.entries.iter().filter_map(|(name, entry)| match entry {
            RegistryEntry::WithProps(hook) => Some((name.as_str(), hook)),
            RegistryEntry::Function(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F: Clone> FunctionRegistry<F> {
    /// Returns `self` overlaid with `overrides`; on a name collision the
    /// override's entry wins.
    pub fn merged(&self, overrides: &Self) -> Self {
        let mut entries = self.entries.clone();
        for (name, entry) in &overrides.entries {
            entries.insert(name.clone(), entry.clone());
        }
        Self { entries }
    }
}

impl<F> Default for FunctionRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for FunctionRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

/// One registry per hook slot.
#[derive(Clone)]
pub struct HookRegistries<K, F> {
    slots: BTreeMap<K, FunctionRegistry<F>>,
    empty: FunctionRegistry<F>,
}

pub type CollectionHookRegistries = HookRegistries<CollectionHookKind, CollectionHookFn>;
pub type FieldHookRegistries = HookRegistries<FieldHookKind, FieldHookFn>;

impl<K: Ord + Copy, F> HookRegistries<K, F> {
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
            empty: FunctionRegistry::new(),
        }
    }

    /// Replaces the registry for one slot.
    pub fn with_slot(mut self, kind: K, registry: FunctionRegistry<F>) -> Self {
        self.slots.insert(kind, registry);
        self
    }

    /// Adds a bare hook to one slot.
    pub fn with_function(mut self, kind: K, name: impl Into<String>, function: F) -> Self {
        let slot = self.slots.remove(&kind).unwrap_or_default();
        self.slots.insert(kind, slot.with_function(name, function));
        self
    }

    /// Adds a hook with props to one slot.
    pub fn with_hook(mut self, kind: K, name: impl Into<String>, hook: HookWithProps<F>) -> Self {
        let slot = self.slots.remove(&kind).unwrap_or_default();
        self.slots.insert(kind, slot.with_hook(name, hook));
        self
    }

    /// The registry for `kind`; empty when nothing was registered.
    pub fn get(&self, kind: K) -> &FunctionRegistry<F> {
        self.slots.get(&kind).unwrap_or(&self.empty)
    }
}

impl<K: Ord + Copy, F> Default for HookRegistries<K, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, F> fmt::Debug for HookRegistries<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.slots.iter()).finish()
    }
}
