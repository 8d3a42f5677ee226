//! Lookup-or-skip resolution of named selections.
//!
//! A selected name that is not registered resolves to nothing. Stale
//! references (a hook removed after a collection was authored) therefore
//! degrade to "no function attached" instead of failing derivation.

use crate::entry::RegistryEntry;
use crate::registry::FunctionRegistry;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Resolves a single selected name.
pub fn resolve_one<F: Clone>(registry: &FunctionRegistry<F>, selection: Option<&str>) -> Option<F> {
    let name = selection.filter(|name| !name.is_empty())?;
    let empty = Value::Object(Map::new());
    materialize(registry, name, &empty)
}

/// Resolves a list of selected names, preserving order.
///
/// Hooks with props take their payload from `props[name]` (an empty object
/// when absent). An explicit `null` payload, or one that fails the hook's
/// props structure, skips that hook. Returns `None` rather than an empty
/// list when nothing resolves.
pub fn resolve_many<F: Clone>(
    registry: &FunctionRegistry<F>,
    names: &[String],
    props: Option<&Map<String, Value>>,
) -> Option<Vec<F>> {
    let empty = Value::Object(Map::new());
    let resolved: Vec<F> = names
        .iter()
        .filter_map(|name| {
            let payload = props.and_then(|p| p.get(name)).unwrap_or(&empty);
            materialize(registry, name, payload)
        })
        .collect();

    (!resolved.is_empty()).then_some(resolved)
}

fn materialize<F: Clone>(registry: &FunctionRegistry<F>, name: &str, payload: &Value) -> Option<F> {
    match registry.get(name) {
        None => {
            debug!(name, "Selected function is not registered; leaving it unset");
            None
        }
        Some(RegistryEntry::Function(function)) => Some(function.clone()),
        Some(RegistryEntry::WithProps(_)) if payload.is_null() => {
            debug!(name, "No props supplied for hook; skipping");
            None
        }
        Some(RegistryEntry::WithProps(hook)) => match hook.generate(payload) {
            Ok(function) => Some(function),
            Err(e) => {
                warn!(name, error = %e, "Skipping hook with invalid props");
                None
            }
        },
    }
}
