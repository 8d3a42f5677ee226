use crate::config::{FieldAccess, FieldConfig, FieldHooks};
use crate::error::ValidationError;
use crate::options::PluginOptions;
use crate::sanitize::sanitize;
use dyncoll_model::{FieldAccessOperation, FieldBinding, FieldHookKind};

/// Derives one field binding.
///
/// The raw definition is validated and sanitized first; a failure there is
/// returned as is and nothing is resolved. Access and hook selections that
/// name unregistered functions are dropped.
pub fn derive_field(
    binding: &FieldBinding,
    options: &PluginOptions,
) -> Result<FieldConfig, ValidationError> {
    let field = sanitize(&binding.def)?;

    let access_selection = binding.access.as_ref();
    let access = FieldAccess::resolve(
        FieldAccessOperation::ALL,
        options.field_access_functions(),
        move |op| access_selection.and_then(|selection| selection.get(op)),
    );

    let hook_selection = binding.hooks.as_ref();
    let hooks = FieldHooks::resolve(FieldHookKind::ALL, options.field_hooks(), move |kind| {
        let names = hook_selection
            .map(|selection| selection.get(kind))
            .unwrap_or_default();
        (names, None)
    });

    Ok(FieldConfig {
        field,
        access,
        hooks,
    })
}
