use crate::config::{
    AdminConfig, CollectionAccess, CollectionConfig, CollectionHooks, GraphQlSetting,
};
use crate::error::DerivationError;
use crate::field::derive_field;
use crate::options::PluginOptions;
use dyncoll_model::{
    AccessOperation, CollectionHookKind, DynamicCollection, GraphQlOptions, Labels,
};
use dyncoll_registry::resolve_one;
use tracing::debug;

const DEFAULT_USE_AS_TITLE: &str = "id";

/// Derives a whole dynamic collection.
///
/// Every field is derived; if any fails, the errors are combined into one
/// [`DerivationError::Fields`] and no configuration is produced.
pub fn derive_collection(
    collection: &DynamicCollection,
    options: &PluginOptions,
) -> Result<CollectionConfig, DerivationError> {
    let mut fields = Vec::with_capacity(collection.fields.len());
    let mut errors = Vec::new();
    for binding in &collection.fields {
        match derive_field(binding, options) {
            Ok(field) => fields.push(field),
            Err(e) => errors.push(e),
        }
    }
    if !errors.is_empty() {
        return Err(DerivationError::Fields(errors));
    }

    let access_selection = collection.access.as_ref();
    let access = CollectionAccess::resolve(
        AccessOperation::ALL,
        options.collection_access_functions(),
        move |op| access_selection.and_then(|selection| selection.get(op)),
    );

    let hook_selection = collection.hooks.as_ref();
    let hooks = CollectionHooks::resolve(
        CollectionHookKind::ALL,
        options.collection_hooks(),
        move |kind| {
            let names = hook_selection
                .map(|selection| selection.get(kind))
                .unwrap_or_default();
            let props = hook_selection.and_then(|selection| selection.props_for(kind));
            (names, props)
        },
    );

    let admin = AdminConfig {
        use_as_title: non_empty(collection.use_as_title.as_deref())
            .unwrap_or(DEFAULT_USE_AS_TITLE)
            .to_string(),
        group: non_empty(collection.group.as_deref()).map(str::to_string),
        hidden: resolve_one(options.hidden_functions(), collection.hidden.as_deref()),
    };

    debug!(
        slug = %collection.slug,
        fields = fields.len(),
        "Derived dynamic collection"
    );

    Ok(CollectionConfig {
        slug: collection.slug.clone(),
        fields,
        passthrough_fields: Vec::new(),
        labels: sanitize_labels(collection.labels.as_ref()),
        default_sort: non_empty(collection.default_sort.as_deref()).map(str::to_string),
        graphql: sanitize_graphql(collection.graphql.as_ref()),
        admin,
        access,
        hooks,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn sanitize_labels(labels: Option<&Labels>) -> Option<Labels> {
    let labels = labels?;
    let singular = non_empty(labels.singular.as_deref()).map(str::to_string);
    let plural = non_empty(labels.plural.as_deref()).map(str::to_string);
    if singular.is_none() && plural.is_none() {
        return None;
    }
    Some(Labels { singular, plural })
}

fn sanitize_graphql(graphql: Option<&GraphQlOptions>) -> GraphQlSetting {
    match graphql {
        Some(options) if options.allow == Some(true) => GraphQlSetting::Enabled {
            singular_name: non_empty(options.singular_name.as_deref()).map(str::to_string),
            plural_name: non_empty(options.plural_name.as_deref()).map(str::to_string),
        },
        _ => GraphQlSetting::Disabled,
    }
}
