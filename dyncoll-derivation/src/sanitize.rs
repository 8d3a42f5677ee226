use crate::error::ValidationError;
use crate::validate::validate;
use dyncoll_model::{FieldKind, FieldShape, SanitizedField};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Attributes carried by [`FieldShape`] rather than the attribute map.
const SHAPE_KEYS: [&str; 3] = ["options", "relationTo", "fields"];

/// Validates `raw`, then rebuilds it with only `name`, `type`, and the
/// attributes whitelisted for its kind. Nested fields of array and group
/// fields are sanitized the same way.
pub fn sanitize(raw: &Value) -> Result<SanitizedField, ValidationError> {
    validate(raw)?;
    build(raw)
}

fn build(raw: &Value) -> Result<SanitizedField, ValidationError> {
    let object = raw.as_object().ok_or(ValidationError::MissingTypeOrName)?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .ok_or(ValidationError::MissingTypeOrName)?;
    let tag = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ValidationError::MissingTypeOrName)?;
    let kind: FieldKind = tag.parse().map_err(|()| ValidationError::InvalidType {
        found: tag.to_string(),
    })?;

    let attributes: BTreeMap<String, Value> = object
        .iter()
        .filter(|(key, _)| kind.permits(key) && !SHAPE_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let shape = match kind {
        FieldKind::Select => FieldShape::Select {
            options: parameter(object, kind, "options")?,
        },
        FieldKind::Relationship => FieldShape::Relationship {
            relation_to: parameter(object, kind, "relationTo")?,
        },
        FieldKind::Array | FieldKind::Group => {
            let nested = parameter(object, kind, "fields")?;
            let fields = nested
                .as_array()
                .ok_or(ValidationError::MissingParameter {
                    kind,
                    parameter: "fields",
                })?
                .iter()
                .map(build)
                .collect::<Result<Vec<_>, _>>()?;
            FieldShape::Composite { fields }
        }
        _ => FieldShape::Plain,
    };

    Ok(SanitizedField {
        name: name.to_string(),
        kind,
        attributes,
        shape,
    })
}

fn parameter(
    object: &Map<String, Value>,
    kind: FieldKind,
    parameter: &'static str,
) -> Result<Value, ValidationError> {
    object
        .get(parameter)
        .filter(|value| !value.is_null())
        .cloned()
        .ok_or(ValidationError::MissingParameter { kind, parameter })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shape_keys_are_not_duplicated_into_attributes() {
        let field = sanitize(&json!({
            "name": "status",
            "type": "select",
            "options": ["draft", "published"],
            "hasMany": false,
        }))
        .unwrap();
        assert!(!field.attributes.contains_key("options"));
        assert_eq!(field.attributes.get("hasMany"), Some(&json!(false)));
    }

    #[test]
    fn build_rejects_non_object_children() {
        assert!(build(&json!({"name": "rows", "type": "array", "fields": [1]})).is_err());
    }
}
