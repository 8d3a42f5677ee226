use crate::error::ValidationError;
use dyncoll_model::FieldKind;
use serde_json::Value;

/// Checks a raw field definition and returns its kind.
///
/// Requires string `name` and `type`, a known `type`, and the parameters the
/// kind needs: a non-empty `fields` list for array and group (checked
/// recursively), `relationTo` for relationship, `options` for select. Nested
/// fields are checked in order and the first failure is returned.
pub fn validate(raw: &Value) -> Result<FieldKind, ValidationError> {
    let tag = raw.get("type").and_then(Value::as_str);
    let name = raw.get("name").and_then(Value::as_str);
    let (Some(tag), Some(name)) = (tag, name) else {
        return Err(ValidationError::MissingTypeOrName);
    };
    if name.is_empty() {
        return Err(ValidationError::MissingTypeOrName);
    }

    let kind: FieldKind = tag.parse().map_err(|()| ValidationError::InvalidType {
        found: tag.to_string(),
    })?;

    match kind {
        kind if kind.is_composite() => {
            let nested = raw
                .get("fields")
                .and_then(Value::as_array)
                .filter(|fields| !fields.is_empty())
                .ok_or(ValidationError::MissingParameter {
                    kind,
                    parameter: "fields",
                })?;
            for child in nested {
                validate(child)?;
            }
        }
        FieldKind::Relationship => require(raw, kind, "relationTo")?,
        FieldKind::Select => require(raw, kind, "options")?,
        _ => {}
    }

    Ok(kind)
}

fn require(raw: &Value, kind: FieldKind, parameter: &'static str) -> Result<(), ValidationError> {
    match raw.get(parameter) {
        Some(value) if !value.is_null() => Ok(()),
        _ => Err(ValidationError::MissingParameter { kind, parameter }),
    }
}
