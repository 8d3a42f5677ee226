//! Parameter schemas for hooks that take props.
//!
//! A [`PropsStructure`] is declared alongside a hook generator. The admin
//! console renders it as an input, and payloads are checked against it
//! before the generator runs.

use crate::error::RegistryError;
use dyncoll_model::FieldKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Whether the payload is a single object or a list of objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropsShape {
    Group,
    Array,
}

/// One named property inside a props structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropField {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

impl PropField {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
        }
    }

    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        match self.kind {
            FieldKind::Text
            | FieldKind::Textarea
            | FieldKind::Email
            | FieldKind::Code
            | FieldKind::Date => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Checkbox => value.is_boolean(),
            FieldKind::Json => true,
            FieldKind::Point => value
                .as_array()
                .is_some_and(|coords| coords.len() == 2 && coords.iter().all(Value::is_number)),
            FieldKind::Select | FieldKind::Relationship => value.is_string() || value.is_array(),
            FieldKind::Array => value.is_array(),
            FieldKind::Group => value.is_object(),
        }
    }
}

/// Declared parameter schema of a hook with props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropsStructure {
    pub name: String,
    pub shape: PropsShape,
    pub fields: Vec<PropField>,
}

impl PropsStructure {
    /// A structure whose payload is one object.
    pub fn group(name: impl Into<String>, fields: Vec<PropField>) -> Result<Self, RegistryError> {
        Self::build(name.into(), PropsShape::Group, fields)
    }

    /// A structure whose payload is a list of objects.
    pub fn array(name: impl Into<String>, fields: Vec<PropField>) -> Result<Self, RegistryError> {
        Self::build(name.into(), PropsShape::Array, fields)
    }

    fn build(
        name: String,
        shape: PropsShape,
        fields: Vec<PropField>,
    ) -> Result<Self, RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::InvalidPropsStructure("name must not be empty".into()));
        }
        if fields.is_empty() {
            return Err(RegistryError::InvalidPropsStructure(format!(
                "'{name}' declares no fields"
            )));
        }
        for (i, field) in fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(RegistryError::InvalidPropsStructure(format!(
                    "'{name}' has a field with an empty name"
                )));
            }
            if fields[..i].iter().any(|other| other.name == field.name) {
                return Err(RegistryError::InvalidPropsStructure(format!(
                    "'{name}' declares field '{}' twice",
                    field.name
                )));
            }
        }
        Ok(Self { name, shape, fields })
    }

    /// Checks a payload against this structure.
    pub fn validate(&self, payload: &Value) -> Result<(), RegistryError> {
        match self.shape {
            PropsShape::Group => match payload.as_object() {
                Some(object) => self.validate_object(object),
                None => Err(self.mismatch("expected an object")),
            },
            PropsShape::Array => match payload.as_array() {
                Some(rows) => rows.iter().enumerate().try_for_each(|(i, row)| {
                    row.as_object()
                        .ok_or_else(|| self.mismatch(format!("row {i} is not an object")))
                        .and_then(|object| self.validate_object(object))
                }),
                None => Err(self.mismatch("expected a list")),
            },
        }
    }

    fn validate_object(&self, object: &Map<String, Value>) -> Result<(), RegistryError> {
        for field in &self.fields {
            match object.get(&field.name) {
                None | Some(Value::Null) if field.required => {
                    return Err(self.mismatch(format!("missing required '{}'", field.name)));
                }
                None | Some(Value::Null) => {}
                Some(value) if !field.accepts(value) => {
                    return Err(self.mismatch(format!(
                        "'{}' is not a valid {} value",
                        field.name, field.kind
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    fn mismatch(&self, reason: impl Into<String>) -> RegistryError {
        RegistryError::PropsMismatch {
            structure: self.name.clone(),
            reason: reason.into(),
        }
    }

    /// Renders the structure as an array or group field definition, the
    /// form the admin console uses to build the props input.
    pub fn to_field_definition(&self) -> Value {
        let fields: Vec<Value> = self
            .fields
            .iter()
            .map(|f| json!({"name": f.name, "type": f.kind.as_str(), "required": f.required}))
            .collect();
        let kind = match self.shape {
            PropsShape::Group => FieldKind::Group,
            PropsShape::Array => FieldKind::Array,
        };
        json!({"name": self.name, "type": kind.as_str(), "fields": fields})
    }
}
