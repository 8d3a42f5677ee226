use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The closed set of field kinds a dynamic collection may declare.
///
/// Anything outside this set is rejected when a raw definition is validated,
/// so everything downstream of validation works on a known kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Email,
    Code,
    Json,
    Number,
    Date,
    Point,
    Checkbox,
    Select,
    Relationship,
    Array,
    Group,
}

const TEXT_ATTRS: &[&str] = &[
    "label", "required", "unique", "index", "defaultValue", "hidden", "localized", "saveToJWT",
    "admin", "minLength", "maxLength", "hasMany",
];
const TEXTAREA_ATTRS: &[&str] = &[
    "label", "required", "unique", "index", "defaultValue", "hidden", "localized", "saveToJWT",
    "admin", "minLength", "maxLength",
];
const SCALAR_ATTRS: &[&str] = &[
    "label", "required", "unique", "index", "defaultValue", "hidden", "localized", "saveToJWT",
    "admin",
];
const NUMBER_ATTRS: &[&str] = &[
    "label", "required", "unique", "index", "defaultValue", "hidden", "localized", "saveToJWT",
    "admin", "min", "max", "hasMany", "minRows", "maxRows",
];
const SELECT_ATTRS: &[&str] = &[
    "label", "required", "unique", "index", "defaultValue", "hidden", "localized", "saveToJWT",
    "admin", "options", "hasMany",
];
const RELATIONSHIP_ATTRS: &[&str] = &[
    "label", "required", "unique", "index", "defaultValue", "hidden", "localized", "saveToJWT",
    "admin", "relationTo", "hasMany", "maxDepth", "min", "max",
];
const ARRAY_ATTRS: &[&str] = &[
    "label", "required", "defaultValue", "hidden", "localized", "saveToJWT", "admin", "fields",
    "minRows", "maxRows", "labels", "interfaceName",
];
const GROUP_ATTRS: &[&str] = &[
    "label", "defaultValue", "hidden", "localized", "saveToJWT", "admin", "fields",
    "interfaceName",
];

impl FieldKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [FieldKind; 13] = [
        Self::Text,
        Self::Textarea,
        Self::Email,
        Self::Code,
        Self::Json,
        Self::Number,
        Self::Date,
        Self::Point,
        Self::Checkbox,
        Self::Select,
        Self::Relationship,
        Self::Array,
        Self::Group,
    ];

    /// The `type` tag used in JSON definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Email => "email",
            Self::Code => "code",
            Self::Json => "json",
            Self::Number => "number",
            Self::Date => "date",
            Self::Point => "point",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::Relationship => "relationship",
            Self::Array => "array",
            Self::Group => "group",
        }
    }

    /// Attribute names (besides `name` and `type`) that survive sanitization
    /// for this kind.
    pub fn permitted_attributes(&self) -> &'static [&'static str] {
        match self {
            Self::Text => TEXT_ATTRS,
            Self::Textarea => TEXTAREA_ATTRS,
            Self::Email | Self::Code | Self::Json | Self::Date | Self::Point | Self::Checkbox => {
                SCALAR_ATTRS
            }
            Self::Number => NUMBER_ATTRS,
            Self::Select => SELECT_ATTRS,
            Self::Relationship => RELATIONSHIP_ATTRS,
            Self::Array => ARRAY_ATTRS,
            Self::Group => GROUP_ATTRS,
        }
    }

    /// Returns true if `attribute` is whitelisted for this kind.
    pub fn permits(&self, attribute: &str) -> bool {
        self.permitted_attributes().contains(&attribute)
    }

    /// Array and group fields nest a list of child fields.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Array | Self::Group)
    }

    /// Comma-separated list of all type tags, for error messages.
    pub fn tag_list() -> String {
        Self::ALL
            .iter()
            .map(FieldKind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s).ok_or(())
    }
}

/// A field definition after validation and whitelist sanitization.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedField {
    pub name: String,
    pub kind: FieldKind,
    /// Whitelisted, kind-appropriate attributes other than the ones carried
    /// by `shape`.
    pub attributes: BTreeMap<String, Value>,
    pub shape: FieldShape,
}

/// The kind-specific required part of a sanitized field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldShape {
    Plain,
    Select { options: Value },
    Relationship { relation_to: Value },
    Composite { fields: Vec<SanitizedField> },
}

impl SanitizedField {
    /// Nested fields of an array or group field.
    pub fn children(&self) -> &[SanitizedField] {
        match &self.shape {
            FieldShape::Composite { fields } => fields,
            _ => &[],
        }
    }

    /// Renders the field back into the JSON definition shape
    /// (`{"name": .., "type": .., ...attributes}`).
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("name".into(), Value::String(self.name.clone()));
        map.insert("type".into(), Value::String(self.kind.as_str().into()));
        for (key, value) in &self.attributes {
            map.insert(key.clone(), value.clone());
        }
        match &self.shape {
            FieldShape::Plain => {}
            FieldShape::Select { options } => {
                map.insert("options".into(), options.clone());
            }
            FieldShape::Relationship { relation_to } => {
                map.insert("relationTo".into(), relation_to.clone());
            }
            FieldShape::Composite { fields } => {
                map.insert(
                    "fields".into(),
                    Value::Array(fields.iter().map(SanitizedField::to_value).collect()),
                );
            }
        }
        Value::Object(map)
    }
}

impl Serialize for SanitizedField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
