//! Derivation errors. The `Display` strings are the messages shown to users.

use dyncoll_model::FieldKind;
use thiserror::Error;

/// Why a single raw field definition was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field definition must include string values for \"type\" and \"name\"")]
    MissingTypeOrName,

    #[error("Invalid field type; must be one of {}", FieldKind::tag_list())]
    InvalidType { found: String },

    #[error("{} field type requires parameter '{}'", kind_label(*.kind), .parameter)]
    MissingParameter {
        kind: FieldKind,
        parameter: &'static str,
    },
}

/// Why a whole dynamic collection could not be derived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    /// One or more fields failed; the collection contributes nothing.
    #[error("Error deriving fields: {}", join_messages(.0))]
    Fields(Vec<ValidationError>),
}

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "Text",
        FieldKind::Textarea => "Textarea",
        FieldKind::Email => "Email",
        FieldKind::Code => "Code",
        FieldKind::Json => "Json",
        FieldKind::Number => "Number",
        FieldKind::Date => "Date",
        FieldKind::Point => "Point",
        FieldKind::Checkbox => "Checkbox",
        FieldKind::Select => "Select",
        FieldKind::Relationship => "Relationship",
        FieldKind::Array => "Array",
        FieldKind::Group => "Group",
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
