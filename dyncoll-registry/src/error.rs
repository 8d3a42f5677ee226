//! Error types for registries and hook props.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("invalid props structure: {0}")]
    InvalidPropsStructure(String),

    #[error("props payload does not match structure '{structure}': {reason}")]
    PropsMismatch { structure: String, reason: String },
}
