//! Names of the access operations and lifecycle hook slots a selection can
//! target.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection-level access operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl AccessOperation {
    pub const ALL: [AccessOperation; 4] = [Self::Create, Self::Read, Self::Update, Self::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for AccessOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level access operations. Fields cannot be deleted on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldAccessOperation {
    Create,
    Read,
    Update,
}

impl FieldAccessOperation {
    pub const ALL: [FieldAccessOperation; 3] = [Self::Create, Self::Read, Self::Update];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for FieldAccessOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The nine collection lifecycle hook slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionHookKind {
    BeforeOperation,
    BeforeValidate,
    BeforeChange,
    AfterChange,
    BeforeRead,
    AfterRead,
    BeforeDelete,
    AfterDelete,
    AfterOperation,
}

impl CollectionHookKind {
    pub const ALL: [CollectionHookKind; 9] = [
        Self::BeforeOperation,
        Self::BeforeValidate,
        Self::BeforeChange,
        Self::AfterChange,
        Self::BeforeRead,
        Self::AfterRead,
        Self::BeforeDelete,
        Self::AfterDelete,
        Self::AfterOperation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeOperation => "beforeOperation",
            Self::BeforeValidate => "beforeValidate",
            Self::BeforeChange => "beforeChange",
            Self::AfterChange => "afterChange",
            Self::BeforeRead => "beforeRead",
            Self::AfterRead => "afterRead",
            Self::BeforeDelete => "beforeDelete",
            Self::AfterDelete => "afterDelete",
            Self::AfterOperation => "afterOperation",
        }
    }
}

impl fmt::Display for CollectionHookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four field lifecycle hook slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldHookKind {
    BeforeValidate,
    BeforeChange,
    AfterChange,
    AfterRead,
}

impl FieldHookKind {
    pub const ALL: [FieldHookKind; 4] = [
        Self::BeforeValidate,
        Self::BeforeChange,
        Self::AfterChange,
        Self::AfterRead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeValidate => "beforeValidate",
            Self::BeforeChange => "beforeChange",
            Self::AfterChange => "afterChange",
            Self::AfterRead => "afterRead",
        }
    }
}

impl fmt::Display for FieldHookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
