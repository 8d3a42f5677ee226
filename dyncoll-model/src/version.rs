use crate::collection::DynamicCollection;
use chrono::{DateTime, Utc};
use dyncoll_types::{SemanticVersion, VersionId};
use serde::{Deserialize, Serialize};

/// Version label of the empty snapshot used when nothing has been loaded
/// or no current version is set.
pub const EMPTY_VERSION: &str = "0";

/// An immutable, persisted point-in-time capture of every dynamic
/// collection definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: VersionId,
    pub version: SemanticVersion,
    pub collection_definitions: Vec<DynamicCollection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Version {
    /// Captures `collection_definitions` under a fresh identity.
    pub fn capture(
        version: SemanticVersion,
        collection_definitions: Vec<DynamicCollection>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: VersionId::new(),
            version,
            collection_definitions,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The snapshot file shape: a [`Version`] whose label may also be the
/// non-semantic [`EMPTY_VERSION`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VersionId>,
    pub version: String,
    #[serde(default)]
    pub collection_definitions: Vec<DynamicCollection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Version "0" with no collections.
    pub fn empty() -> Self {
        Self {
            id: None,
            version: EMPTY_VERSION.to_string(),
            collection_definitions: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_empty_version(&self) -> bool {
        self.version == EMPTY_VERSION
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&Version> for Snapshot {
    fn from(version: &Version) -> Self {
        Self {
            id: Some(version.id),
            version: version.version.to_string(),
            collection_definitions: version.collection_definitions.clone(),
            created_at: Some(version.created_at),
            updated_at: Some(version.updated_at),
        }
    }
}

impl From<Version> for Snapshot {
    fn from(version: Version) -> Self {
        Self {
            id: Some(version.id),
            version: version.version.to_string(),
            collection_definitions: version.collection_definitions,
            created_at: Some(version.created_at),
            updated_at: Some(version.updated_at),
        }
    }
}

/// The singleton record naming which version should be active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentVersion {
    #[serde(default)]
    pub current_version: Option<VersionId>,
}
