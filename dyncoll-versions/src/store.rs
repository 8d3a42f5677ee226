//! Storage for collection documents, versions, and the current pointer.

use crate::error::{StoreError, StoreResult};
use crate::rules::{newest, suggest_next, validate_proposed};
use async_trait::async_trait;
use chrono::Utc;
use dyncoll_model::{CurrentVersion, DynamicCollection, Snapshot, Version, validate_slug};
use dyncoll_types::{DocumentId, SemanticVersion, VersionId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Abstract store interface.
#[async_trait]
pub trait VersionStore: Send + Sync {
    /// Lists every dynamic collection document, in creation order.
    async fn list_collections(&self) -> StoreResult<Vec<DynamicCollection>>;

    async fn get_collection(&self, id: DocumentId) -> StoreResult<DynamicCollection>;

    /// Stores a new document. The slug must be non-empty, not reserved, and
    /// unused. Identity and timestamps are assigned here.
    async fn create_collection(
        &self,
        collection: DynamicCollection,
    ) -> StoreResult<DynamicCollection>;

    /// Replaces a document, keeping its identity and creation time.
    async fn update_collection(
        &self,
        id: DocumentId,
        collection: DynamicCollection,
    ) -> StoreResult<DynamicCollection>;

    async fn delete_collection(&self, id: DocumentId) -> StoreResult<()>;

    /// Lists versions, newest first.
    async fn list_versions(&self) -> StoreResult<Vec<Version>>;

    async fn get_version(&self, id: VersionId) -> StoreResult<Version>;

    /// Validates `proposed` and stores a version capturing every collection
    /// document that exists at this instant.
    async fn create_version(&self, proposed: &str) -> StoreResult<Version>;

    async fn current_version(&self) -> StoreResult<CurrentVersion>;

    /// Points the current version at `id` (or clears it with `None`).
    async fn set_current_version(&self, id: Option<VersionId>) -> StoreResult<CurrentVersion>;

    /// The version with the highest version number.
    async fn newest_version(&self) -> StoreResult<Option<Version>> {
        let versions = self.list_versions().await?;
        Ok(newest(&versions).cloned())
    }

    /// Default value for the next version number.
    async fn suggest_next_version(&self) -> StoreResult<SemanticVersion> {
        let newest = self.newest_version().await?;
        Ok(suggest_next(newest.as_ref().map(|v| &v.version))?)
    }

    /// The snapshot the current pointer selects. An unset or dangling
    /// pointer selects the empty snapshot.
    async fn current_snapshot(&self) -> StoreResult<Snapshot> {
        let Some(id) = self.current_version().await?.current_version else {
            return Ok(Snapshot::empty());
        };
        match self.get_version(id).await {
            Ok(version) => Ok(Snapshot::from(version)),
            Err(StoreError::NotFound(_)) => {
                warn!(version_id = %id, "Current version points at a missing version");
                Ok(Snapshot::empty())
            }
            Err(e) => Err(e),
        }
    }
}

/// Everything the store persists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreState {
    #[serde(default)]
    collections: Vec<DynamicCollection>,
    #[serde(default)]
    versions: Vec<Version>,
    #[serde(default)]
    current_version: CurrentVersion,
}

impl StoreState {
    fn check_slug(&self, slug: &str, except: Option<DocumentId>) -> StoreResult<()> {
        if slug.is_empty() {
            return Err(StoreError::EmptySlug);
        }
        validate_slug(slug).map_err(StoreError::ReservedSlug)?;
        let taken = self
            .collections
            .iter()
            .any(|c| c.slug == slug && (except.is_none() || c.id != except));
        if taken {
            return Err(StoreError::DuplicateSlug(slug.to_string()));
        }
        Ok(())
    }

    fn find_collection(&self, id: DocumentId) -> StoreResult<usize> {
        self.collections
            .iter()
            .position(|c| c.id == Some(id))
            .ok_or_else(|| StoreError::NotFound(format!("dynamic collection {id}")))
    }

    fn create_collection(
        &mut self,
        mut collection: DynamicCollection,
    ) -> StoreResult<DynamicCollection> {
        self.check_slug(&collection.slug, None)?;
        let now = Utc::now();
        collection.id = Some(DocumentId::new());
        collection.created_at = Some(now);
        collection.updated_at = Some(now);
        self.collections.push(collection.clone());
        Ok(collection)
    }

    fn update_collection(
        &mut self,
        id: DocumentId,
        mut collection: DynamicCollection,
    ) -> StoreResult<DynamicCollection> {
        let index = self.find_collection(id)?;
        self.check_slug(&collection.slug, Some(id))?;
        collection.id = Some(id);
        collection.created_at = self.collections[index].created_at;
        collection.updated_at = Some(Utc::now());
        self.collections[index] = collection.clone();
        Ok(collection)
    }

    fn delete_collection(&mut self, id: DocumentId) -> StoreResult<()> {
        let index = self.find_collection(id)?;
        self.collections.remove(index);
        Ok(())
    }

    fn sorted_versions(&self) -> Vec<Version> {
        let mut versions = self.versions.clone();
        versions.sort_by(|a, b| b.version.cmp(&a.version));
        versions
    }

    fn get_version(&self, id: VersionId) -> StoreResult<Version> {
        self.versions
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("version {id}")))
    }

    fn create_version(&mut self, proposed: &str) -> StoreResult<Version> {
        let latest = newest(&self.versions).map(|v| &v.version);
        let number = validate_proposed(proposed, latest)?;
        let version = Version::capture(number, self.collections.clone());
        self.versions.push(version.clone());
        Ok(version)
    }

    fn set_current_version(&mut self, id: Option<VersionId>) -> StoreResult<CurrentVersion> {
        if let Some(id) = id {
            self.get_version(id)?;
        }
        self.current_version = CurrentVersion {
            current_version: id,
        };
        Ok(self.current_version)
    }
}

/// [`VersionStore`] kept in memory, optionally persisted to one JSON file.
///
/// A file-backed store rewrites the whole file after every mutation.
pub struct CollectionStore {
    path: Option<PathBuf>,
    state: RwLock<StoreState>,
}

impl CollectionStore {
    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> Self {
        Self {
            path: None,
            state: RwLock::new(StoreState::default()),
        }
    }

    /// Opens a store backed by the JSON file at `path`, creating an empty
    /// store if the file does not exist.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let state = match tokio::fs::read_to_string(&path).await {
            Ok(data) => serde_json::from_str(&data)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Creating new collection store");
                StoreState::default()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: Some(path),
            state: RwLock::new(state),
        })
    }

    async fn persist(&self, state: &StoreState) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let data = serde_json::to_string_pretty(state)?;
        tokio::fs::write(path, data).await?;
        Ok(())
    }

    /// Applies `op` to a copy of the state, persists it, then commits it.
    /// A failed write leaves the in-memory state untouched.
    async fn mutate<T: Send>(
        &self,
        op: impl FnOnce(&mut StoreState) -> StoreResult<T> + Send,
    ) -> StoreResult<T> {
        let mut state = self.state.write().await;
        let mut next = state.clone();
        let out = op(&mut next)?;
        self.persist(&next).await?;
        *state = next;
        Ok(out)
    }
}

#[async_trait]
impl VersionStore for CollectionStore {
    async fn list_collections(&self) -> StoreResult<Vec<DynamicCollection>> {
        Ok(self.state.read().await.collections.clone())
    }

    async fn get_collection(&self, id: DocumentId) -> StoreResult<DynamicCollection> {
        let state = self.state.read().await;
        let index = state.find_collection(id)?;
        Ok(state.collections[index].clone())
    }

    async fn create_collection(
        &self,
        collection: DynamicCollection,
    ) -> StoreResult<DynamicCollection> {
        let created = self.mutate(|s| s.create_collection(collection)).await?;
        debug!(slug = %created.slug, "Created dynamic collection");
        Ok(created)
    }

    async fn update_collection(
        &self,
        id: DocumentId,
        collection: DynamicCollection,
    ) -> StoreResult<DynamicCollection> {
        self.mutate(|s| s.update_collection(id, collection)).await
    }

    async fn delete_collection(&self, id: DocumentId) -> StoreResult<()> {
        self.mutate(|s| s.delete_collection(id)).await
    }

    async fn list_versions(&self) -> StoreResult<Vec<Version>> {
        Ok(self.state.read().await.sorted_versions())
    }

    async fn get_version(&self, id: VersionId) -> StoreResult<Version> {
        self.state.read().await.get_version(id)
    }

    async fn create_version(&self, proposed: &str) -> StoreResult<Version> {
        let version = self.mutate(|s| s.create_version(proposed)).await?;
        info!(
            version = %version.version,
            collections = version.collection_definitions.len(),
            "Created dynamic collections version"
        );
        Ok(version)
    }

    async fn current_version(&self) -> StoreResult<CurrentVersion> {
        Ok(self.state.read().await.current_version)
    }

    async fn set_current_version(&self, id: Option<VersionId>) -> StoreResult<CurrentVersion> {
        self.mutate(|s| s.set_current_version(id)).await
    }
}
