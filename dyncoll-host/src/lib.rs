//! HTTP admin API for the dynamic collections host.
//!
//! Exposes the editor collection, the version history, and the
//! current-version pointer over JSON so versions can be created and
//! promoted while the host is running.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use dyncoll_model::{CurrentVersion, DynamicCollection, Version};
use dyncoll_types::{DocumentId, VersionId};
use dyncoll_versions::{StoreError, VersionStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

pub mod demo;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VersionStore>,
    pub status: Arc<StatusResponse>,
}

/// What this process booted with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub loaded_version: String,
    pub installed: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreateVersionRequest {
    pub version: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SuggestedVersionResponse {
    pub version: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

fn api_error(e: StoreError) -> ApiError {
    let status = match &e {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::ReservedSlug(_)
        | StoreError::EmptySlug
        | StoreError::DuplicateSlug(_)
        | StoreError::Version(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StoreError::Serialization(_) | StoreError::Io(_) => {
            warn!(error = %e, "Store operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json((*state.status).clone())
}

async fn list_collections(State(state): State<AppState>) -> ApiResult<Vec<DynamicCollection>> {
    state.store.list_collections().await.map(Json).map_err(api_error)
}

async fn create_collection(
    State(state): State<AppState>,
    Json(collection): Json<DynamicCollection>,
) -> Result<(StatusCode, Json<DynamicCollection>), ApiError> {
    let created = state
        .store
        .create_collection(collection)
        .await
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<DocumentId>,
) -> ApiResult<DynamicCollection> {
    state.store.get_collection(id).await.map(Json).map_err(api_error)
}

async fn update_collection(
    State(state): State<AppState>,
    Path(id): Path<DocumentId>,
    Json(collection): Json<DynamicCollection>,
) -> ApiResult<DynamicCollection> {
    state
        .store
        .update_collection(id, collection)
        .await
        .map(Json)
        .map_err(api_error)
}

async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<DocumentId>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_collection(id).await.map_err(api_error)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_versions(State(state): State<AppState>) -> ApiResult<Vec<Version>> {
    state.store.list_versions().await.map(Json).map_err(api_error)
}

async fn create_version(
    State(state): State<AppState>,
    Json(req): Json<CreateVersionRequest>,
) -> Result<(StatusCode, Json<Version>), ApiError> {
    let created = state
        .store
        .create_version(&req.version)
        .await
        .map_err(api_error)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_version(
    State(state): State<AppState>,
    Path(id): Path<VersionId>,
) -> ApiResult<Version> {
    state.store.get_version(id).await.map(Json).map_err(api_error)
}

async fn suggested_version(State(state): State<AppState>) -> ApiResult<SuggestedVersionResponse> {
    let version = state
        .store
        .suggest_next_version()
        .await
        .map_err(api_error)?;
    Ok(Json(SuggestedVersionResponse {
        version: version.to_string(),
    }))
}

async fn get_current_version(State(state): State<AppState>) -> ApiResult<CurrentVersion> {
    state.store.current_version().await.map(Json).map_err(api_error)
}

async fn set_current_version(
    State(state): State<AppState>,
    Json(req): Json<CurrentVersion>,
) -> ApiResult<CurrentVersion> {
    state
        .store
        .set_current_version(req.current_version)
        .await
        .map(Json)
        .map_err(api_error)
}

/// Build the HTTP API router with the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/status", get(status_handler))
        .route(
            "/api/v1/collections",
            get(list_collections).post(create_collection),
        )
        .route(
            "/api/v1/collections/{id}",
            get(get_collection)
                .put(update_collection)
                .delete(delete_collection),
        )
        .route("/api/v1/versions", get(list_versions).post(create_version))
        .route("/api/v1/versions/suggested", get(suggested_version))
        .route("/api/v1/versions/{id}", get(get_version))
        .route(
            "/api/v1/current-version",
            get(get_current_version).put(set_current_version),
        )
        .with_state(state)
}
