//! Album HTTP Routes
//!
//! The five CRUD endpoints over the albums table. Handlers map store
//! failures onto the two categories the API exposes: read failures surface
//! as 500, malformed input and write failures as 400.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use log::error;
use serde::Serialize;

use crate::store::{Album, AlbumChanges, AlbumStore, StoreError};

// ==================
// Shared State
// ==================

/// Album state shared across handlers
pub struct AlbumState {
    pub store: Arc<dyn AlbumStore>,
}

impl AlbumState {
    pub fn new(store: Arc<dyn AlbumStore>) -> Self {
        Self { store }
    }
}

// ==================
// Response Types
// ==================

/// Envelope for list responses: `{"data": [...]}`
#[derive(Debug, Serialize)]
pub struct AlbumListResponse {
    pub data: Vec<Album>,
}

/// Envelope for single-album responses: `{"data": {...}}`
#[derive(Debug, Serialize)]
pub struct AlbumResponse {
    pub data: Album,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

// ==================
// Album Routes
// ==================

/// Create album routes
pub fn album_routes(state: Arc<AlbumState>) -> Router {
    Router::new()
        .route("/albums", get(list_albums_handler))
        .route("/albums", post(create_album_handler))
        .route("/albums/{id}", get(get_album_handler))
        .route("/albums/{id}", put(update_album_handler))
        .route("/albums/{id}", delete(delete_album_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn internal_error(err: &StoreError) -> (StatusCode, Json<ErrorResponse>) {
    error!("album lookup failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("error fetching albums: {}", err),
            code: 500,
        }),
    )
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
            code: 400,
        }),
    )
}

// ==================
// Album Handlers
// ==================

async fn list_albums_handler(
    State(state): State<Arc<AlbumState>>,
) -> Result<Json<AlbumListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let albums = state.store.list().await.map_err(|e| internal_error(&e))?;

    Ok(Json(AlbumListResponse { data: albums }))
}

async fn get_album_handler(
    State(state): State<Arc<AlbumState>>,
    Path(id): Path<String>,
) -> Result<Json<AlbumResponse>, (StatusCode, Json<ErrorResponse>)> {
    let album = state.store.get(&id).await.map_err(|e| internal_error(&e))?;

    Ok(Json(AlbumResponse { data: album }))
}

async fn create_album_handler(
    State(state): State<Arc<AlbumState>>,
    body: Result<Json<Album>, JsonRejection>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(album) = body.map_err(|e| bad_request(e.body_text()))?;

    state.store.insert(&album).await.map_err(|e| {
        error!("album insert failed: {}", e);
        bad_request(format!("could not create the album: {}", e))
    })?;

    Ok(Json(MessageResponse {
        message: "album created successfully".to_string(),
    }))
}

async fn update_album_handler(
    State(state): State<Arc<AlbumState>>,
    Path(id): Path<String>,
    body: Result<Json<AlbumChanges>, JsonRejection>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(changes) = body.map_err(|e| bad_request(e.body_text()))?;

    state.store.update(&id, &changes).await.map_err(|e| {
        error!("album update failed: {}", e);
        bad_request(format!("could not update the album: {}", e))
    })?;

    Ok(Json(MessageResponse {
        message: "album updated successfully".to_string(),
    }))
}

async fn delete_album_handler(
    State(state): State<Arc<AlbumState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Existence check first: a missing row is a lookup failure, not a
    // delete failure.
    state.store.get(&id).await.map_err(|e| internal_error(&e))?;

    state.store.delete(&id).await.map_err(|e| {
        error!("album delete failed: {}", e);
        bad_request(format!("could not delete the album: {}", e))
    })?;

    Ok(Json(MessageResponse {
        message: "album deleted successfully".to_string(),
    }))
}
