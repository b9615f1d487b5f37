//! HTTP request handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Note;
use crate::error::{NotaError, Result};
use crate::infrastructure::{open_manager, NoteManager};
use crate::web::AppState;

/// Request body for create and update.
#[derive(Debug, Deserialize)]
pub struct NotePayload {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub storage: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

// Every handler opens its own manager so the JSON backend re-reads the file
// per request; a note added by a concurrent CLI invocation shows up on the
// next request without restarting the server.
fn manager(state: &AppState) -> Result<Box<dyn NoteManager>> {
    open_manager(&state.config)
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        storage: state.config.storage.to_string(),
    })
}

/// GET /notes
pub async fn list_notes(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Note>>> {
    let manager = manager(&state)?;
    Ok(Json(manager.list_all()))
}

/// POST /notes
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NotePayload>,
) -> Result<impl IntoResponse> {
    let mut manager = manager(&state)?;
    let note = manager.create(&payload.title, &payload.content)?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes/{id}
pub async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Note>> {
    let manager = manager(&state)?;
    manager
        .get_by_id(id)
        .map(Json)
        .ok_or_else(|| NotaError::NoteNotFound(id.to_string()))
}

/// PUT /notes/{id}
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<Note>> {
    let mut manager = manager(&state)?;
    manager
        .update(id, &payload.title, &payload.content)?
        .map(Json)
        .ok_or_else(|| NotaError::NoteNotFound(id.to_string()))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let mut manager = manager(&state)?;
    if manager.delete(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(NotaError::NoteNotFound(id.to_string()))
    }
}

/// GET /notes/resolve/{prefix}
///
/// Short-id resolution over HTTP: a miss is 404, an ambiguous prefix is a
/// 409 carrying every matching id.
pub async fn resolve_note(
    State(state): State<Arc<AppState>>,
    Path(prefix): Path<String>,
) -> Result<Json<Note>> {
    let manager = manager(&state)?;
    Ok(Json(manager.find_by_prefix(&prefix)?))
}

/// GET /notes/search?q=...
pub async fn search_notes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Note>>> {
    let manager = manager(&state)?;
    Ok(Json(manager.search(&params.q)))
}
