//! Route definitions

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::web::{handlers, AppState};

/// Create the axum router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route("/notes/search", get(handlers::search_notes))
        .route("/notes/resolve/{prefix}", get(handlers::resolve_note))
        .route(
            "/notes/{id}",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        )
        .with_state(state)
}
