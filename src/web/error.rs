//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::NotaError;

/// Error response body for HTTP endpoints.
///
/// `matches` is only present for ambiguous-id failures, carrying the full
/// candidate list so a client can offer disambiguation.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<String>>,
}

impl IntoResponse for NotaError {
    fn into_response(self) -> Response {
        let (status, code, matches) = match &self {
            NotaError::NoteNotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", None),
            NotaError::AmbiguousId { matches, .. } => {
                (StatusCode::CONFLICT, "AMBIGUOUS_ID", Some(matches.clone()))
            }
            NotaError::EmptyPrefix => (StatusCode::BAD_REQUEST, "EMPTY_PREFIX", None),
            NotaError::Io(e) => {
                log::error!("io error while handling request: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR", None)
            }
            NotaError::Json(e) => {
                log::error!("serialization error while handling request: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SERIALIZATION_ERROR",
                    None,
                )
            }
            NotaError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                None,
            ),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", None),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
            matches,
        };

        (status, Json(body)).into_response()
    }
}
