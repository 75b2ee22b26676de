//! Error types for the cache server
//!
//! The cache core never fails; these errors only exist at the HTTP edge,
//! where a miss has to become a status code.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::cache::Namespace;
use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache server.
#[derive(Error, Debug)]
pub enum CacheError {
    /// No live entry for the video in this namespace
    #[error("No cached {namespace} for video '{video_id}'")]
    NotFound {
        namespace: Namespace,
        video_id: String,
    },

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl CacheError {
    pub fn not_found(namespace: Namespace, video_id: impl Into<String>) -> Self {
        CacheError::NotFound {
            namespace,
            video_id: video_id.into(),
        }
    }
}

/// Malformed or mistyped bodies are bad requests like any other
/// validation failure.
impl From<JsonRejection> for CacheError {
    fn from(rejection: JsonRejection) -> Self {
        CacheError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound { .. } => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
