//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::Namespace;
use crate::models::{AnalysisResult, Comment, VideoMetadata};

/// Response body for GET /comments/:video_id
#[derive(Debug, Clone, Serialize)]
pub struct CommentsResponse {
    pub video_id: String,
    pub comments: Vec<Comment>,
}

/// Response body for GET /metadata/:video_id
#[derive(Debug, Clone, Serialize)]
pub struct MetadataResponse {
    pub video_id: String,
    pub metadata: VideoMetadata,
}

/// Response body for GET /analysis/:video_id
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub video_id: String,
    pub persona: String,
    pub result: AnalysisResult,
}

/// Response body for every PUT endpoint
#[derive(Debug, Clone, Serialize)]
pub struct StoredResponse {
    /// Success message
    pub message: String,
    /// Namespace the value was written to
    pub namespace: Namespace,
    /// The video the value belongs to
    pub video_id: String,
}

impl StoredResponse {
    /// Creates a new StoredResponse
    pub fn new(namespace: Namespace, video_id: impl Into<String>) -> Self {
        let video_id = video_id.into();
        Self {
            message: format!("Cached {} for '{}'", namespace, video_id),
            namespace,
            video_id,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
