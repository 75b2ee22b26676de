//! Domain records and request/response models
//!
//! `domain` holds the payloads the cache stores; `requests` and `responses`
//! define the DTOs used for serializing/deserializing HTTP bodies.

pub mod domain;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use domain::{
    AnalysisResult, Comment, DifficultyLevel, SentimentBreakdown, Verdict, VideoMetadata,
};
pub use requests::{AnalysisQuery, SetAnalysisRequest, MAX_VIDEO_ID_LENGTH};
pub use responses::{
    AnalysisResponse, CommentsResponse, ErrorResponse, HealthResponse, MetadataResponse,
    StoredResponse,
};
