//! API Handlers
//!
//! HTTP request handlers exposing the cache facade. Handlers only look up
//! and store; fetching comments or running an analysis on a miss is the
//! caller's job.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};

use crate::cache::{CacheFacade, CacheStats, EntryStore, Namespace, TtlPolicy};
use crate::error::{CacheError, Result};
use crate::models::requests::validate_video_id;
use crate::models::{
    AnalysisQuery, AnalysisResponse, Comment, CommentsResponse, HealthResponse, MetadataResponse,
    SetAnalysisRequest, StoredResponse, VideoMetadata,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Namespace-scoped cache over the process-wide store
    pub cache: Arc<CacheFacade>,
}

impl AppState {
    /// Creates a new AppState around the given facade.
    pub fn new(cache: CacheFacade) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds a fresh, empty store with the configured TTL classes.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::with_ttl(config.ttl_policy())
    }

    /// Creates a new AppState with an empty store and the given TTL classes.
    pub fn with_ttl(ttl: TtlPolicy) -> Self {
        Self::new(CacheFacade::new(Arc::new(EntryStore::new()), ttl))
    }
}

fn check_video_id(video_id: &str) -> Result<()> {
    match validate_video_id(video_id) {
        Some(msg) => Err(CacheError::InvalidRequest(msg)),
        None => Ok(()),
    }
}

/// Handler for GET /comments/:video_id
pub async fn get_comments_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Json<CommentsResponse>> {
    check_video_id(&video_id)?;

    let comments = state
        .cache
        .get_cached_comments(&video_id)
        .ok_or_else(|| CacheError::not_found(Namespace::Comments, &video_id))?;

    Ok(Json(CommentsResponse { video_id, comments }))
}

/// Handler for PUT /comments/:video_id
pub async fn set_comments_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    payload: std::result::Result<Json<Vec<Comment>>, JsonRejection>,
) -> Result<Json<StoredResponse>> {
    check_video_id(&video_id)?;
    let Json(comments) = payload?;

    state.cache.set_cached_comments(&video_id, comments);

    Ok(Json(StoredResponse::new(Namespace::Comments, video_id)))
}

/// Handler for GET /metadata/:video_id
pub async fn get_metadata_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Json<MetadataResponse>> {
    check_video_id(&video_id)?;

    let metadata = state
        .cache
        .get_cached_metadata(&video_id)
        .ok_or_else(|| CacheError::not_found(Namespace::Metadata, &video_id))?;

    Ok(Json(MetadataResponse { video_id, metadata }))
}

/// Handler for PUT /metadata/:video_id
pub async fn set_metadata_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    payload: std::result::Result<Json<VideoMetadata>, JsonRejection>,
) -> Result<Json<StoredResponse>> {
    check_video_id(&video_id)?;
    let Json(metadata) = payload?;

    state.cache.set_cached_metadata(&video_id, metadata);

    Ok(Json(StoredResponse::new(Namespace::Metadata, video_id)))
}

/// Handler for GET /analysis/:video_id?persona=...
///
/// A missing `persona` parameter looks up the empty persona.
pub async fn get_analysis_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    Query(query): Query<AnalysisQuery>,
) -> Result<Json<AnalysisResponse>> {
    check_video_id(&video_id)?;

    let result = state
        .cache
        .get_cached_analysis(&video_id, &query.persona)
        .ok_or_else(|| CacheError::not_found(Namespace::Analysis, &video_id))?;

    Ok(Json(AnalysisResponse {
        video_id,
        persona: query.persona,
        result,
    }))
}

/// Handler for PUT /analysis/:video_id
pub async fn set_analysis_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    payload: std::result::Result<Json<SetAnalysisRequest>, JsonRejection>,
) -> Result<Json<StoredResponse>> {
    check_video_id(&video_id)?;
    let Json(req) = payload?;
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state
        .cache
        .set_cached_analysis(&video_id, &req.persona, req.result);

    Ok(Json(StoredResponse::new(Namespace::Analysis, video_id)))
}

/// Handler for GET /stats
///
/// Sweeps expired entries, then reports live counts per namespace.
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
