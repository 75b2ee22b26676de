//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    get_analysis_handler, get_comments_handler, get_metadata_handler, health_handler,
    set_analysis_handler, set_comments_handler, set_metadata_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/comments/:video_id",
            get(get_comments_handler).put(set_comments_handler),
        )
        .route(
            "/metadata/:video_id",
            get(get_metadata_handler).put(set_metadata_handler),
        )
        .route(
            "/analysis/:video_id",
            get(get_analysis_handler).put(set_analysis_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
