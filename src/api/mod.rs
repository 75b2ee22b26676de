//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `GET|PUT /comments/:video_id` - Cached comment list
//! - `GET|PUT /metadata/:video_id` - Cached video metadata
//! - `GET|PUT /analysis/:video_id` - Cached analysis for a persona
//! - `GET /stats` - Live entries per namespace
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
