//! TubeFit Cache - Two-layer TTL cache for comment-based video analysis
//!
//! Sits between the UI and two rate-limited upstreams: comment/metadata
//! lookups share one TTL class, persona-specific LLM analyses get a longer
//! one.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheFacade, CacheStats, EntryStore, TtlPolicy};
pub use config::Config;
pub use tasks::spawn_sweep_task;
