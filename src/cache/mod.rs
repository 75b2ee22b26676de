//! Cache Module
//!
//! Two-layer in-memory TTL cache: comments and metadata in one TTL class,
//! persona-specific analyses in a longer one.

mod entry;
mod facade;
mod key;
mod stats;
mod store;
mod ttl;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{CacheEntry, CachedValue};
pub use facade::CacheFacade;
pub use key::{derive_key, CacheKey, Namespace};
pub use stats::CacheStats;
pub use store::EntryStore;
pub use ttl::{TtlPolicy, DEFAULT_ANALYSIS_TTL_SECS, DEFAULT_COMMENT_TTL_SECS};
