//! Cache Facade Module
//!
//! Namespace-scoped getters and setters consumed by the comment-fetch and
//! LLM-analysis layers.
//!
//! A miss means the caller performs the upstream call itself and writes the
//! result back through the matching setter; the facade never calls out.

use std::sync::Arc;

use tracing::debug;

use crate::cache::{derive_key, CacheStats, CachedValue, EntryStore, Namespace, TtlPolicy};
use crate::models::{AnalysisResult, Comment, VideoMetadata};

// == Cache Facade ==
/// Typed access to a shared [`EntryStore`] with per-namespace TTLs.
#[derive(Debug, Clone)]
pub struct CacheFacade {
    store: Arc<EntryStore>,
    ttl: TtlPolicy,
}

impl CacheFacade {
    // == Constructor ==
    pub fn new(store: Arc<EntryStore>, ttl: TtlPolicy) -> Self {
        Self { store, ttl }
    }

    /// The underlying store, e.g. for a background sweep.
    pub fn store(&self) -> &Arc<EntryStore> {
        &self.store
    }

    pub fn ttl_policy(&self) -> TtlPolicy {
        self.ttl
    }

    // == Comments ==
    pub fn get_cached_comments(&self, video_id: &str) -> Option<Vec<Comment>> {
        match self.lookup(Namespace::Comments, video_id, &[video_id])? {
            CachedValue::Comments(comments) => Some(comments),
            _ => None,
        }
    }

    pub fn set_cached_comments(&self, video_id: &str, comments: Vec<Comment>) {
        self.store_value(video_id, &[video_id], CachedValue::Comments(comments));
    }

    // == Metadata ==
    pub fn get_cached_metadata(&self, video_id: &str) -> Option<VideoMetadata> {
        match self.lookup(Namespace::Metadata, video_id, &[video_id])? {
            CachedValue::Metadata(metadata) => Some(metadata),
            _ => None,
        }
    }

    pub fn set_cached_metadata(&self, video_id: &str, metadata: VideoMetadata) {
        self.store_value(video_id, &[video_id], CachedValue::Metadata(metadata));
    }

    // == Analysis ==
    /// Analyses are keyed by the (video, persona) pair since the verdict
    /// depends on the persona text.
    pub fn get_cached_analysis(&self, video_id: &str, persona: &str) -> Option<AnalysisResult> {
        match self.lookup(Namespace::Analysis, video_id, &[video_id, persona])? {
            CachedValue::Analysis(result) => Some(result),
            _ => None,
        }
    }

    pub fn set_cached_analysis(&self, video_id: &str, persona: &str, result: AnalysisResult) {
        self.store_value(
            video_id,
            &[video_id, persona],
            CachedValue::Analysis(result),
        );
    }

    // == Stats ==
    /// Live-entry counts, computed after sweeping stale entries.
    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    fn lookup(&self, namespace: Namespace, video_id: &str, parts: &[&str]) -> Option<CachedValue> {
        let value = self.store.get(&derive_key(namespace, parts));
        match &value {
            Some(_) => debug!(%namespace, video_id, "cache hit"),
            None => debug!(%namespace, video_id, "cache miss"),
        }
        value
    }

    fn store_value(&self, video_id: &str, parts: &[&str], value: CachedValue) {
        let namespace = value.namespace();
        let ttl = self.ttl.ttl_for(namespace);
        self.store.set(derive_key(namespace, parts), value, ttl);
        debug!(%namespace, video_id, ttl_secs = ttl.as_secs(), "cached");
    }
}
