//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

use crate::cache::Namespace;
use crate::models::{AnalysisResult, Comment, VideoMetadata};

// == Cached Value ==
/// Payload held by an entry. Each variant belongs to exactly one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedValue {
    Comments(Vec<Comment>),
    Metadata(VideoMetadata),
    Analysis(AnalysisResult),
}

impl CachedValue {
    /// Namespace this payload kind is stored under.
    pub fn namespace(&self) -> Namespace {
        match self {
            CachedValue::Comments(_) => Namespace::Comments,
            CachedValue::Metadata(_) => Namespace::Metadata,
            CachedValue::Analysis(_) => Namespace::Analysis,
        }
    }
}

// == Cache Entry ==
/// A stored value with its absolute expiry instant.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: CachedValue,
    /// Monotonic instant after which the entry is stale, None = the TTL is
    /// too large to represent and the entry never expires
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry that expires `ttl` after `now`.
    pub fn new(value: CachedValue, ttl: Duration, now: Instant) -> Self {
        Self {
            value,
            expires_at: now.checked_add(ttl),
        }
    }

    /// Namespace of the stored value.
    pub fn namespace(&self) -> Namespace {
        self.value.namespace()
    }

    // == Is Expired ==
    /// Checks if the entry is stale at `now`.
    ///
    /// An entry is visible while `now <= expires_at`; it expires strictly
    /// after that instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }
}
