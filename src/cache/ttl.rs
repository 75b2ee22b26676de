//! TTL Policy Module
//!
//! Fixed lifetime per namespace. Comments and metadata are cheap to refetch
//! and share one class; analyses cost an LLM call and get their own, longer
//! class.

use std::time::Duration;

use crate::cache::Namespace;

/// Default lifetime for comments and metadata (3 hours)
pub const DEFAULT_COMMENT_TTL_SECS: u64 = 3 * 60 * 60;

/// Default lifetime for analysis results (6 hours)
pub const DEFAULT_ANALYSIS_TTL_SECS: u64 = 6 * 60 * 60;

// == TTL Policy ==
/// Lifetimes for the two TTL classes, tunable independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPolicy {
    /// Lifetime of comment and metadata entries
    pub comments: Duration,
    /// Lifetime of analysis entries
    pub analysis: Duration,
}

impl TtlPolicy {
    pub fn new(comments: Duration, analysis: Duration) -> Self {
        Self { comments, analysis }
    }

    /// Lifetime applied to writes into `namespace`.
    pub fn ttl_for(&self, namespace: Namespace) -> Duration {
        match namespace {
            Namespace::Comments | Namespace::Metadata => self.comments,
            Namespace::Analysis => self.analysis,
        }
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(DEFAULT_COMMENT_TTL_SECS),
            Duration::from_secs(DEFAULT_ANALYSIS_TTL_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = TtlPolicy::default();
        assert_eq!(policy.ttl_for(Namespace::Comments), Duration::from_secs(10_800));
        assert_eq!(policy.ttl_for(Namespace::Metadata), Duration::from_secs(10_800));
        assert_eq!(policy.ttl_for(Namespace::Analysis), Duration::from_secs(21_600));
    }

    #[test]
    fn test_classes_tune_independently() {
        let policy = TtlPolicy::new(Duration::from_secs(60), Duration::from_secs(7));
        assert_eq!(policy.ttl_for(Namespace::Metadata), Duration::from_secs(60));
        assert_eq!(policy.ttl_for(Namespace::Analysis), Duration::from_secs(7));
    }
}
