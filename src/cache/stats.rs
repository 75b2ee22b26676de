//! Cache Statistics Module
//!
//! Live-entry occupancy per namespace, reported for observability.

use serde::Serialize;

use crate::cache::Namespace;

// == Cache Stats ==
/// Number of live entries, in total and per namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Live entries across all namespaces
    pub total: usize,
    pub comments: usize,
    pub metadata: usize,
    pub analysis: usize,
}

impl CacheStats {
    /// Counts the namespace tags of live entries.
    pub fn from_namespaces<I>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = Namespace>,
    {
        let mut stats = Self::default();
        for namespace in namespaces {
            stats.record(namespace);
        }
        stats
    }

    // == Record ==
    /// Counts one live entry in `namespace`.
    pub fn record(&mut self, namespace: Namespace) {
        self.total += 1;
        match namespace {
            Namespace::Comments => self.comments += 1,
            Namespace::Metadata => self.metadata += 1,
            Namespace::Analysis => self.analysis += 1,
        }
    }

    /// Count for a single namespace.
    pub fn count(&self, namespace: Namespace) -> usize {
        match namespace {
            Namespace::Comments => self.comments,
            Namespace::Metadata => self.metadata,
            Namespace::Analysis => self.analysis,
        }
    }
}
