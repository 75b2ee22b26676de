//! Cache Store Module
//!
//! Process-wide map from derived key to entry, with lazy expiry on read and
//! an explicit sweep.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::cache::{CacheEntry, CacheKey, CacheStats, CachedValue};

// == Entry Store ==
/// Shared TTL store. Every mutation (set, expiry on read, sweep) happens
/// under one lock, and the lock is never held across an await point.
///
/// Lives for the whole process; there is no teardown, entries simply expire.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl EntryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// A stale entry is deleted by this call and reported as absent. Reads do
    /// not extend the entry's lifetime.
    pub fn get(&self, key: &CacheKey) -> Option<CachedValue> {
        let now = Instant::now();
        let mut entries = self.entries.lock();

        let expired = entries.get(key)?.is_expired_at(now);
        if expired {
            entries.remove(key);
            return None;
        }
        entries.get(key).map(|entry| entry.value.clone())
    }

    // == Set ==
    /// Inserts or overwrites `key`, expiring `ttl` from now.
    ///
    /// Last write wins; the previous value, live or not, is discarded.
    pub fn set(&self, key: CacheKey, value: CachedValue, ttl: Duration) {
        let entry = CacheEntry::new(value, ttl, Instant::now());
        self.entries.lock().insert(key, entry);
    }

    // == Sweep ==
    /// Removes every expired entry and returns how many were removed.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        Self::sweep_locked(&mut self.entries.lock(), now)
    }

    fn sweep_locked(entries: &mut HashMap<CacheKey, CacheEntry>, now: Instant) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    // == Stats ==
    /// Sweeps, then counts live entries per namespace.
    ///
    /// Both steps run under the same lock so the counts describe one
    /// consistent snapshot.
    pub fn stats(&self) -> CacheStats {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        Self::sweep_locked(&mut entries, now);
        CacheStats::from_namespaces(entries.values().map(CacheEntry::namespace))
    }

    // == Length ==
    /// Number of stored entries, including stale ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
