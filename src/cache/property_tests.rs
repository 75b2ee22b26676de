//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check key derivation and facade behavior over arbitrary
//! video ids and persona text.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::{derive_key, CacheFacade, EntryStore, Namespace, TtlPolicy};
use crate::models::domain::fixtures;
use crate::models::Verdict;

// == Strategies ==
/// Generates YouTube-style video ids
fn video_id_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,16}"
}

/// Generates arbitrary persona text, including empty and non-ASCII strings
fn persona_strategy() -> impl Strategy<Value = String> {
    any::<String>()
}

fn namespace_strategy() -> impl Strategy<Value = Namespace> {
    prop_oneof![
        Just(Namespace::Comments),
        Just(Namespace::Metadata),
        Just(Namespace::Analysis),
    ]
}

fn facade() -> CacheFacade {
    CacheFacade::new(Arc::new(EntryStore::new()), TtlPolicy::default())
}

#[derive(Debug, Clone)]
enum CacheOp {
    SetComments { video_id: String },
    SetMetadata { video_id: String },
    SetAnalysis { video_id: String, persona: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    // Small id space so operations collide on keys
    let id = "[a-c]{1,2}";
    prop_oneof![
        id.prop_map(|video_id| CacheOp::SetComments { video_id }),
        id.prop_map(|video_id| CacheOp::SetMetadata { video_id }),
        (id, "[xy]{0,1}").prop_map(|(video_id, persona)| CacheOp::SetAnalysis { video_id, persona }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Identical inputs always derive the identical key
    #[test]
    fn prop_key_deterministic(
        namespace in namespace_strategy(),
        video_id in video_id_strategy(),
        persona in persona_strategy()
    ) {
        let k1 = derive_key(namespace, &[&video_id, &persona]);
        let k2 = derive_key(namespace, &[&video_id, &persona]);
        prop_assert_eq!(k1, k2);
    }

    // Moving a part boundary never yields the same key
    #[test]
    fn prop_no_boundary_ambiguity(joined in ".{2,32}", split in 1usize..31) {
        let boundaries: Vec<usize> = joined.char_indices().map(|(i, _)| i).skip(1).collect();
        prop_assume!(!boundaries.is_empty());
        let at = boundaries[split % boundaries.len()];
        let (left, right) = joined.split_at(at);

        let whole = derive_key(Namespace::Analysis, &[&joined, ""]);
        let split_key = derive_key(Namespace::Analysis, &[left, right]);
        prop_assert_ne!(whole, split_key);
    }

    // The same identifying strings in different namespaces never collide
    #[test]
    fn prop_namespaces_distinct(video_id in video_id_strategy()) {
        let keys: HashSet<_> = Namespace::ALL
            .iter()
            .map(|ns| derive_key(*ns, &[&video_id]))
            .collect();
        prop_assert_eq!(keys.len(), 3);
    }

    // Writing one namespace leaves the others empty for that video
    #[test]
    fn prop_namespace_isolation(video_id in video_id_strategy(), persona in persona_strategy()) {
        let cache = facade();
        cache.set_cached_comments(&video_id, vec![fixtures::comment("c", 1)]);

        prop_assert!(cache.get_cached_metadata(&video_id).is_none());
        prop_assert!(cache.get_cached_analysis(&video_id, &persona).is_none());
        prop_assert!(cache.get_cached_comments(&video_id).is_some());
    }

    // A stored analysis is only visible for the exact persona it was stored with
    #[test]
    fn prop_persona_sensitivity(
        video_id in video_id_strategy(),
        persona_a in persona_strategy(),
        persona_b in persona_strategy()
    ) {
        prop_assume!(persona_a != persona_b);
        let cache = facade();
        cache.set_cached_analysis(&video_id, &persona_a, fixtures::analysis(Verdict::Fit, "a"));

        prop_assert!(cache.get_cached_analysis(&video_id, &persona_b).is_none());
        prop_assert!(cache.get_cached_analysis(&video_id, &persona_a).is_some());
    }

    // Consecutive writes to one key leave only the last value
    #[test]
    fn prop_last_write_wins(
        video_id in video_id_strategy(),
        likes in prop::collection::vec(any::<u64>(), 1..10)
    ) {
        let cache = facade();
        for n in &likes {
            cache.set_cached_comments(&video_id, vec![fixtures::comment("c", *n)]);
        }

        let stored = cache.get_cached_comments(&video_id).unwrap();
        prop_assert_eq!(stored[0].likes, *likes.last().unwrap());
        prop_assert_eq!(cache.stats().total, 1);
    }

    // Per-namespace counts equal the number of distinct keys written
    #[test]
    fn prop_stats_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let cache = facade();
        let mut expected: HashSet<(Namespace, String, String)> = HashSet::new();

        for op in ops {
            match op {
                CacheOp::SetComments { video_id } => {
                    cache.set_cached_comments(&video_id, vec![]);
                    expected.insert((Namespace::Comments, video_id, String::new()));
                }
                CacheOp::SetMetadata { video_id } => {
                    cache.set_cached_metadata(&video_id, fixtures::metadata("m"));
                    expected.insert((Namespace::Metadata, video_id, String::new()));
                }
                CacheOp::SetAnalysis { video_id, persona } => {
                    cache.set_cached_analysis(&video_id, &persona, fixtures::analysis(Verdict::Caution, "s"));
                    expected.insert((Namespace::Analysis, video_id, persona));
                }
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.total, expected.len());
        for namespace in Namespace::ALL {
            let want = expected.iter().filter(|(ns, _, _)| *ns == namespace).count();
            prop_assert_eq!(stats.count(namespace), want, "namespace {}", namespace);
        }
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // After the TTL elapses an entry is absent and no longer counted
    #[test]
    fn prop_ttl_expiration_behavior(video_id in video_id_strategy()) {
        let ttl = Duration::from_millis(50);
        let cache = CacheFacade::new(Arc::new(EntryStore::new()), TtlPolicy::new(ttl, ttl));

        cache.set_cached_metadata(&video_id, fixtures::metadata("t"));
        prop_assert!(cache.get_cached_metadata(&video_id).is_some());
        prop_assert_eq!(cache.stats().metadata, 1);

        sleep(ttl * 2);

        prop_assert!(cache.get_cached_metadata(&video_id).is_none());
        prop_assert_eq!(cache.stats().total, 0);
    }
}
