//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against a plain HashMap model and to
//! check sweep boundaries with explicit timestamps.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::CacheStore;

// == Strategies ==
/// Small key space so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-c]_[0-3]".prop_map(|s| s)
}

/// Arbitrary binary payloads, including empty ones
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, payload: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), payload_strategy())
            .prop_map(|(key, payload)| CacheOp::Add { key, payload }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Without sweeps the store behaves like a map with last-write-wins inserts,
    // and the counters match the operations performed.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new();
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();
        let (mut hits, mut misses, mut writes) = (0u64, 0u64, 0u64);

        for op in ops {
            match op {
                CacheOp::Add { key, payload } => {
                    store.add(key.clone(), Bytes::from(payload.clone()));
                    model.insert(key, payload);
                    writes += 1;
                }
                CacheOp::Get { key } => {
                    let got = store.get(&key);
                    let expected = model.get(&key);
                    prop_assert_eq!(got.as_deref(), expected.map(|p| p.as_slice()));
                    if expected.is_some() { hits += 1 } else { misses += 1 }
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, hits);
        prop_assert_eq!(stats.misses, misses);
        prop_assert_eq!(stats.writes, writes);
        prop_assert_eq!(stats.total_entries, model.len());
    }

    // A sweep removes exactly the entries strictly older than max_age.
    #[test]
    fn prop_sweep_boundary(
        ages_ms in prop::collection::vec(0u64..200, 1..30),
        max_age_ms in 0u64..200,
    ) {
        let mut store = CacheStore::new();
        let now = Instant::now() + Duration::from_millis(1_000);
        let max_age = Duration::from_millis(max_age_ms);

        for (i, age) in ages_ms.iter().enumerate() {
            let written = now - Duration::from_millis(*age);
            store.add_at(format!("k_{}", i), Bytes::from(vec![i as u8]), written);
        }

        let expected_removed = ages_ms.iter().filter(|age| **age > max_age_ms).count();
        prop_assert_eq!(store.sweep(max_age, now), expected_removed);

        for (i, age) in ages_ms.iter().enumerate() {
            let present = store.get(&format!("k_{}", i)).is_some();
            prop_assert_eq!(present, *age <= max_age_ms);
        }
    }

    // Re-adding a key restarts its age clock; reading it does not.
    #[test]
    fn prop_rewrite_resets_age(
        payload in payload_strategy(),
        reads in 0usize..10,
        rewrite_after_ms in 1u64..100,
    ) {
        let mut store = CacheStore::new();
        let start = Instant::now();
        let ttl = Duration::from_millis(100);

        store.add_at("k", Bytes::from(payload.clone()), start);
        for _ in 0..reads {
            store.get("k");
        }
        store.add_at("k", Bytes::from(payload.clone()), start + Duration::from_millis(rewrite_after_ms));

        // Past the original entry's lifetime, within the rewritten one's
        let removed = store.sweep(ttl, start + ttl + Duration::from_millis(1));
        prop_assert_eq!(removed, 0);
        let got = store.get("k");
        prop_assert_eq!(got.as_deref(), Some(payload.as_slice()));
    }
}
