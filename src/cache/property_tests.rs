//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check freshness and download counting against a simple model.

use proptest::prelude::*;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tempfile::tempdir;

use crate::cache::{is_outdated, CacheEntry, ManualClock, MessageCache, MessageSet};
use crate::config::Config;
use crate::fetch::fake::FakeFetcher;

// == Test Configuration ==
const TEST_CACHE_TIME: u64 = 600;

const DOCUMENT: &str = r#"{"messages": {"d1": {"k": "v"}, "d2": {"k": "w"}}}"#;

// == Strategies ==
/// Generates an operation sequence: seconds to advance, then a lookup.
#[derive(Debug, Clone)]
enum CacheOp {
    Advance { secs: i64 },
    Lookup { domain: &'static str, force: bool },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (0i64..(2 * TEST_CACHE_TIME as i64)).prop_map(|secs| CacheOp::Advance { secs }),
        (prop_oneof![Just("d1"), Just("d2")], prop::bool::weighted(0.1))
            .prop_map(|(domain, force)| CacheOp::Lookup { domain, force }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Freshness boundary: stale exactly when elapsed exceeds the window.
    #[test]
    fn prop_outdated_iff_older_than_window(window in 0i64..100_000, elapsed in -1_000i64..200_000) {
        let now = Utc::now();
        let stamped = now - Duration::seconds(elapsed);
        prop_assert_eq!(
            is_outdated(stamped, now, Duration::seconds(window)),
            elapsed > window
        );
    }

    // Entries agree with the shared staleness rule.
    #[test]
    fn prop_entry_fresh_is_not_outdated(window in 0i64..100_000, elapsed in 0i64..200_000) {
        let loaded_at = Utc::now();
        let now = loaded_at + Duration::seconds(elapsed);
        let entry = CacheEntry::new(MessageSet::new(), loaded_at);
        prop_assert_eq!(
            entry.is_fresh(now, Duration::seconds(window)),
            !is_outdated(loaded_at, now, Duration::seconds(window))
        );
    }

    // Downloads happen exactly when a slot is empty, stale or forced.
    #[test]
    fn prop_download_count_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..40)) {
        let dir = tempdir().unwrap();
        let config = Config {
            translation_path: dir.path().to_path_buf(),
            cache_time: TEST_CACHE_TIME,
            ..Config::default()
        };
        let fetcher = FakeFetcher::with_payload("d1", DOCUMENT);
        fetcher.set_payload("d2", DOCUMENT);
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let mut cache = MessageCache::new(&config, Box::new(fetcher.clone()), clock.clone()).unwrap();

        // Seconds since start at which each domain was last loaded
        let mut loaded: std::collections::HashMap<&str, i64> = Default::default();
        let mut elapsed = 0i64;
        let mut expected_downloads = 0usize;

        for op in ops {
            match op {
                CacheOp::Advance { secs } => {
                    clock.advance(Duration::seconds(secs));
                    elapsed += secs;
                }
                CacheOp::Lookup { domain, force } => {
                    let stale = loaded
                        .get(domain)
                        .map_or(true, |at| elapsed - at > TEST_CACHE_TIME as i64);
                    if force || stale {
                        expected_downloads += 1;
                        loaded.insert(domain, elapsed);
                    }
                    let messages = cache.get_domain_messages(domain, "en", force).unwrap();
                    prop_assert!(messages.contains_key("k"));
                }
            }
        }

        prop_assert_eq!(fetcher.calls(), expected_downloads);
        prop_assert_eq!(cache.len(), loaded.len());
    }

    // Lookups of present keys are idempotent within the window.
    #[test]
    fn prop_repeated_lookup_is_stable(repeats in 1usize..20, step in 0i64..(TEST_CACHE_TIME as i64 / 20)) {
        let dir = tempdir().unwrap();
        let config = Config {
            translation_path: dir.path().to_path_buf(),
            cache_time: TEST_CACHE_TIME,
            ..Config::default()
        };
        let fetcher = FakeFetcher::with_payload("d1", DOCUMENT);
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let mut cache = MessageCache::new(&config, Box::new(fetcher.clone()), clock.clone()).unwrap();

        let first = cache.get("k", Some("d1"), None).unwrap();
        for _ in 0..repeats {
            clock.advance(Duration::seconds(step));
            prop_assert_eq!(cache.get("k", Some("d1"), None).unwrap(), first.clone());
        }

        prop_assert_eq!(fetcher.calls(), 1);
        prop_assert_eq!(cache.stats().memory_hits, repeats as u64);
    }
}
