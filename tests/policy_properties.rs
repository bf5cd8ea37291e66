//! Property tests for the replacement policies.
//!
//! Random traces over a small page universe so that hits, misses and
//! evictions all show up in every run.

use proptest::prelude::*;

use pagesim::{FifoCache, LruCache, PolicyKind, ReplacementPolicy};

fn trace_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..8, 0..64)
}

fn has_duplicates(pages: &[u8]) -> bool {
    let mut seen = std::collections::HashSet::new();
    !pages.iter().all(|p| seen.insert(*p))
}

proptest! {
    #[test]
    fn prop_len_bounded_and_no_duplicates(capacity in 1usize..6, trace in trace_strategy()) {
        for kind in PolicyKind::ALL {
            let mut cache = kind.build::<u8>(capacity).unwrap();
            for &page in &trace {
                let result = cache.access(page);
                prop_assert!(result.resident.len() <= capacity);
                prop_assert!(!has_duplicates(&result.resident));
                prop_assert!(result.resident.contains(&page));
                if !result.hit {
                    prop_assert_eq!(result.resident.last(), Some(&page));
                }
            }
        }
    }

    #[test]
    fn prop_hits_plus_misses_is_accesses(capacity in 1usize..6, trace in trace_strategy()) {
        for kind in PolicyKind::ALL {
            let mut cache = kind.build::<u8>(capacity).unwrap();
            let mut evictions = 0u64;
            for &page in &trace {
                if cache.access(page).evicted.is_some() {
                    evictions += 1;
                }
            }
            let stats = cache.stats();
            prop_assert_eq!(stats.hits + stats.misses, trace.len() as u64);
            prop_assert_eq!(stats.evictions, evictions);
        }
    }

    #[test]
    fn prop_evicted_is_front_before_access(capacity in 1usize..6, trace in trace_strategy()) {
        for kind in PolicyKind::ALL {
            let mut cache = kind.build::<u8>(capacity).unwrap();
            for &page in &trace {
                let before = cache.resident();
                let result = cache.access(page);
                if let Some(victim) = result.evicted {
                    prop_assert!(!result.hit);
                    prop_assert_eq!(before.len(), capacity);
                    prop_assert_eq!(Some(&victim), before.first());
                }
            }
        }
    }

    #[test]
    fn prop_fifo_hit_keeps_order(capacity in 1usize..6, trace in trace_strategy()) {
        let mut cache = FifoCache::new(capacity).unwrap();
        for &page in &trace {
            let before = cache.resident();
            let result = cache.access(page);
            if result.hit {
                prop_assert_eq!(result.evicted, None);
                prop_assert_eq!(result.resident, before);
            }
        }
    }

    #[test]
    fn prop_lru_hit_moves_page_to_back(capacity in 1usize..6, trace in trace_strategy()) {
        let mut cache = LruCache::new(capacity).unwrap();
        for &page in &trace {
            let before = cache.resident();
            let result = cache.access(page);

            // The accessed page always ends up most recently used
            prop_assert_eq!(result.resident.last(), Some(&page));

            if result.hit {
                prop_assert_eq!(result.evicted, None);
                let mut expected: Vec<u8> =
                    before.iter().copied().filter(|&p| p != page).collect();
                expected.push(page);
                prop_assert_eq!(result.resident, expected);
            }
        }
    }

    #[test]
    fn prop_capacity_one_evicts_previous_page(trace in trace_strategy()) {
        for kind in PolicyKind::ALL {
            let mut cache = kind.build::<u8>(1).unwrap();
            let mut previous: Option<u8> = None;
            for &page in &trace {
                let result = cache.access(page);
                if previous == Some(page) {
                    prop_assert!(result.hit);
                } else {
                    prop_assert!(!result.hit);
                    prop_assert_eq!(result.evicted, previous);
                }
                previous = Some(page);
            }
        }
    }
}
