//! LRU (Least Recently Used) replacement policy.

use std::fmt::Debug;

use tracing::debug;

use super::{AccessResult, CacheStats, PolicyKind, ReplacementPolicy, ResidentSet};
use crate::common::Result;

/// Evicts the page that has gone longest without being referenced.
///
/// Every access, hit or miss, moves the page to the most recently used end.
/// Membership checks and promotion scan the resident list, which is
/// O(capacity) per access.
#[derive(Debug, Clone)]
pub struct LruCache<P> {
    /// Resident pages in recency order (front = least recently used).
    pages: ResidentSet<P>,

    stats: CacheStats,
}

impl<P: Eq + Clone + Debug> LruCache<P> {
    /// Create an empty LRU cache.
    ///
    /// # Errors
    /// Returns `Error::InvalidCapacity` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            pages: ResidentSet::new(capacity)?,
            stats: CacheStats::new(),
        })
    }
}

impl<P: Eq + Clone + Debug> ReplacementPolicy<P> for LruCache<P> {
    fn access(&mut self, page: P) -> AccessResult<P> {
        let mut evicted = None;

        let hit = match self.pages.position(&page) {
            Some(index) => {
                self.stats.record_hit();
                self.pages.promote(index);
                true
            }
            None => {
                self.stats.record_miss();
                evicted = self.pages.admit(page.clone());
                if evicted.is_some() {
                    self.stats.record_eviction();
                }
                false
            }
        };

        debug!(policy = "LRU", ?page, hit, ?evicted, "access");

        AccessResult {
            resident: self.pages.snapshot(),
            evicted,
            hit,
        }
    }

    fn resident(&self) -> Vec<P> {
        self.pages.snapshot()
    }

    fn contains(&self, page: &P) -> bool {
        self.pages.position(page).is_some()
    }

    fn stats(&self) -> CacheStats {
        self.stats
    }

    fn capacity(&self) -> usize {
        self.pages.capacity
    }

    fn len(&self) -> usize {
        self.pages.pages.len()
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }
}
