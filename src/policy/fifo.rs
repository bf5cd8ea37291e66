//! FIFO (First-In-First-Out) replacement policy.

use std::fmt::Debug;

use tracing::debug;

use super::{AccessResult, CacheStats, PolicyKind, ReplacementPolicy, ResidentSet};
use crate::common::Result;

/// Evicts pages in the order they were brought in.
///
/// A hit leaves the queue untouched: a page that is referenced constantly is
/// still evicted once it becomes the oldest resident.
#[derive(Debug, Clone)]
pub struct FifoCache<P> {
    /// Queue of resident pages in insertion order (front = oldest).
    queue: ResidentSet<P>,

    stats: CacheStats,
}

impl<P: Eq + Clone + Debug> FifoCache<P> {
    /// Create an empty FIFO cache.
    ///
    /// # Errors
    /// Returns `Error::InvalidCapacity` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            queue: ResidentSet::new(capacity)?,
            stats: CacheStats::new(),
        })
    }
}

impl<P: Eq + Clone + Debug> ReplacementPolicy<P> for FifoCache<P> {
    fn access(&mut self, page: P) -> AccessResult<P> {
        let hit = self.queue.position(&page).is_some();
        let mut evicted = None;

        if hit {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
            evicted = self.queue.admit(page.clone());
            if evicted.is_some() {
                self.stats.record_eviction();
            }
        }

        debug!(policy = "FIFO", ?page, hit, ?evicted, "access");

        AccessResult {
            resident: self.queue.snapshot(),
            evicted,
            hit,
        }
    }

    fn resident(&self) -> Vec<P> {
        self.queue.snapshot()
    }

    fn contains(&self, page: &P) -> bool {
        self.queue.position(page).is_some()
    }

    fn stats(&self) -> CacheStats {
        self.stats
    }

    fn capacity(&self) -> usize {
        self.queue.capacity
    }

    fn len(&self) -> usize {
        self.queue.pages.len()
    }

    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }
}
