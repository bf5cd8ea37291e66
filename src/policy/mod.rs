//! Page replacement policies.
//!
//! Implements:
//! - [`FifoCache`] - evicts the longest-resident page, ignores hits
//! - [`LruCache`] - evicts the least recently used page, refreshes on hits
//!
//! Both sit behind [`ReplacementPolicy`], so a caller can pick one by name
//! with [`PolicyKind`] and drive it without knowing which it got.

mod fifo;
mod lru;
mod stats;

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::common::config::validate_capacity;
use crate::common::{Error, Result};

pub use fifo::FifoCache;
pub use lru::LruCache;
pub use stats::CacheStats;

/// Outcome of a single [`ReplacementPolicy::access`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessResult<P> {
    /// Resident pages after the access, front = next eviction candidate.
    pub resident: Vec<P>,

    /// Page pushed out by this access, if any.
    pub evicted: Option<P>,

    /// Whether the page was already resident.
    pub hit: bool,
}

/// Shared contract of every replacement policy.
///
/// # Invariants
/// - `len() <= capacity()` at all times
/// - no page is resident twice
/// - `stats().accesses()` equals the number of `access` calls
pub trait ReplacementPolicy<P> {
    /// Reference a page, updating residency and counters.
    fn access(&mut self, page: P) -> AccessResult<P>;

    /// Snapshot of resident pages, front = next eviction candidate.
    fn resident(&self) -> Vec<P>;

    /// Whether the page is resident, without touching recency or counters.
    fn contains(&self, page: &P) -> bool;

    /// Copy of the hit, miss and eviction counters so far.
    fn stats(&self) -> CacheStats;

    /// Maximum number of resident pages, fixed at construction.
    fn capacity(&self) -> usize;

    /// Number of pages currently resident.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Which policy this is.
    fn kind(&self) -> PolicyKind;
}

/// Selects a replacement policy by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
}

impl PolicyKind {
    /// Every supported policy, in display order.
    pub const ALL: [PolicyKind; 2] = [PolicyKind::Fifo, PolicyKind::Lru];

    /// Canonical upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
        }
    }

    /// Build an empty cache of this kind.
    ///
    /// # Errors
    /// Returns `Error::InvalidCapacity` if `capacity` is 0.
    pub fn build<P>(&self, capacity: usize) -> Result<Box<dyn ReplacementPolicy<P>>>
    where
        P: Eq + Clone + fmt::Debug + 'static,
    {
        let cache: Box<dyn ReplacementPolicy<P>> = match self {
            PolicyKind::Fifo => Box::new(FifoCache::new(capacity)?),
            PolicyKind::Lru => Box::new(LruCache::new(capacity)?),
        };
        Ok(cache)
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIFO" => Ok(PolicyKind::Fifo),
            "LRU" => Ok(PolicyKind::Lru),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resident pages kept in order, front = next eviction candidate.
///
/// Both policies share this storage and the miss path; they differ only in
/// what a hit does to the order.
#[derive(Debug, Clone)]
struct ResidentSet<P> {
    pages: VecDeque<P>,
    capacity: usize,
}

impl<P: Eq + Clone> ResidentSet<P> {
    fn new(capacity: usize) -> Result<Self> {
        let capacity = validate_capacity(capacity)?;
        Ok(Self {
            pages: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    fn position(&self, page: &P) -> Option<usize> {
        self.pages.iter().position(|p| p == page)
    }

    /// Append a page that is not resident, evicting the front when full.
    fn admit(&mut self, page: P) -> Option<P> {
        debug_assert!(self.position(&page).is_none());

        let evicted = if self.pages.len() >= self.capacity {
            self.pages.pop_front()
        } else {
            None
        };
        self.pages.push_back(page);
        evicted
    }

    /// Move the page at `index` to the back.
    fn promote(&mut self, index: usize) {
        if let Some(page) = self.pages.remove(index) {
            self.pages.push_back(page);
        }
    }

    fn snapshot(&self) -> Vec<P> {
        self.pages.iter().cloned().collect()
    }
}
