//! Cache statistics tracking.

use std::fmt;

/// Hit, miss and eviction counters owned by one cache instance.
///
/// Counters only ever grow. They start at zero when the cache is built and
/// are never reset, so `hits + misses` always equals the number of accesses
/// the cache has processed.
///
/// # Example
/// ```
/// use pagesim::CacheStats;
///
/// let mut stats = CacheStats::new();
/// stats.record_miss();
/// stats.record_hit();
/// assert_eq!(stats.accesses(), 2);
/// assert_eq!(stats.hit_ratio(), Some(0.5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of accesses that found the page resident.
    pub hits: u64,

    /// Number of accesses that had to insert the page.
    pub misses: u64,

    /// Number of pages pushed out to make room.
    pub evictions: u64,
}

impl CacheStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    #[inline]
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Total accesses processed (`hits + misses`).
    pub fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of accesses that were hits.
    ///
    /// Returns `None` before the first access, since the ratio is undefined.
    pub fn hit_ratio(&self) -> Option<f64> {
        match self.accesses() {
            0 => None,
            total => Some(self.hits as f64 / total as f64),
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, evictions: {}, hit_rate: ",
            self.hits, self.misses, self.evictions
        )?;
        match self.hit_ratio() {
            Some(ratio) => write!(f, "{:.2}% }}", ratio * 100.0),
            None => write!(f, "N/A }}"),
        }
    }
}
