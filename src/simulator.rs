//! Simulator - drives a replacement policy over a reference trace.
//!
//! The [`Simulator`] owns one cache and turns each reference into a [`Step`]
//! record holding the cache contents before and after the access. Running a
//! whole trace yields a [`Report`] with every step and the final statistics.
//!
//! ```text
//!   trace ──▶ Simulator::step ──▶ ReplacementPolicy::access
//!                  │                        │
//!                  │ before snapshot        │ AccessResult
//!                  ▼                        ▼
//!                Step { index, page, hit, before, after, evicted }
//! ```

use std::fmt::Debug;

use tracing::info;

use crate::common::{Result, SimConfig};
use crate::policy::{CacheStats, PolicyKind, ReplacementPolicy};

/// One reference and what it did to the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<P> {
    /// 1-based position in the trace.
    pub index: usize,

    /// The page referenced.
    pub page: P,

    pub hit: bool,

    /// Resident pages immediately before the access.
    pub before: Vec<P>,

    /// Resident pages immediately after the access.
    pub after: Vec<P>,

    /// Page pushed out by this access, if any.
    pub evicted: Option<P>,
}

/// Result of running a full trace.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<P> {
    pub policy: PolicyKind,
    pub capacity: usize,
    pub steps: Vec<Step<P>>,
    pub stats: CacheStats,
}

impl<P> Report<P> {
    /// Hits divided by total requests, or `None` for an empty trace.
    pub fn hit_ratio(&self) -> Option<f64> {
        self.stats.hit_ratio()
    }

    pub fn total_requests(&self) -> u64 {
        self.stats.accesses()
    }
}

/// Feeds references to a single cache, one at a time.
///
/// # Usage
/// ```
/// use pagesim::{PageId, PolicyKind, SimConfig, Simulator};
///
/// let config = SimConfig::new(PolicyKind::Fifo, 2).unwrap();
/// let mut sim = Simulator::new(config).unwrap();
///
/// let step = sim.step(PageId::new(1));
/// assert!(!step.hit);
/// assert_eq!(step.after, vec![PageId::new(1)]);
/// ```
pub struct Simulator<P> {
    cache: Box<dyn ReplacementPolicy<P>>,
    steps_taken: usize,
}

impl<P: Eq + Clone + Debug + 'static> Simulator<P> {
    /// Create a simulator with an empty cache built from `config`.
    ///
    /// # Errors
    /// Returns `Error::InvalidCapacity` if the configured capacity is 0.
    pub fn new(config: SimConfig) -> Result<Self> {
        Ok(Self::with_policy(config.policy.build(config.capacity)?))
    }
}

impl<P: Clone> Simulator<P> {
    /// Wrap an already-built cache.
    pub fn with_policy(cache: Box<dyn ReplacementPolicy<P>>) -> Self {
        Self {
            cache,
            steps_taken: 0,
        }
    }

    /// Reference one page.
    pub fn step(&mut self, page: P) -> Step<P> {
        let before = self.cache.resident();
        let result = self.cache.access(page.clone());
        self.steps_taken += 1;

        Step {
            index: self.steps_taken,
            page,
            hit: result.hit,
            before,
            after: result.resident,
            evicted: result.evicted,
        }
    }

    /// Reference every page in `trace` and return the full report.
    pub fn run<I>(mut self, trace: I) -> Report<P>
    where
        I: IntoIterator<Item = P>,
    {
        let steps: Vec<Step<P>> = trace.into_iter().map(|page| self.step(page)).collect();
        self.finish(steps)
    }

    /// Statistics of the underlying cache so far.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn policy(&self) -> PolicyKind {
        self.cache.kind()
    }

    fn finish(self, steps: Vec<Step<P>>) -> Report<P> {
        let stats = self.cache.stats();
        info!(
            policy = %self.cache.kind(),
            capacity = self.cache.capacity(),
            hits = stats.hits,
            misses = stats.misses,
            "simulation finished"
        );

        Report {
            policy: self.cache.kind(),
            capacity: self.cache.capacity(),
            steps,
            stats,
        }
    }
}

/// Run one policy over a whole trace.
///
/// # Errors
/// Returns `Error::InvalidCapacity` if the configured capacity is 0.
pub fn simulate<P>(config: SimConfig, trace: &[P]) -> Result<Report<P>>
where
    P: Eq + Clone + Debug + 'static,
{
    info!(
        policy = %config.policy,
        capacity = config.capacity,
        references = trace.len(),
        "starting simulation"
    );
    Ok(Simulator::new(config)?.run(trace.iter().cloned()))
}

/// Run every policy over the same trace, in [`PolicyKind::ALL`] order.
///
/// # Errors
/// Returns `Error::InvalidCapacity` if `capacity` is 0.
pub fn compare<P>(capacity: usize, trace: &[P]) -> Result<Vec<Report<P>>>
where
    P: Eq + Clone + Debug + 'static,
{
    PolicyKind::ALL
        .iter()
        .map(|&policy| simulate(SimConfig::new(policy, capacity)?, trace))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    fn config(policy: PolicyKind, capacity: usize) -> SimConfig {
        SimConfig::new(policy, capacity).unwrap()
    }

    #[test]
    fn test_step_records_before_and_after() {
        let mut sim = Simulator::new(config(PolicyKind::Lru, 2)).unwrap();
        sim.step(1);
        sim.step(2);

        let step = sim.step(1);
        assert_eq!(step.index, 3);
        assert!(step.hit);
        assert_eq!(step.before, vec![1, 2]);
        assert_eq!(step.after, vec![2, 1]);
        assert_eq!(step.evicted, None);
    }

    #[test]
    fn test_eviction_is_front_of_before() {
        let mut sim = Simulator::new(config(PolicyKind::Fifo, 2)).unwrap();
        sim.step(1);
        sim.step(2);

        let step = sim.step(3);
        assert_eq!(step.evicted.as_ref(), step.before.first());
    }

    #[test]
    fn test_run_empty_trace() {
        let report = simulate::<i64>(config(PolicyKind::Fifo, 3), &[]).unwrap();

        assert!(report.steps.is_empty());
        assert_eq!(report.total_requests(), 0);
        assert_eq!(report.hit_ratio(), None);
    }

    #[test]
    fn test_compare_runs_every_policy() {
        let reports = compare(3, &[1, 2, 3, 2, 4, 1]).unwrap();

        let policies: Vec<PolicyKind> = reports.iter().map(|r| r.policy).collect();
        assert_eq!(policies, PolicyKind::ALL.to_vec());
        assert!(reports.iter().all(|r| r.steps.len() == 6));
    }

    #[test]
    fn test_compare_rejects_zero_capacity() {
        assert!(matches!(
            compare(0, &[1, 2]),
            Err(Error::InvalidCapacity(0))
        ));
    }
}
