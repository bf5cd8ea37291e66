//! Configuration constants and validated run settings.

use crate::common::{Error, Result};
use crate::policy::PolicyKind;

/// Smallest capacity a cache may be built with.
pub const MIN_CAPACITY: usize = 1;

/// Capacity used when the caller does not pick one.
///
/// Three frames is small enough that evictions show up after a handful of
/// references, which is what a classroom trace needs.
pub const DEFAULT_CAPACITY: usize = 3;

/// Policy used when the caller does not pick one.
pub const DEFAULT_POLICY: PolicyKind = PolicyKind::Lru;

/// Check a capacity against [`MIN_CAPACITY`].
///
/// # Errors
/// Returns `Error::InvalidCapacity` for a capacity of zero.
pub fn validate_capacity(capacity: usize) -> Result<usize> {
    if capacity < MIN_CAPACITY {
        return Err(Error::InvalidCapacity(capacity));
    }
    Ok(capacity)
}

/// Settings for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub policy: PolicyKind,
    pub capacity: usize,
}

impl SimConfig {
    /// Build a config, rejecting capacities below [`MIN_CAPACITY`].
    pub fn new(policy: PolicyKind, capacity: usize) -> Result<Self> {
        Ok(Self {
            policy,
            capacity: validate_capacity(capacity)?,
        })
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            policy: DEFAULT_POLICY,
            capacity: DEFAULT_CAPACITY,
        }
    }
}
