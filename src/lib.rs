//! pagesim - A page-replacement simulator with interchangeable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Presentation (render/ + pagesim binary)          │   │
//! │  │          Step table → Final report → Comparison          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↑                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             Simulator (simulator/)                       │   │
//! │  │        trace → Step records → Report + CacheStats        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Replacement Policies (policy/)  [Chosen by name]   │   │
//! │  │                 FIFO  ←─OR─→  LRU                        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`policy`] - Eviction policies and their statistics
//! - [`trace`] - Parsing reference strings
//! - [`simulator`] - Driving a policy over a trace
//! - [`render`] - Text output of steps and reports
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, trace, PolicyKind, SimConfig};
//!
//! let pages = trace::parse_trace("1 2 3 2 4 1").unwrap();
//! let config = SimConfig::new(PolicyKind::Fifo, 3).unwrap();
//! let report = simulate(config, &pages).unwrap();
//!
//! assert_eq!(report.stats.hits, 1);
//! assert_eq!(report.stats.misses, 5);
//! ```

pub mod common;
pub mod policy;
pub mod render;
pub mod simulator;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CAPACITY, MIN_CAPACITY};
pub use common::{Error, PageId, Result, SimConfig};

pub use policy::{
    AccessResult, CacheStats, FifoCache, LruCache, PolicyKind, ReplacementPolicy,
};
pub use simulator::{compare, simulate, Report, Simulator, Step};
