//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every variant is raised at the boundary: building a cache, choosing a
/// policy, or reading a reference trace. Once a cache exists, `access` on it
/// cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Cache capacity below the minimum of one frame.
    ///
    /// Capacity is never clamped; the caller must pick a valid size.
    #[error("Invalid capacity {0}: a cache must hold at least 1 page")]
    InvalidCapacity(usize),

    /// Policy name that is neither FIFO nor LRU.
    #[error("Unknown replacement policy '{0}' (expected FIFO or LRU)")]
    UnknownPolicy(String),

    /// A token in the reference string is not an integer page number.
    ///
    /// `position` is the 1-based index of the token in the trace.
    #[error("Malformed trace: token {position} ('{token}') is not a page number")]
    MalformedTrace { position: usize, token: String },

    /// I/O error while reading a trace file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
