//! Reference trace parsing.
//!
//! A trace is a free-form, whitespace-separated list of integer page numbers,
//! such as `"1 2 3 2 4 1"`. Newlines and tabs count as separators, so a trace
//! file can put one reference per line or all on one line.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{Error, PageId, Result};

/// Parse a reference string into page identifiers.
///
/// An empty or blank string is a valid, empty trace.
///
/// # Errors
/// Returns `Error::MalformedTrace` for the first token that is not an
/// integer. Nothing is returned for the tokens before it.
pub fn parse_trace(input: &str) -> Result<Vec<PageId>> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<PageId>().map_err(|_| Error::MalformedTrace {
                position: i + 1,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Read and parse a trace file.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::MalformedTrace` if it contains a non-integer token
pub fn load_trace<P: AsRef<Path>>(path: P) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let trace = parse_trace(&contents)?;

    debug!(path = %path.display(), references = trace.len(), "loaded trace");
    Ok(trace)
}
