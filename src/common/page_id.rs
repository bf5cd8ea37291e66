//! Page identifier type.

use std::fmt;
use std::str::FromStr;

/// Identifies a page in a reference trace.
///
/// Pages are opaque tokens: the simulator only compares them for equality.
/// Using `i64` accepts any integer a user might type into a reference
/// string, negative numbers included.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id: PageId = "42".parse().unwrap();
/// assert_eq!(page_id, PageId::new(42));
/// assert_eq!(page_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    #[inline]
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl FromStr for PageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<i64>().map(PageId)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
