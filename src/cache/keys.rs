//! Cache key definitions.
//!
//! Keys are the literal GET paths the data came from, so an invalidation set
//! reads exactly like the endpoints a page depends on.

use std::fmt;

use crate::request::RequestDescriptor;

/// Identifies one cached query result, e.g. `/api/helprequests/all`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Key for the data a GET descriptor fetches: its path plus query string.
    pub fn for_request(request: &RequestDescriptor) -> Self {
        Self(request.path_with_query())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CacheKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CacheKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}
