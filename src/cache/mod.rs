//! Query cache
//!
//! Holds backend responses keyed by their GET path. Reads are served from the
//! cache until a key is invalidated; the next read after invalidation fetches
//! again. The cache is an explicit service object shared through `Arc`, and
//! invalidation is the only way callers mutate it.

mod config;
mod keys;
pub(crate) mod lock;
mod store;

pub use config::CacheConfig;
pub use keys::CacheKey;
pub use store::{QueryCache, QuerySnapshot, QueryStatus};
