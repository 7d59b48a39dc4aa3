//! Caching for address suggestion lookups.

mod timed_cache;

pub use timed_cache::TimedCache;
