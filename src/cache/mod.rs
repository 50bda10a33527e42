//! Cache Module
//!
//! Provides a thread-safe in-process key/value cache with explicit
//! invalidation, bulk purge and a switch that suppresses lookups.

mod stats;
mod store;


// Re-export public types
pub use stats::CacheStats;
pub use store::{CacheHandle, KeyValueCache};
