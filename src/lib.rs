//! KV Cache - A thread-safe in-process key/value cache
//!
//! Stores values of any cloneable type under string keys. Entries live until
//! they are invalidated, overwritten or purged; lookups can be switched off at
//! runtime while writes keep applying.
//!
//! ```rust
//! use kv_cache::{CacheError, KeyValueCache};
//!
//! let cache = KeyValueCache::new();
//! cache.update("a", 1);
//! assert_eq!(cache.check("a"), Ok(1));
//!
//! cache.disable();
//! assert_eq!(cache.check("a"), Err(CacheError::Disabled));
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheHandle, CacheStats, KeyValueCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
