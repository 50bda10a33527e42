//! Configuration Module
//!
//! Construction parameters for a cache instance. Values come from code or
//! from any serde source the embedder owns; the cache itself reads no
//! environment variables or files.

use serde::{Deserialize, Serialize};

/// Cache construction parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of entries to pre-allocate room for. A sizing hint, not a limit.
    pub initial_capacity: usize,
    /// Whether lookups start switched off
    pub start_disabled: bool,
}

impl CacheConfig {
    /// Sets the pre-allocation hint.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets whether lookups start switched off.
    pub fn with_start_disabled(mut self, start_disabled: bool) -> Self {
        self.start_disabled = start_disabled;
        self
    }
}
