//! Cache Store Module
//!
//! Main cache engine: a HashMap guarded by a reader/writer lock, with a switch
//! that suppresses lookups without touching the stored entries.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::cache::stats::{CacheStats, StatsRecorder};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

/// Shared handle to a cache, cloned into every thread or task that uses it.
pub type CacheHandle<V> = Arc<KeyValueCache<V>>;

// == Guarded State ==
/// Everything protected by the guard. The disabled flag lives next to the
/// entries so a toggle is ordered with respect to every lookup.
#[derive(Debug)]
struct CacheState<V> {
    entries: HashMap<String, V>,
    disabled: bool,
}

// == Key Value Cache ==
/// Thread-safe key/value cache with explicit invalidation and a lookup switch.
///
/// There is no eviction and no expiry: an entry stays until it is
/// invalidated, overwritten or purged.
#[derive(Debug)]
pub struct KeyValueCache<V> {
    /// Entries and disabled flag
    state: RwLock<CacheState<V>>,
    /// Lookup statistics
    stats: StatsRecorder,
}

impl<V> KeyValueCache<V> {
    // == Constructor ==
    /// Creates an empty cache with lookups enabled.
    pub fn new() -> Self {
        Self::with_config(&CacheConfig::default())
    }

    /// Creates an empty cache from the given configuration.
    pub fn with_config(config: &CacheConfig) -> Self {
        debug!(
            "Creating cache: initial_capacity={}, start_disabled={}",
            config.initial_capacity, config.start_disabled
        );
        Self {
            state: RwLock::new(CacheState {
                entries: HashMap::with_capacity(config.initial_capacity),
                disabled: config.start_disabled,
            }),
            stats: StatsRecorder::default(),
        }
    }

    /// Creates an empty cache already wrapped in a [`CacheHandle`].
    pub fn shared() -> CacheHandle<V> {
        Arc::new(Self::new())
    }

    // == Lookup Switch ==
    /// Makes every subsequent `check` fail with [`CacheError::Disabled`].
    ///
    /// Writes keep applying while disabled. Calling this twice is harmless.
    pub fn disable(&self) {
        let mut state = self.write_state();
        if !state.disabled {
            state.disabled = true;
            info!("Cache lookups disabled");
        }
    }

    /// Re-enables lookups after [`disable`](Self::disable).
    pub fn enable(&self) {
        let mut state = self.write_state();
        if state.disabled {
            state.disabled = false;
            info!("Cache lookups enabled");
        }
    }

    /// Returns true while lookups are switched off.
    pub fn is_disabled(&self) -> bool {
        self.read_state().disabled
    }

    // == Update ==
    /// Stores `value` under `key`, replacing any previous value.
    pub fn update(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        debug!("Cache update: key={}", key);
        let previous = {
            let mut state = self.write_state();
            state.entries.insert(key, value)
        };
        // The replaced value is dropped after the guard is released.
        drop(previous);
    }

    // == Invalidate ==
    /// Removes `key` if present. Absent keys are ignored.
    pub fn invalidate(&self, key: &str) {
        let removed = {
            let mut state = self.write_state();
            state.entries.remove(key)
        };
        if removed.is_some() {
            debug!("Cache invalidate: key={}", key);
        }
    }

    // == Purge ==
    /// Drops every entry by swapping in a fresh empty mapping.
    pub fn purge(&self) {
        let discarded = {
            let mut state = self.write_state();
            std::mem::take(&mut state.entries)
        };
        info!("Cache purged: removed {} entries", discarded.len());
    }

    // == Introspection ==
    /// Returns true if `key` is stored, regardless of the lookup switch.
    ///
    /// Not counted in statistics.
    pub fn contains_key(&self, key: &str) -> bool {
        self.read_state().entries.contains_key(key)
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.read_state().entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.read_state().entries.is_empty()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    /// Zeroes the lookup counters.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    // Values are never dropped or cloned under the write guard, so a poisoned
    // lock cannot hide a half-applied mutation.
    fn read_state(&self) -> RwLockReadGuard<'_, CacheState<V>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, CacheState<V>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone> KeyValueCache<V> {
    // == Check ==
    /// Looks up `key` and returns a clone of the stored value.
    ///
    /// The clone runs while the read guard is held, so a `Clone` impl must not
    /// call back into this cache's writers or it will deadlock. Store `Arc<T>`
    /// to make the clone a reference-count bump.
    ///
    /// # Errors
    /// - [`CacheError::Disabled`] while lookups are switched off
    /// - [`CacheError::NotFound`] if the key is absent
    pub fn check(&self, key: &str) -> Result<V> {
        let state = self.read_state();
        if state.disabled {
            self.stats.record_disabled();
            debug!("Cache lookup skipped (disabled): key={}", key);
            return Err(CacheError::Disabled);
        }

        match state.entries.get(key) {
            Some(value) => {
                self.stats.record_hit();
                debug!("Cache hit: key={}", key);
                Ok(value.clone())
            }
            None => {
                self.stats.record_miss();
                debug!("Cache miss: key={}", key);
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }
}

impl<V> Default for KeyValueCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
