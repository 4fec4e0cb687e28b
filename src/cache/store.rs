//! Cache Store Module
//!
//! Namespaced key-value store where every entry carries its own one-shot
//! expiry timer.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheKey, CacheStats};
use crate::error::CacheError;
use crate::tasks::spawn_expiry;

// == TTL Cache ==
/// Time-bounded cache keyed by `(namespace, id)`.
///
/// Cloning is cheap and yields another handle to the same store. Expiry
/// tasks only hold a weak reference, so once the last handle is dropped
/// every pending timer is aborted and nothing outlives the store.
pub struct TtlCache<V> {
    inner: Arc<Inner<V>>,
}

struct Inner<V> {
    state: Mutex<State<V>>,
    runtime: Handle,
}

struct State<V> {
    entries: HashMap<CacheKey, CacheEntry<V>>,
    /// Last generation handed out; bumped on every installed entry
    generation: u64,
    stats: CacheStats,
}

impl<V> TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates an empty cache whose timers run on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime, like `tokio::spawn`.
    pub fn new() -> Self {
        Self::with_handle(Handle::current())
    }

    /// Creates an empty cache whose timers run on `runtime`.
    pub fn with_handle(runtime: Handle) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(State {
                    entries: HashMap::new(),
                    generation: 0,
                    stats: CacheStats::new(),
                }),
                runtime,
            }),
        }
    }

    // == Put ==
    /// Inserts or replaces the entry for `(namespace, id)`.
    ///
    /// A previous entry's expiry is cancelled before the new one is
    /// scheduled, and the new value and lifetime replace the old ones
    /// outright. A zero `ttl` removes any previous entry and stores nothing.
    pub fn put(&self, namespace: &str, id: &str, value: V, ttl: Duration) {
        let key = CacheKey::new(namespace, id);
        let mut state = self.inner.state.lock();

        if let Some(previous) = state.entries.remove(&key) {
            previous.cancel_expiry();
            state.stats.record_replacement();
            trace!(key = %key, "Replacing cache entry");
        }

        if ttl.is_zero() {
            debug!(key = %key, "Zero TTL, entry not stored");
            let count = state.entries.len();
            state.stats.set_total_entries(count);
            return;
        }

        state.generation += 1;
        let generation = state.generation;

        let weak: Weak<Inner<V>> = Arc::downgrade(&self.inner);
        let expired_key = key.clone();
        let expiry = spawn_expiry(&self.inner.runtime, key.to_string(), ttl, move || {
            if let Some(inner) = weak.upgrade() {
                inner.expire(&expired_key, generation);
            }
        });

        state
            .entries
            .insert(key, CacheEntry::new(value, generation, ttl, expiry));
        let count = state.entries.len();
        state.stats.set_total_entries(count);
    }

    // == Has ==
    /// Returns whether a live entry exists for `(namespace, id)`.
    ///
    /// Does not count as a lookup in [`CacheStats`].
    pub fn has(&self, namespace: &str, id: &str) -> bool {
        let key = CacheKey::new(namespace, id);
        self.inner.state.lock().entries.contains_key(&key)
    }

    // == Get ==
    /// Returns a clone of the live value for `(namespace, id)`.
    ///
    /// Fails with [`CacheError::NoSuchKey`] when nothing is stored, whether
    /// the key was never inserted, was removed, or has expired.
    pub fn get(&self, namespace: &str, id: &str) -> Result<V, CacheError> {
        let key = CacheKey::new(namespace, id);
        let mut state = self.inner.state.lock();

        match state.entries.get(&key).map(|entry| entry.value.clone()) {
            Some(value) => {
                state.stats.record_hit();
                Ok(value)
            }
            None => {
                state.stats.record_miss();
                Err(CacheError::NoSuchKey(key.to_string()))
            }
        }
    }

    // == Remove ==
    /// Cancels the pending expiry and deletes the entry.
    ///
    /// Returns `false` and leaves the cache untouched when no entry exists.
    pub fn remove(&self, namespace: &str, id: &str) -> bool {
        let key = CacheKey::new(namespace, id);
        let mut state = self.inner.state.lock();

        match state.entries.remove(&key) {
            Some(entry) => {
                entry.cancel_expiry();
                state.stats.record_removal();
                let count = state.entries.len();
                state.stats.set_total_entries(count);
                true
            }
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns the remaining lifetime of a live entry.
    pub fn ttl_remaining(&self, namespace: &str, id: &str) -> Option<Duration> {
        let key = CacheKey::new(namespace, id);
        self.inner
            .state
            .lock()
            .entries
            .get(&key)
            .map(CacheEntry::ttl_remaining)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let state = self.inner.state.lock();
        let mut stats = state.stats;
        stats.set_total_entries(state.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of live entries.
    pub fn len(&self) -> usize {
        self.inner.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> Default for TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Inner<V> {
    /// Timer callback: evicts `key` only if it still holds `generation`.
    fn expire(&self, key: &CacheKey, generation: u64) {
        let mut state = self.state.lock();

        let current = state.entries.get(key).map(|entry| entry.generation);
        if current != Some(generation) {
            trace!(key = %key, generation, "Stale expiry ignored");
            return;
        }

        state.entries.remove(key);
        state.stats.record_expiration();
        let count = state.entries.len();
        state.stats.set_total_entries(count);
        debug!(key = %key, "Cache entry expired");
    }
}

impl<V> Drop for Inner<V> {
    fn drop(&mut self) {
        for entry in self.state.get_mut().entries.values() {
            entry.cancel_expiry();
        }
    }
}

impl<V> Clone for TtlCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> fmt::Debug for TtlCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("TtlCache")
            .field("entries", &state.entries.len())
            .field("stats", &state.stats)
            .finish()
    }
}
