//! Cache Entry Module
//!
//! A stored value paired with the handle of its pending expiry.

use std::time::{Duration, Instant};

use tokio::task::AbortHandle;

// == Cache Entry ==
/// A single live cache entry.
#[derive(Debug)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion generation; the expiry task only evicts a matching generation
    pub generation: u64,
    /// Insertion time
    pub inserted_at: Instant,
    /// Lifetime supplied at insertion
    pub ttl: Duration,
    /// Cancels the pending expiry task
    expiry: AbortHandle,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    pub fn new(value: V, generation: u64, ttl: Duration, expiry: AbortHandle) -> Self {
        Self {
            value,
            generation,
            inserted_at: Instant::now(),
            ttl,
            expiry,
        }
    }

    // == Cancel Expiry ==
    /// Aborts the pending expiry task.
    ///
    /// Must run before the entry is replaced or dropped from the map so a
    /// superseded timer cannot fire.
    pub fn cancel_expiry(&self) {
        self.expiry.abort();
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, saturating at zero.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.inserted_at.elapsed())
    }
}
