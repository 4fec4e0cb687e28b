//! Cache Module
//!
//! Provides an in-memory, namespaced cache whose entries expire on their own
//! timers.

mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub(crate) use entry::CacheEntry;
pub use key::{CacheKey, CACHE_VERSION};
pub use stats::CacheStats;
pub use store::TtlCache;
