//! Expiry Task
//!
//! One-shot delayed task that evicts a single cache entry.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::debug;

/// Spawns a task that runs `on_expire` once `delay` has elapsed.
///
/// The returned [`AbortHandle`] cancels the task. Aborting a task that is
/// still sleeping guarantees `on_expire` never runs; callers that can race
/// with a task already past its sleep must make `on_expire` idempotent
/// against newer state.
///
/// # Arguments
/// * `handle` - Runtime the task is spawned on
/// * `key` - Display form of the entry key, used for logging only
/// * `delay` - Time to wait before firing
/// * `on_expire` - Eviction callback
///
/// # Example
/// ```ignore
/// let abort = spawn_expiry(&Handle::current(), "0-rules_42".into(), ttl, move || {
///     evict();
/// });
/// // Later, when the entry is replaced:
/// abort.abort();
/// ```
pub fn spawn_expiry<F>(handle: &Handle, key: String, delay: Duration, on_expire: F) -> AbortHandle
where
    F: FnOnce() + Send + 'static,
{
    handle
        .spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(key = %key, "Expiry timer fired");
            on_expire();
        })
        .abort_handle()
}
