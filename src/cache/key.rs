//! Cache Key Module
//!
//! Composite lookup key built from a namespace and an identifier.

use std::fmt;

/// Version tag embedded in every key.
///
/// Bump when the shape of cached values changes so entries written by an
/// older layout can never be read back as the new one.
pub const CACHE_VERSION: u32 = 0;

// == Cache Key ==
/// Opaque composite key addressing one cache entry.
///
/// The parts are kept separate rather than joined into one string, so
/// `("a_b", "c")` and `("a", "b_c")` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    version: u32,
    namespace: String,
    id: String,
}

impl CacheKey {
    /// Builds the key for `(namespace, id)` under the current [`CACHE_VERSION`].
    pub fn new(namespace: &str, id: &str) -> Self {
        Self::with_version(CACHE_VERSION, namespace, id)
    }

    pub(crate) fn with_version(version: u32, namespace: &str, id: &str) -> Self {
        Self {
            version,
            namespace: namespace.to_string(),
            id: id.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}_{}", self.version, self.namespace, self.id)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_equal_parts_address_same_entry() {
        assert_eq!(CacheKey::new("rules", "42"), CacheKey::new("rules", "42"));
    }

    #[test]
    fn test_key_separator_cannot_collide() {
        let left = CacheKey::new("a_b", "c");
        let right = CacheKey::new("a", "b_c");

        // Same display form, different keys
        assert_eq!(left.to_string(), right.to_string());
        assert_ne!(left, right);
    }

    #[test]
    fn test_key_version_isolates_entries() {
        let current = CacheKey::new("rules", "42");
        let bumped = CacheKey::with_version(CACHE_VERSION + 1, "rules", "42");
        assert_ne!(current, bumped);
    }

    #[test]
    fn test_key_display() {
        let key = CacheKey::new("warfish-state-cards", "1001");
        assert_eq!(key.to_string(), "0-warfish-state-cards_1001");
        assert_eq!(key.namespace(), "warfish-state-cards");
        assert_eq!(key.id(), "1001");
    }
}
