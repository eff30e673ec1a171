//! IP-to-Country Cache Port
//!
//! Defines the interface for caching geo-IP lookup results.

/// Cache of IP address to resolved country code.
///
/// An explicitly owned, injectable component rather than a process-global
/// map: lifecycle and memory bounds live behind this interface. Entries
/// are idempotent (re-resolving the same IP yields the same country), so
/// implementations need no coordination beyond concurrent-safe reads and
/// writes, and may evict in any order.
///
/// Only successful lookups are stored; failures are left uncached so a
/// later request retries the lookup.
pub trait CountryCache: Send + Sync {
    /// Look up the cached country code for an IP, if any.
    fn get(&self, ip: &str) -> Option<String>;

    /// Store a resolved country code for an IP.
    fn insert(&self, ip: &str, country: &str);

    /// Number of cached entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
