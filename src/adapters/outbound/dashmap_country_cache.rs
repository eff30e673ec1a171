//! DashMap Country Cache
//!
//! Implements CountryCache using DashMap for lock-free concurrent access.

use crate::domain::ports::CountryCache;
use dashmap::DashMap;

/// DashMap-backed, capacity-bounded IP-to-country cache.
///
/// Entries are idempotent, so eviction is deliberately naive: when the
/// cache is full, inserting a new key drops an arbitrary existing entry.
/// A dropped entry costs one extra upstream lookup on the next request
/// from that IP, nothing more.
pub struct DashMapCountryCache {
    entries: DashMap<String, String>,
    capacity: usize,
}

impl DashMapCountryCache {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A zero capacity disables caching entirely: every lookup goes
    /// upstream.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            capacity,
        }
    }
}

impl CountryCache for DashMapCountryCache {
    fn get(&self, ip: &str) -> Option<String> {
        self.entries.get(ip).map(|entry| entry.value().clone())
    }

    fn insert(&self, ip: &str, country: &str) {
        if self.capacity == 0 {
            return;
        }

        if !self.entries.contains_key(ip) && self.entries.len() >= self.capacity {
            let victim = self.entries.iter().next().map(|e| e.key().clone());
            if let Some(key) = victim {
                self.entries.remove(&key);
            }
        }

        self.entries.insert(ip.to_string(), country.to_string());
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_miss_then_hit() {
        let cache = DashMapCountryCache::new(16);

        assert_eq!(cache.get("203.0.113.7"), None);
        cache.insert("203.0.113.7", "AL");
        assert_eq!(cache.get("203.0.113.7"), Some("AL".to_string()));
    }

    #[test]
    fn test_reinsert_same_key_is_idempotent() {
        let cache = DashMapCountryCache::new(2);

        cache.insert("203.0.113.7", "AL");
        cache.insert("203.0.113.8", "US");
        cache.insert("203.0.113.7", "AL");

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("203.0.113.7"), Some("AL".to_string()));
        assert_eq!(cache.get("203.0.113.8"), Some("US".to_string()));
    }

    #[test]
    fn test_capacity_bound_holds() {
        let cache = DashMapCountryCache::new(4);

        for i in 0..20 {
            cache.insert(&format!("198.51.100.{}", i), "AL");
        }

        assert!(cache.len() <= 4);
    }

    #[test]
    fn test_eviction_keeps_newest_insert() {
        let cache = DashMapCountryCache::new(1);

        cache.insert("203.0.113.7", "AL");
        cache.insert("203.0.113.8", "US");

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("203.0.113.8"), Some("US".to_string()));
    }

    #[test]
    fn test_zero_capacity_disables_cache() {
        let cache = DashMapCountryCache::new(0);

        cache.insert("203.0.113.7", "AL");

        assert!(cache.is_empty());
        assert_eq!(cache.get("203.0.113.7"), None);
    }

    #[test]
    fn test_concurrent_inserts_same_ip() {
        use std::sync::Arc;

        let cache = Arc::new(DashMapCountryCache::new(64));
        let mut handles = Vec::new();

        for _ in 0..8 {
            let cache = cache.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    cache.insert("203.0.113.7", "AL");
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("203.0.113.7"), Some("AL".to_string()));
    }
}
