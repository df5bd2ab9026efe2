//! Mid (L2) cache tier, the only tier backed by real storage.
//!
//! # Design Decisions
//! - `RwLock<HashMap>`: shared lock for lookups, exclusive for writes
//! - Lookups clone the entry out so no lock is held past the call
//! - Insertion is unconditional last-write-wins; no capacity, no expiry

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::cache::{CacheEntry, CacheTier};

/// Concurrent map backing the mid tier.
pub struct L2Cache {
    store: RwLock<HashMap<String, CacheEntry>>,
}

impl L2Cache {
    /// Create an empty mid tier.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.store.read().expect("l2 lock poisoned").len()
    }

    /// True when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn now_ns() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    }
}

impl CacheTier for L2Cache {
    fn lookup(&self, key: &str) -> Option<CacheEntry> {
        let store = self.store.read().expect("l2 lock poisoned");
        store.get(key).cloned()
    }

    fn insert(&self, key: &str, value: &[u8], flags: u32) {
        let entry = CacheEntry {
            value: value.to_vec(),
            last_write_ns: Self::now_ns(),
            flags,
        };
        let mut store = self.store.write().expect("l2 lock poisoned");
        store.insert(key.to_string(), entry);
    }

    fn erase(&self, key: &str) {
        let mut store = self.store.write().expect("l2 lock poisoned");
        store.remove(key);
    }
}

impl Default for L2Cache {
    fn default() -> Self {
        Self::new()
    }
}
