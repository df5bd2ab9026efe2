//! Cold (L3) cache tier: always-miss stub in this version.
//!
//! Placeholder for a persistent backing store; the contract is fixed so the
//! pipeline's lookup order never changes when real storage arrives.

use crate::cache::{CacheEntry, CacheTier};

/// Cold-tier stand-in: identical contract, no storage.
pub struct L3Stub;

impl CacheTier for L3Stub {
    fn lookup(&self, _key: &str) -> Option<CacheEntry> {
        None
    }

    fn insert(&self, _key: &str, _value: &[u8], _flags: u32) {}

    fn erase(&self, _key: &str) {}
}
