//! Fast (L1) cache tier: always-miss stub in this version.
//!
//! Keeps the pipeline's top-down lookup order stable until a real in-process
//! hot cache backs this tier.

use crate::cache::{CacheEntry, CacheTier};

/// Fast-tier stand-in: identical contract, no storage.
pub struct L1Stub;

impl CacheTier for L1Stub {
    fn lookup(&self, _key: &str) -> Option<CacheEntry> {
        None
    }

    fn insert(&self, _key: &str, _value: &[u8], _flags: u32) {}

    fn erase(&self, _key: &str) {}
}
