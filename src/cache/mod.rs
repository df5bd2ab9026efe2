//! Cache subsystem.
//!
//! # Data Flow
//! ```text
//! GET request path (cache key)
//!     → l1.rs (fast tier, always-miss stub in this version)
//!     → l2.rs (mid tier, the RwLock-backed map that actually stores data)
//!     → l3.rs (cold tier, always-miss stub in this version)
//!     → stop at first hit; full miss computes a response and inserts into L2
//! ```
//!
//! # Design Decisions
//! - One `CacheTier` capability shared by all three tiers; the stubs keep the
//!   lookup order stable even though only L2 persists data
//! - Strictly top-down, no lock held across tiers
//! - No promotion/demotion, no eviction, no expiry: entries persist until
//!   explicitly invalidated and insertion is last-write-wins

pub mod l1;
pub mod l2;
pub mod l3;

use crate::http::flags;
use crate::observability::metrics;

pub use l1::L1Stub;
pub use l2::L2Cache;
pub use l3::L3Stub;

/// One stored cache entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Stored value bytes.
    pub value: Vec<u8>,
    /// Wall-clock nanoseconds of the last write.
    pub last_write_ns: u64,
    /// Metadata flags recorded with the value.
    pub flags: u32,
}

/// Capability shared by every cache tier.
pub trait CacheTier: Send + Sync {
    /// Look up `key`; `None` is a miss.
    fn lookup(&self, key: &str) -> Option<CacheEntry>;

    /// Insert `value` under `key`, overwriting unconditionally.
    fn insert(&self, key: &str, value: &[u8], flags: u32);

    /// Remove `key` if present.
    fn erase(&self, key: &str);
}

/// Which tier produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    L1,
    L2,
    L3,
}

impl Tier {
    /// Meta-flag bit for a hit on this tier.
    pub fn meta_flag(self) -> u32 {
        match self {
            Tier::L1 => flags::CACHE_L1,
            Tier::L2 => flags::CACHE_L2,
            Tier::L3 => flags::CACHE_L3,
        }
    }

    /// Label used in the `Cache:` response header and in metrics.
    pub fn label(self) -> &'static str {
        match self {
            Tier::L1 => "L1",
            Tier::L2 => "L2",
            Tier::L3 => "L3",
        }
    }
}

/// The fixed top-down tier chain (fast, mid, cold).
pub struct TierChain {
    l1: L1Stub,
    l2: L2Cache,
    l3: L3Stub,
}

impl TierChain {
    /// Build the chain: L1 stub, real L2, L3 stub.
    pub fn new() -> Self {
        Self {
            l1: L1Stub,
            l2: L2Cache::new(),
            l3: L3Stub,
        }
    }

    /// Query the tiers strictly top-down, stopping at the first hit.
    pub fn lookup(&self, key: &str) -> Option<(Tier, CacheEntry)> {
        let ordered: [(Tier, &dyn CacheTier); 3] = [
            (Tier::L1, &self.l1),
            (Tier::L2, &self.l2),
            (Tier::L3, &self.l3),
        ];
        for (tier, cache) in ordered {
            if let Some(entry) = cache.lookup(key) {
                metrics::record_cache_lookup(tier.label());
                return Some((tier, entry));
            }
        }
        metrics::record_cache_lookup("miss");
        None
    }

    /// The mid tier, the only one taking writes in this version.
    pub fn l2(&self) -> &L2Cache {
        &self.l2
    }
}

impl Default for TierChain {
    fn default() -> Self {
        Self::new()
    }
}
