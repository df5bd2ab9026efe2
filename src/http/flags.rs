//! Meta-flag bit groups attached to every response.
//!
//! Three OR-combined groups: compression kind, cache outcome, security
//! outcome. Bit values are part of the stable boundary contract.

/// No compression intent.
pub const COMP_NONE: u32 = 0x0000_0000;
/// Gzip marker (the shipped filter only ever sets this kind).
pub const COMP_GZIP: u32 = 0x0000_0001;
/// Zstd marker (reserved).
pub const COMP_ZSTD: u32 = 0x0000_0002;
/// Brotli marker (reserved).
pub const COMP_BROTLI: u32 = 0x0000_0004;

/// Response was computed, not served from a cache tier.
pub const CACHE_MISS: u32 = 0x0001_0000;
/// Served from the fast (L1) tier.
pub const CACHE_L1: u32 = 0x0002_0000;
/// Served from the mid (L2) tier.
pub const CACHE_L2: u32 = 0x0004_0000;
/// Served from the cold (L3) tier.
pub const CACHE_L3: u32 = 0x0008_0000;

/// Security gate allowed the request.
pub const SEC_OK: u32 = 0x0010_0000;
/// Blocked by the WAF hint.
pub const SEC_WAF: u32 = 0x0020_0000;
/// Classified as rate-limited.
pub const SEC_RATELIM: u32 = 0x0040_0000;
