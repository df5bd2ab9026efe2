//! Configuration schema definitions.
//!
//! This module defines the build-time configuration of a Core instance.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the core.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CoreConfig {
    /// Transient arena settings.
    pub arena: ArenaConfig,

    /// Request/key size ceilings.
    pub limits: LimitsConfig,
}

/// Transient arena configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Arena capacity in bytes.
    pub capacity_bytes: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            capacity_bytes: 32 * 1024 * 1024, // 32 MiB
        }
    }
}

/// Size ceilings enforced before any request processing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum flat header block size in bytes.
    pub max_header_bytes: usize,

    /// Maximum body size in bytes.
    pub max_body_bytes: usize,

    /// Maximum path size in bytes.
    pub max_path_bytes: usize,

    /// Maximum cache key size in bytes.
    pub max_key_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_header_bytes: 2 * 1024 * 1024,  // 2 MiB
            max_body_bytes: 64 * 1024 * 1024,   // 64 MiB
            max_path_bytes: 64 * 1024,          // 64 KiB
            max_key_bytes: 64 * 1024,           // 64 KiB
        }
    }
}
