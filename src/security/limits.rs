//! Request and key size ceilings.
//!
//! # Responsibilities
//! - Enforce maximum header block, body, path and cache-key sizes
//! - Reject oversize input before any processing begins
//!
//! # Design Decisions
//! - Ceilings are fixed per Core instance, taken from `CoreConfig`
//! - Checks are pure; the first exceeded ceiling names the offending field

use crate::config::schema::LimitsConfig;
use crate::error::CoreError;
use crate::http::request::RequestView;

/// Size ceilings enforced at the boundary.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Maximum flat header block size in bytes.
    pub max_header_bytes: usize,
    /// Maximum body size in bytes.
    pub max_body_bytes: usize,
    /// Maximum path size in bytes.
    pub max_path_bytes: usize,
    /// Maximum cache key size in bytes.
    pub max_key_bytes: usize,
}

impl Limits {
    /// Build limits from the configuration section.
    pub fn from_config(cfg: &LimitsConfig) -> Self {
        Self {
            max_header_bytes: cfg.max_header_bytes,
            max_body_bytes: cfg.max_body_bytes,
            max_path_bytes: cfg.max_path_bytes,
            max_key_bytes: cfg.max_key_bytes,
        }
    }

    /// Validate one request against every ceiling.
    pub fn validate_request(&self, req: &RequestView<'_>) -> Result<(), CoreError> {
        if req.headers_flat.len() > self.max_header_bytes {
            return Err(CoreError::TooLarge("headers"));
        }
        if req.body.len() > self.max_body_bytes {
            return Err(CoreError::TooLarge("body"));
        }
        if req.path.len() > self.max_path_bytes {
            return Err(CoreError::TooLarge("path"));
        }
        Ok(())
    }

    /// Validate an administrative cache key.
    pub fn validate_key(&self, key: &str) -> Result<(), CoreError> {
        if key.is_empty() {
            return Err(CoreError::InvalidArgument("key"));
        }
        if key.len() > self.max_key_bytes {
            return Err(CoreError::TooLarge("key"));
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::from_config(&LimitsConfig::default())
    }
}
