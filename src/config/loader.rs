//! Configuration loading from disk.
//!
//! # Design Decisions
//! - Serde handles syntactic validation; semantic checks run afterwards
//! - Returns all semantic errors, not just the first

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::CoreConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<CoreConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: CoreConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Semantic validation of a parsed configuration.
pub fn validate_config(config: &CoreConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.arena.capacity_bytes == 0 {
        errors.push("arena.capacity_bytes must be non-zero".to_string());
    }
    if config.limits.max_header_bytes == 0 {
        errors.push("limits.max_header_bytes must be non-zero".to_string());
    }
    if config.limits.max_body_bytes == 0 {
        errors.push("limits.max_body_bytes must be non-zero".to_string());
    }
    if config.limits.max_path_bytes == 0 {
        errors.push("limits.max_path_bytes must be non-zero".to_string());
    }
    if config.limits.max_key_bytes == 0 {
        errors.push("limits.max_key_bytes must be non-zero".to_string());
    }
    if config.limits.max_key_bytes > config.limits.max_path_bytes {
        errors.push("limits.max_key_bytes must not exceed limits.max_path_bytes".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
