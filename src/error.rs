//! Error taxonomy for all public core operations.
//!
//! # Design Decisions
//! - Every public operation returns `Result<_, CoreError>`; no panics cross
//!   the boundary
//! - Blocked / rate-limited outcomes are successful responses, not errors
//! - Reserved variants exist for forward compatibility and are never produced
//!   by current behavior

use thiserror::Error;

/// Error kinds surfaced by core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required field was missing or zero-length.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An input exceeded its size ceiling.
    #[error("input too large: {0}")]
    TooLarge(&'static str),

    /// Export buffer allocation failed while building a response.
    #[error("export buffer allocation failed")]
    AllocFailed,

    /// Operation attempted before `init` or after `shutdown`.
    #[error("core is not initialized")]
    NotInitialized,

    /// Presented config generation does not match the staged one.
    #[error("no staged configuration with that generation")]
    NotFound,

    /// Reserved: general internal failure.
    #[error("internal failure")]
    Internal,

    /// Reserved: operation not supported by this build.
    #[error("unsupported operation")]
    Unsupported,

    /// Reserved: resource temporarily busy.
    #[error("resource busy")]
    Busy,
}
