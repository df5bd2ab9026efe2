//! Two-phase staged-generation configuration acceptance.
//!
//! # Responsibilities
//! - `stage`: accept an opaque blob tagged with a caller-assigned generation
//! - `apply`: succeed only when the presented generation matches the staged
//!   one
//!
//! # Design Decisions
//! - Blob content is never validated or diffed; only the generation is
//!   recorded, so no half-applied state can ever be observed
//! - Release store in `stage`, acquire load in `apply`: a thread that applies
//!   after observing a stage always sees the staged generation
//! - `apply` is a pure comparison; there is no separate "active" state
//!   distinct from "staged" in this version

use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::CoreError;

/// Staged-generation configuration acceptor.
#[derive(Default)]
pub struct ConfigStaging {
    staged: AtomicU32,
}

impl ConfigStaging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `generation` as the current staged value.
    ///
    /// Empty blobs are rejected as invalid; content is otherwise opaque.
    pub fn stage(&self, blob: &[u8], generation: u32) -> Result<(), CoreError> {
        if blob.is_empty() {
            return Err(CoreError::InvalidArgument("config blob"));
        }
        self.staged.store(generation, Ordering::Release);
        tracing::debug!(generation, blob_len = blob.len(), "Configuration staged");
        Ok(())
    }

    /// Succeed iff `generation` equals the currently staged value.
    pub fn apply(&self, generation: u32) -> Result<(), CoreError> {
        let staged = self.staged.load(Ordering::Acquire);
        if staged != generation {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }

    /// The currently staged generation.
    pub fn staged_generation(&self) -> u32 {
        self.staged.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_then_apply_matching_generation() {
        let staging = ConfigStaging::new();
        staging.stage(b"blob-v5", 5).unwrap();
        assert!(staging.apply(5).is_ok());
        assert_eq!(staging.apply(6), Err(CoreError::NotFound));
    }

    #[test]
    fn test_empty_blob_rejected() {
        let staging = ConfigStaging::new();
        assert_eq!(
            staging.stage(b"", 1),
            Err(CoreError::InvalidArgument("config blob"))
        );
        // A rejected stage leaves the staged generation untouched.
        assert_eq!(staging.staged_generation(), 0);
    }

    #[test]
    fn test_restaging_moves_the_match_target() {
        let staging = ConfigStaging::new();
        staging.stage(b"a", 1).unwrap();
        staging.stage(b"b", 2).unwrap();
        assert_eq!(staging.apply(1), Err(CoreError::NotFound));
        assert!(staging.apply(2).is_ok());
    }

    #[test]
    fn test_apply_is_repeatable() {
        // apply performs no state transition beyond the comparison.
        let staging = ConfigStaging::new();
        staging.stage(b"a", 3).unwrap();
        assert!(staging.apply(3).is_ok());
        assert!(staging.apply(3).is_ok());
    }
}
