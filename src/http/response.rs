//! Owned response descriptor.
//!
//! # Responsibilities
//! - Hold the status, exported header/body buffers and meta flags
//! - Transfer buffer ownership to the caller on success
//! - Release both buffers through the one designated pool operation
//!
//! # Design Decisions
//! - Buffers come exclusively from the export pool
//! - An absent body is `None`, never an empty allocation
//! - `release` consumes the response, so freed buffers cannot be touched

use crate::memory::export::{ExportBuf, ExportPool};

/// Canonical response produced by the pipeline; the caller owns the buffers
/// from the moment a call returns success.
#[derive(Debug)]
pub struct Response {
    /// HTTP-style status code.
    pub status: u16,

    /// Meta-flag bit groups (see [`crate::http::flags`]).
    pub meta_flags: u32,

    headers: Option<ExportBuf>,
    body: Option<ExportBuf>,
}

impl Response {
    pub(crate) fn new(
        status: u16,
        headers: Option<ExportBuf>,
        body: Option<ExportBuf>,
        meta_flags: u32,
    ) -> Self {
        Self {
            status,
            meta_flags,
            headers,
            body,
        }
    }

    /// Flat header block, empty when no headers were exported.
    pub fn headers(&self) -> &[u8] {
        self.headers.as_ref().map(ExportBuf::as_slice).unwrap_or(&[])
    }

    /// Response body, empty when absent.
    pub fn body(&self) -> &[u8] {
        self.body.as_ref().map(ExportBuf::as_slice).unwrap_or(&[])
    }

    /// True when no body buffer was exported.
    pub fn body_is_absent(&self) -> bool {
        self.body.is_none()
    }

    /// Release both exported buffers back to the pool.
    pub fn release(self) {
        ExportPool::release_opt(self.headers);
        ExportPool::release_opt(self.body);
    }
}
