//! Export buffer pool.
//!
//! # Responsibilities
//! - Allocate the response buffers whose ownership passes to the caller
//! - Release exactly what was allocated, through one designated operation
//! - Track live allocations so leak checks are structural, not conventional
//!
//! # Design Decisions
//! - Pure labeled allocator: no knowledge of request/cache/router semantics
//! - Allocation failure is recoverable (`None`), never a fatal abort
//! - Zero-length requests export no buffer (`None`), matching the boundary
//!   convention that an absent body is a null buffer

use std::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Number of export buffers currently allocated and not yet released.
static LIVE: AtomicUsize = AtomicUsize::new(0);

/// An owned, heap-allocated buffer destined for the caller.
///
/// Construction always pairs with a single release through
/// [`ExportPool::release`]; the type deliberately has no `Drop` impl so that
/// ownership transfer across the boundary stays explicit.
#[derive(Debug)]
pub struct ExportBuf {
    ptr: NonNull<u8>,
    len: usize,
    layout: Layout,
}

// The buffer is uniquely owned and only read through shared references.
unsafe impl Send for ExportBuf {}
unsafe impl Sync for ExportBuf {}

impl ExportBuf {
    /// Buffer contents.
    pub fn as_slice(&self) -> &[u8] {
        // Safety: ptr/len describe a single live allocation owned by self.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Buffer length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the buffer holds no bytes (never the case for pool output).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// The allocator backing every exported response buffer.
pub struct ExportPool;

impl ExportPool {
    /// Allocate `len` bytes with the requested alignment.
    ///
    /// Returns `None` for zero length, an invalid alignment, or allocator
    /// failure. Alignments up to the platform pointer size take the default
    /// allocation path; larger powers of two take the aligned path; both are
    /// covered by the `Layout`-based allocator.
    pub fn alloc(len: usize, align: usize) -> Option<ExportBuf> {
        if len == 0 {
            return None;
        }
        let layout = Layout::from_size_align(len, align).ok()?;
        // Safety: layout has non-zero size.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw)?;
        LIVE.fetch_add(1, Ordering::Relaxed);
        Some(ExportBuf { ptr, len, layout })
    }

    /// Allocate a buffer holding a copy of `src` (byte alignment).
    pub fn copy_from(src: &[u8]) -> Option<ExportBuf> {
        let buf = Self::alloc(src.len(), 1)?;
        // Safety: buf owns len bytes; src and buf cannot overlap.
        unsafe {
            std::ptr::copy_nonoverlapping(src.as_ptr(), buf.ptr.as_ptr(), src.len());
        }
        Some(buf)
    }

    /// Release one previously exported buffer.
    pub fn release(buf: ExportBuf) {
        // Safety: ptr/layout are exactly what alloc produced; ExportBuf is
        // consumed by value so a double release cannot compile.
        unsafe { dealloc(buf.ptr.as_ptr(), buf.layout) };
        LIVE.fetch_sub(1, Ordering::Relaxed);
    }

    /// Release an optional buffer; no-op on `None`.
    pub fn release_opt(buf: Option<ExportBuf>) {
        if let Some(b) = buf {
            Self::release(b);
        }
    }

    /// Number of currently live export buffers (telemetry / leak checks).
    pub fn live() -> usize {
        LIVE.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_round_trip() {
        let buf = ExportPool::copy_from(b"hello").unwrap();
        assert_eq!(buf.as_slice(), b"hello");
        assert_eq!(buf.len(), 5);
        ExportPool::release(buf);
    }

    #[test]
    fn test_zero_length_exports_nothing() {
        assert!(ExportPool::alloc(0, 1).is_none());
        assert!(ExportPool::copy_from(b"").is_none());
    }

    #[test]
    fn test_invalid_alignment_is_recoverable() {
        assert!(ExportPool::alloc(16, 3).is_none());
        assert!(ExportPool::alloc(16, 0).is_none());
    }

    #[test]
    fn test_aligned_allocation() {
        let buf = ExportPool::alloc(64, 64).unwrap();
        assert_eq!(buf.as_slice().as_ptr() as usize % 64, 0);
        ExportPool::release(buf);
    }

    #[test]
    fn test_release_opt_noop_on_none() {
        ExportPool::release_opt(None);
    }
}
