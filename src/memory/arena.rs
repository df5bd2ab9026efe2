//! Transient bump arena for short-lived, non-exported work.
//!
//! # Responsibilities
//! - Hand out aligned regions from one fixed-capacity block
//! - Reclaim everything at once on an external batch-boundary reset
//!
//! # Design Decisions
//! - One mutex shared by `allocate` and `reset`; offsets only move forward
//!   between resets
//! - Capacity exhaustion returns `None`, it never grows the block
//! - Nothing allocated here ever crosses the boundary

use std::alloc::{alloc, dealloc, Layout};
use std::ptr::NonNull;
use std::sync::Mutex;

// Arena blocks are aligned generously so any reasonable request alignment
// can be satisfied by offset arithmetic alone.
const BLOCK_ALIGN: usize = 64;

struct ArenaInner {
    base: NonNull<u8>,
    capacity: usize,
    offset: usize,
}

/// Thread-safe bump allocator with explicit full reset.
pub struct TransientArena {
    inner: Mutex<ArenaInner>,
}

// The block is uniquely owned; all offset state sits behind the mutex.
unsafe impl Send for TransientArena {}
unsafe impl Sync for TransientArena {}

impl TransientArena {
    /// Allocate an arena with the given fixed capacity in bytes.
    pub fn new(capacity: usize) -> Self {
        let layout = Layout::from_size_align(capacity.max(1), BLOCK_ALIGN)
            .expect("arena capacity produces a valid layout");
        // Safety: layout has non-zero size.
        let raw = unsafe { alloc(layout) };
        let base = NonNull::new(raw).expect("arena block allocation");
        Self {
            inner: Mutex::new(ArenaInner {
                base,
                capacity,
                offset: 0,
            }),
        }
    }

    /// Bump-allocate `len` bytes at the requested alignment.
    ///
    /// Returns `None` when the aligned region would exceed capacity or the
    /// alignment is not a power of two. The returned pointer stays valid
    /// until the next [`reset`](Self::reset); callers must not hold it past
    /// that point.
    pub fn allocate(&self, len: usize, align: usize) -> Option<NonNull<u8>> {
        if len == 0 || align == 0 || !align.is_power_of_two() || align > BLOCK_ALIGN {
            return None;
        }
        let mut inner = self.inner.lock().expect("arena mutex poisoned");
        let aligned = inner.offset.checked_add(align - 1)? & !(align - 1);
        let end = aligned.checked_add(len)?;
        if end > inner.capacity {
            return None;
        }
        inner.offset = end;
        // Safety: aligned < capacity, so the offset pointer stays inside the
        // block allocation.
        let ptr = unsafe { inner.base.as_ptr().add(aligned) };
        NonNull::new(ptr)
    }

    /// Reset the arena offset to zero, invalidating all prior allocations.
    pub fn reset(&self) {
        let mut inner = self.inner.lock().expect("arena mutex poisoned");
        inner.offset = 0;
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.inner.lock().expect("arena mutex poisoned").capacity
    }

    /// Bytes consumed since the last reset (including alignment padding).
    pub fn used(&self) -> usize {
        self.inner.lock().expect("arena mutex poisoned").offset
    }
}

impl Drop for TransientArena {
    fn drop(&mut self) {
        let inner = self.inner.get_mut().expect("arena mutex poisoned");
        let layout = Layout::from_size_align(inner.capacity.max(1), BLOCK_ALIGN)
            .expect("arena capacity produces a valid layout");
        // Safety: base/layout are exactly what new() allocated.
        unsafe { dealloc(inner.base.as_ptr(), layout) };
    }
}
