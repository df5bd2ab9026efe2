//! Memory subsystem.
//!
//! # Data Flow
//! ```text
//! Response construction:
//!     → export.rs (ExportPool: caller-freed response buffers)
//!     → caller releases via Response::release / ExportPool::release
//!
//! Short-lived scratch work:
//!     → arena.rs (TransientArena: bump allocation, batch reset)
//!     → reclaimed only by an externally triggered full reset
//! ```
//!
//! # Design Decisions
//! - The export pool is the only allocator whose output crosses the boundary
//! - Every allocation path has a matching rollback path; the pool counts live
//!   buffers so tests can check the invariant structurally
//! - The arena never reclaims individual allocations (no per-allocation free)

pub mod arena;
pub mod export;

pub use arena::TransientArena;
pub use export::{ExportBuf, ExportPool};
