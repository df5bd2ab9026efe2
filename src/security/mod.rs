//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits.rs (size ceilings, rejected before any processing)
//!     → gate.rs (edge-hint classification: blocked / rate-limited / allowed)
//!     → Pass to routing
//! ```
//!
//! # Design Decisions
//! - The gate is a pass-through classifier of hints the edge layer already
//!   computed; no sliding window or quota enforcement lives here
//! - Counters are advisory telemetry (relaxed atomics, no cross-counter
//!   consistency promised)
//! - Oversize input is rejected immediately, before the gate runs

pub mod gate;
pub mod limits;

pub use gate::{SecDecision, SecStats, SecurityGate};
pub use limits::Limits;
