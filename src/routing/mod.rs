//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (active table load)
//!     → matcher.rs (ordered first-match prefix scan)
//!     → Return: matched RouteRule or explicit no-match
//!
//! Table replacement:
//!     Vec<RouteRule>
//!     → router.rs set_rules (wholesale atomic swap)
//!     → readers observe old or new table, never a mix
//! ```
//!
//! # Design Decisions
//! - First match wins by table position, not by prefix specificity
//! - No regex in the hot path (literal prefix matching only)
//! - Empty prefixes never match (no accidental universal routes)
//! - Matching is a pure read with no side effects

pub mod matcher;
pub mod router;

pub use matcher::RouteRule;
pub use router::Router;
