//! Canonical request/response descriptors crossing the core boundary.
//!
//! # Data Flow
//! ```text
//! Host process
//!     → request.rs (RequestView: borrowed fields, valid for one call)
//!     → core pipeline
//!     → response.rs (Response: exported buffers owned by the caller)
//!     → flags.rs (meta-flag bit groups summarizing the outcome)
//! ```
//!
//! # Design Decisions
//! - Requests are views: the core never retains a reference past the call
//! - Responses own export-pool buffers until `release` hands them back
//! - Meta flags are OR-combined bit groups, stable across versions

pub mod flags;
pub mod request;
pub mod response;

pub use request::RequestView;
pub use response::Response;
