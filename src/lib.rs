//! OLWSX Core (v1)
//!
//! The embeddable request-processing core of OLWSX. The host process hands
//! in a borrowed request descriptor and receives back an owned response whose
//! buffers it must release through the export pool.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                  OLWSX CORE                   │
//!                      │                                               │
//!    RequestView       │  ┌──────────┐   ┌─────────┐   ┌────────────┐ │
//!    ─────────────────▶│  │ security │──▶│ routing │──▶│   cache    │ │
//!                      │  │   gate   │   │ engine  │   │ tier chain │ │
//!                      │  └──────────┘   └────┬────┘   └─────┬──────┘ │
//!                      │                      │              │        │
//!                      │                      ▼              ▼        │
//!    Response          │  ┌──────────┐   ┌─────────┐   ┌────────────┐ │
//!    ◀─────────────────│  │  export  │◀──│ filter  │◀──│  compute   │ │
//!                      │  │   pool   │   │pipeline │   │  fallback  │ │
//!                      │  └──────────┘   └─────────┘   └────────────┘ │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns         │ │
//!                      │  │  ┌────────┐ ┌────────┐ ┌─────────────┐ │ │
//!                      │  │  │ config │ │ memory │ │observability│ │ │
//!                      │  │  │+staging│ │ arena  │ │logs, metrics│ │ │
//!                      │  │  └────────┘ └────────┘ └─────────────┘ │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └───────────────────────────────────────────────┘
//! ```
//!
//! # Boundary Contract
//!
//! - Request buffers are borrowed for the duration of one call and never
//!   retained.
//! - Response buffers are freshly allocated by the export pool and owned by
//!   the caller after a successful call; the caller releases them via
//!   [`Response::release`].
//! - A failing call never hands out buffers: every allocation made for that
//!   call is rolled back before the error returns.

// Core subsystems
pub mod cache;
pub mod config;
pub mod core;
pub mod filters;
pub mod http;
pub mod memory;
pub mod routing;

// Cross-cutting concerns
pub mod error;
pub mod observability;
pub mod security;

pub use crate::config::schema::CoreConfig;
pub use crate::core::{version, Core, CoreState, CoreStatus, CoreVersion};
pub use crate::error::CoreError;
pub use crate::http::request::RequestView;
pub use crate::http::response::Response;
