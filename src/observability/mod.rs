//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters via the metrics facade)
//!
//! Consumers:
//!     → Host process log subscriber (stdout, file, remote)
//!     → Host-installed metrics recorder (e.g. Prometheus exporter)
//! ```
//!
//! # Design Decisions
//! - This is an embeddable core: it emits through facades and never installs
//!   its own exporter or spawns servers
//! - Metrics are cheap (atomic increments behind the facade)
//! - Trace/span IDs from the request flow through log events

pub mod logging;
pub mod metrics;
