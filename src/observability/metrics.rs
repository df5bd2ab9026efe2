//! Metrics collection.
//!
//! # Metrics
//! - `olwsx_requests_total` (counter): processed requests by terminal outcome
//! - `olwsx_cache_lookups_total` (counter): chain lookups by result tier
//! - `olwsx_security_decisions_total` (counter): gate decisions by label
//!
//! # Design Decisions
//! - Low-overhead updates through the `metrics` facade; the embedding host
//!   installs the recorder
//! - Labels use stable, low-cardinality values only

use metrics::counter;

/// Record one processed request with its terminal outcome label.
pub fn record_request(outcome: &'static str) {
    counter!("olwsx_requests_total", "outcome" => outcome).increment(1);
}

/// Record one cache chain lookup result ("L1"/"L2"/"L3"/"miss").
pub fn record_cache_lookup(result: &'static str) {
    counter!("olwsx_cache_lookups_total", "result" => result).increment(1);
}

/// Record one security gate decision.
pub fn record_security_decision(decision: &'static str) {
    counter!("olwsx_security_decisions_total", "decision" => decision).increment(1);
}
