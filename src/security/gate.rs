//! Edge-hint security gate.
//!
//! # Responsibilities
//! - Classify edge hint bits into blocked / rate-limited / allowed
//! - Keep per-outcome counters for telemetry
//!
//! # Design Decisions
//! - WAF hint outranks the rate-limit hint; allowed is the default
//! - Relaxed atomic increments: counters never gate later decisions
//! - `stats` promises no cross-counter consistency

use std::sync::atomic::{AtomicU64, Ordering};

use crate::observability::metrics;

/// Edge hint bit: the edge layer believes this request should be rate-limited.
pub const EDGE_HINT_RATE_LIMIT: u32 = 0x1;
/// Edge hint bit: the edge layer's WAF flagged this request.
pub const EDGE_HINT_WAF: u32 = 0x2;

/// Security classification of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecDecision {
    Allowed,
    RateLimited,
    Blocked,
}

impl SecDecision {
    /// Label used in logs and metrics.
    pub fn label(self) -> &'static str {
        match self {
            SecDecision::Allowed => "allowed",
            SecDecision::RateLimited => "rate_limited",
            SecDecision::Blocked => "blocked",
        }
    }
}

/// Snapshot of the gate's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecStats {
    pub allowed: u64,
    pub rate_limited: u64,
    pub blocked: u64,
}

/// Classifies edge hints and counts outcomes.
#[derive(Default)]
pub struct SecurityGate {
    ok_total: AtomicU64,
    rl_total: AtomicU64,
    waf_total: AtomicU64,
}

impl SecurityGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `edge_hints`, checked in priority order: WAF, rate-limit,
    /// allowed.
    pub fn decide(&self, edge_hints: u32) -> SecDecision {
        let decision = if edge_hints & EDGE_HINT_WAF != 0 {
            self.waf_total.fetch_add(1, Ordering::Relaxed);
            SecDecision::Blocked
        } else if edge_hints & EDGE_HINT_RATE_LIMIT != 0 {
            self.rl_total.fetch_add(1, Ordering::Relaxed);
            SecDecision::RateLimited
        } else {
            self.ok_total.fetch_add(1, Ordering::Relaxed);
            SecDecision::Allowed
        };
        metrics::record_security_decision(decision.label());
        decision
    }

    /// Read the three counters.
    pub fn stats(&self) -> SecStats {
        SecStats {
            allowed: self.ok_total.load(Ordering::Relaxed),
            rate_limited: self.rl_total.load(Ordering::Relaxed),
            blocked: self.waf_total.load(Ordering::Relaxed),
        }
    }
}
