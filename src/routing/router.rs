//! Route lookup against an atomically replaceable table.
//!
//! # Responsibilities
//! - Hold the active ordered rule table
//! - Replace the table wholesale under concurrent readers
//! - Answer first-match-wins prefix queries
//!
//! # Design Decisions
//! - `ArcSwap` gives readers a consistent snapshot: a concurrent
//!   `set_rules` is observed as fully-old or fully-new, never interleaved
//! - The matched rule is cloned out so no table reference outlives the call

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::routing::matcher::{first_match, RouteRule};

/// Router over an ordered, wholesale-replaced rule table.
pub struct Router {
    table: ArcSwap<Vec<RouteRule>>,
}

impl Router {
    /// Create a router with an empty table.
    pub fn new() -> Self {
        Self {
            table: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Replace the active table with `rules`, preserving their order.
    pub fn set_rules(&self, rules: Vec<RouteRule>) {
        tracing::debug!(rule_count = rules.len(), "Routing table replaced");
        self.table.store(Arc::new(rules));
    }

    /// Return the first rule matching `path`, if any.
    pub fn matched(&self, path: &str) -> Option<RouteRule> {
        let table = self.table.load();
        first_match(path, &table).cloned()
    }

    /// Number of rules in the active table.
    pub fn rule_count(&self) -> usize {
        self.table.load().len()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
