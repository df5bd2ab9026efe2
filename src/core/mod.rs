//! Core context: lifecycle, administrative and configuration operations.
//!
//! # Responsibilities
//! - Own the router table, cache tiers, arena, security counters and staging
//!   state for the process lifetime
//! - Expose init / shutdown / status lifecycle operations
//! - Expose cache, arena and configuration administration
//!
//! # Design Decisions
//! - Explicit context object instead of a process-wide singleton: the host
//!   constructs one `Core` and passes it by reference to every operation
//! - `init`/`shutdown` are idempotent flag flips but are not reentrant-safe
//!   without external serialization by the caller
//! - `shutdown` purges nothing; a later `init` resumes over existing state

pub mod processor;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::cache::{CacheTier, TierChain};
use crate::config::schema::CoreConfig;
use crate::config::staging::ConfigStaging;
use crate::error::CoreError;
use crate::filters::FilterPipeline;
use crate::http::flags;
use crate::memory::arena::TransientArena;
use crate::routing::matcher::RouteRule;
use crate::routing::router::Router;
use crate::security::gate::{SecStats, SecurityGate};
use crate::security::limits::Limits;

/// Core state flag: the core accepted init and is serving.
pub const STATE_RUNNING: u32 = 0x0000_0001;
/// Core state flag: configuration staging is available.
pub const STATE_HOT_RELOAD_READY: u32 = 0x0000_0002;

/// Semantic version of the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Version query; never fails.
pub fn version() -> CoreVersion {
    CoreVersion {
        major: 1,
        minor: 0,
        patch: 0,
    }
}

/// Snapshot handed back by [`Core::init`].
#[derive(Debug, Clone, Copy)]
pub struct CoreState {
    /// Wall-clock nanoseconds at init.
    pub epoch_ns: u64,
    /// State flag bits.
    pub flags: u32,
    /// Core version.
    pub version: CoreVersion,
}

/// Snapshot handed back by [`Core::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreStatus {
    /// State flag bits.
    pub flags: u32,
    /// Currently staged configuration generation.
    pub config_generation: u32,
}

/// The request-processing core. One instance per embedding host.
pub struct Core {
    running: AtomicBool,
    pub(crate) arena: TransientArena,
    pub(crate) cache: TierChain,
    pub(crate) router: Router,
    pub(crate) gate: SecurityGate,
    pub(crate) filters: FilterPipeline,
    pub(crate) limits: Limits,
    staging: ConfigStaging,
}

impl Core {
    /// Build a core from configuration. The core starts not-running; call
    /// [`init`](Self::init) before processing requests.
    pub fn new(config: CoreConfig) -> Self {
        Self {
            running: AtomicBool::new(false),
            arena: TransientArena::new(config.arena.capacity_bytes),
            cache: TierChain::new(),
            router: Router::new(),
            gate: SecurityGate::new(),
            filters: FilterPipeline::default_chain(),
            limits: Limits::from_config(&config.limits),
            staging: ConfigStaging::new(),
        }
    }

    /// Mark the core running and seed the example cache entry and routes.
    ///
    /// Idempotent by design: a second init re-seeds the same deterministic
    /// state and leaves everything else untouched.
    pub fn init(&self) -> CoreState {
        self.running.store(true, Ordering::Release);

        // Warm-up: one known mid-tier entry.
        self.cache.l2().insert(
            "/hello",
            b"Hello from OLWSX Core (L2 cached)",
            flags::COMP_NONE,
        );

        // Default deterministic routes.
        self.router.set_rules(vec![
            RouteRule {
                match_prefix: "/__status".to_string(),
                status_override: Some(200),
                static_body: Some("OK".to_string()),
                extra_headers: Some("Content-Type: text/plain\r\n".to_string()),
                meta_flags: flags::COMP_NONE | flags::CACHE_MISS | flags::SEC_OK,
            },
            RouteRule {
                match_prefix: "/__hello".to_string(),
                status_override: Some(200),
                static_body: Some("Hello, OLWSX!".to_string()),
                extra_headers: Some("Content-Type: text/plain\r\n".to_string()),
                meta_flags: flags::COMP_NONE | flags::CACHE_MISS | flags::SEC_OK,
            },
        ]);

        let v = version();
        tracing::info!(
            major = v.major,
            minor = v.minor,
            patch = v.patch,
            "OLWSX core initialized"
        );

        CoreState {
            epoch_ns: wall_epoch_ns(),
            flags: STATE_RUNNING | STATE_HOT_RELOAD_READY,
            version: v,
        }
    }

    /// Mark the core not-running. No data is purged.
    pub fn shutdown(&self) {
        self.running.store(false, Ordering::Release);
        tracing::info!("OLWSX core shut down");
    }

    /// Report state flags and the staged configuration generation.
    pub fn status(&self) -> Result<CoreStatus, CoreError> {
        if !self.is_running() {
            return Err(CoreError::NotInitialized);
        }
        Ok(CoreStatus {
            flags: STATE_RUNNING | STATE_HOT_RELOAD_READY,
            config_generation: self.staging.staged_generation(),
        })
    }

    /// Write one mid-tier entry with explicit flags.
    pub fn cache_insert(&self, key: &str, value: &[u8], entry_flags: u32) -> Result<(), CoreError> {
        self.limits.validate_key(key)?;
        self.cache.l2().insert(key, value, entry_flags);
        Ok(())
    }

    /// Remove one mid-tier entry.
    pub fn cache_invalidate(&self, key: &str) -> Result<(), CoreError> {
        self.limits.validate_key(key)?;
        self.cache.l2().erase(key);
        Ok(())
    }

    /// Replace the active routing table wholesale.
    ///
    /// Concurrent `process_request` calls observe either the old table or the
    /// new one, never a mix.
    pub fn set_rules(&self, rules: Vec<RouteRule>) {
        self.router.set_rules(rules);
    }

    /// Stage an opaque configuration blob under a caller-assigned generation.
    pub fn stage_config(&self, blob: &[u8], generation: u32) -> Result<(), CoreError> {
        self.staging.stage(blob, generation)
    }

    /// Accept a previously staged generation; `NotFound` on mismatch.
    pub fn apply_config(&self, generation: u32) -> Result<(), CoreError> {
        self.staging.apply(generation)
    }

    /// Reset the transient arena (batch boundary operation).
    pub fn arena_reset(&self) {
        self.arena.reset();
    }

    /// The transient arena, for host-side scratch allocation and telemetry.
    pub fn arena(&self) -> &TransientArena {
        &self.arena
    }

    /// Read the security gate counters.
    pub fn security_stats(&self) -> SecStats {
        self.gate.stats()
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

fn wall_epoch_ns() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
