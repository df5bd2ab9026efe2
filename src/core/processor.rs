//! The request-processing pipeline.
//!
//! # Pipeline
//! ```text
//! process_request
//!     → size ceilings (reject oversize before any work)
//!     → security gate ── Blocked / RateLimited → terminal response
//!     → route match ──── Matched → filters → response
//!     → cache chain ──── Hit → tier-tagged response        (GET only)
//!     → compute fallback → insert into L2 (GET) → response
//! ```
//!
//! Exactly one terminal outcome applies per valid request; the first
//! applicable branch wins and short-circuits the rest.
//!
//! # Design Decisions
//! - Responses are assembled as plain strings/bytes and exported once at the
//!   end of each branch; header export precedes body export, and a body
//!   allocation failure rolls the header buffer back before the error returns
//! - The filter pipeline runs on route-matched responses whose rule requests
//!   a compression kind; seeded rules request none, so their bytes are stable

use crate::cache::CacheTier;
use crate::core::Core;
use crate::error::CoreError;
use crate::filters::FilterContext;
use crate::http::flags;
use crate::http::request::RequestView;
use crate::http::response::Response;
use crate::memory::export::ExportPool;
use crate::observability::metrics;
use crate::security::gate::SecDecision;

const HDR_PLAIN: &str = "Content-Type: text/plain\r\n";
const HDR_RATE_LIMITED: &str = "Content-Type: text/plain\r\nRetry-After: 1\r\n";
const HDR_CACHE_MISS: &str = "Cache: MISS\r\n";

const BODY_BLOCKED: &str = "Forbidden (WAF)";
const BODY_RATE_LIMITED: &str = "Too Many Requests (Rate Limit)";

impl Core {
    /// Run one request through the full pipeline.
    ///
    /// On success the caller owns the response buffers and must release them
    /// via [`Response::release`]. On error the caller holds nothing.
    pub fn process_request(&self, req: &RequestView<'_>) -> Result<Response, CoreError> {
        if !self.is_running() {
            return Err(CoreError::NotInitialized);
        }
        self.limits.validate_request(req)?;

        tracing::debug!(
            trace_id = req.trace_id,
            span_id = req.span_id,
            method = req.method,
            path = req.path,
            "Processing request"
        );

        // Security classification (edge-informed).
        match self.gate.decide(req.edge_hints) {
            SecDecision::Blocked => {
                tracing::warn!(trace_id = req.trace_id, path = req.path, "Request blocked (WAF hint)");
                metrics::record_request("blocked");
                return export_response(
                    403,
                    HDR_PLAIN.to_string(),
                    Some(BODY_BLOCKED.as_bytes()),
                    flags::SEC_WAF | flags::CACHE_MISS | flags::COMP_NONE,
                );
            }
            SecDecision::RateLimited => {
                tracing::warn!(trace_id = req.trace_id, path = req.path, "Request rate-limited (edge hint)");
                metrics::record_request("rate_limited");
                return export_response(
                    429,
                    HDR_RATE_LIMITED.to_string(),
                    Some(BODY_RATE_LIMITED.as_bytes()),
                    flags::SEC_RATELIM | flags::CACHE_MISS | flags::COMP_NONE,
                );
            }
            SecDecision::Allowed => {}
        }

        // Deterministic rule table, first match wins.
        if let Some(rule) = self.router.matched(req.path) {
            tracing::debug!(trace_id = req.trace_id, prefix = %rule.match_prefix, "Route matched");
            metrics::record_request("route_match");

            let status = rule.status_override.unwrap_or(200);
            let mut headers = match &rule.extra_headers {
                Some(extra) => format!("{extra}{HDR_CACHE_MISS}"),
                None => HDR_CACHE_MISS.to_string(),
            };
            let mut body: Vec<u8> = rule
                .static_body
                .as_ref()
                .map(|b| b.as_bytes().to_vec())
                .unwrap_or_default();
            let mut meta_flags = rule.meta_flags;

            // Post-processing only when the rule asks for a compression kind.
            if rule.meta_flags & flags::COMP_GZIP != 0 {
                let ctx = FilterContext {
                    trace_id: req.trace_id,
                    span_id: req.span_id,
                };
                // A failing filter leaves partial mutations in place; the
                // response is emitted regardless (documented behavior).
                let _ = self
                    .filters
                    .apply(&ctx, &mut headers, &mut body, &mut meta_flags);
            }

            let body = (!body.is_empty()).then_some(body);
            return export_response(status, headers, body.as_deref(), meta_flags);
        }

        // Cache chain, strictly top-down, GET only.
        if req.is_get() {
            if let Some((tier, entry)) = self.cache.lookup(req.path) {
                tracing::debug!(trace_id = req.trace_id, tier = tier.label(), "Cache hit");
                metrics::record_request("cache_hit");
                let headers = format!("{}Cache: {}\r\n", HDR_PLAIN, tier.label());
                return export_response(
                    200,
                    headers,
                    Some(&entry.value),
                    tier.meta_flag() | flags::COMP_NONE | flags::SEC_OK,
                );
            }
        }

        // Full miss: deterministic computed fallback.
        let body = format!(
            "OLWSX Core Response (MISS): path={} method={}",
            req.path, req.method
        );
        if req.is_get() && !req.path.is_empty() {
            self.cache
                .l2()
                .insert(req.path, body.as_bytes(), flags::COMP_NONE);
        }
        tracing::debug!(trace_id = req.trace_id, path = req.path, "Computed miss response");
        metrics::record_request("computed_miss");

        export_response(
            200,
            format!("{HDR_PLAIN}{HDR_CACHE_MISS}"),
            Some(body.as_bytes()),
            flags::CACHE_MISS | flags::COMP_NONE | flags::SEC_OK,
        )
    }
}

/// Export headers then body, rolling the header buffer back if the body
/// allocation fails. An empty or absent body exports no buffer.
fn export_response(
    status: u16,
    headers: String,
    body: Option<&[u8]>,
    meta_flags: u32,
) -> Result<Response, CoreError> {
    let hdr_buf = ExportPool::copy_from(headers.as_bytes()).ok_or_else(|| {
        tracing::error!("Header buffer allocation failed");
        CoreError::AllocFailed
    })?;

    let body_buf = match body {
        Some(bytes) if !bytes.is_empty() => match ExportPool::copy_from(bytes) {
            Some(buf) => Some(buf),
            None => {
                tracing::error!("Body buffer allocation failed; rolling back headers");
                ExportPool::release(hdr_buf);
                return Err(CoreError::AllocFailed);
            }
        },
        _ => None,
    };

    Ok(Response::new(status, Some(hdr_buf), body_buf, meta_flags))
}
