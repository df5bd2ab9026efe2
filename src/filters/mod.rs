//! Response post-processing pipeline.
//!
//! # Data Flow
//! ```text
//! Synthesized response (headers, body, meta flags)
//!     → FilterPipeline::apply
//!     → each ResponseFilter in configured order, mutating in place
//!     → a failing filter aborts the remainder; prior mutations stand
//! ```
//!
//! # Design Decisions
//! - Filters must be deterministic and must not block
//! - Trait objects in a fixed list, like the routing matchers: the filter set
//!   is small and configured once
//! - On filter failure the pipeline's caller proceeds with whatever mutations
//!   succeeded; that partial state is the documented behavior

pub mod gzip;

pub use gzip::GzipMarkerFilter;

/// Immutable per-call context handed to every filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterContext {
    /// Trace identifier of the request being answered.
    pub trace_id: u64,
    /// Span identifier of the request being answered.
    pub span_id: u64,
}

/// A deterministic, non-blocking response post-processor.
pub trait ResponseFilter: Send + Sync {
    /// Filter name for logs.
    fn name(&self) -> &'static str;

    /// Mutate headers/body/flags in place; `false` reports failure.
    fn apply(
        &self,
        ctx: &FilterContext,
        headers_flat: &mut String,
        body: &mut Vec<u8>,
        meta_flags: &mut u32,
    ) -> bool;
}

/// Ordered list of response filters.
pub struct FilterPipeline {
    filters: Vec<Box<dyn ResponseFilter>>,
}

impl FilterPipeline {
    /// Empty pipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The shipped default: the gzip marker filter only.
    pub fn default_chain() -> Self {
        Self::new().with_filter(Box::new(GzipMarkerFilter))
    }

    /// Append a filter to the end of the chain.
    pub fn with_filter(mut self, filter: Box<dyn ResponseFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Run every filter in order.
    ///
    /// Returns `false` as soon as one filter fails; mutations applied up to
    /// that point are kept.
    pub fn apply(
        &self,
        ctx: &FilterContext,
        headers_flat: &mut String,
        body: &mut Vec<u8>,
        meta_flags: &mut u32,
    ) -> bool {
        for filter in &self.filters {
            if !filter.apply(ctx, headers_flat, body, meta_flags) {
                tracing::warn!(
                    filter = filter.name(),
                    trace_id = ctx.trace_id,
                    "Response filter failed; remainder of pipeline skipped"
                );
                return false;
            }
        }
        true
    }

    /// Number of configured filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True when no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::default_chain()
    }
}
