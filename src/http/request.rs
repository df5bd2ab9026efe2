//! Borrowed request descriptor.
//!
//! # Responsibilities
//! - Carry the canonical request fields across the boundary
//! - Borrow every buffer for exactly one call; the core retains nothing
//!
//! # Design Decisions
//! - Headers stay a flat "Key: Value\r\n…" byte block; the core never parses
//!   them
//! - Edge hints are upstream classifications, not core decisions
//! - Trace/span identifiers flow through for log correlation only

/// Canonical request descriptor; all buffers are borrowed for call duration.
#[derive(Debug, Clone, Copy)]
pub struct RequestView<'a> {
    /// Request path, also the cache key for GET requests.
    pub path: &'a str,

    /// HTTP method token ("GET", "POST", …).
    pub method: &'a str,

    /// Flat "Key: Value\r\n…" header block.
    pub headers_flat: &'a [u8],

    /// Raw request body.
    pub body: &'a [u8],

    /// Trace identifier supplied by the edge layer.
    pub trace_id: u64,

    /// Span identifier supplied by the edge layer.
    pub span_id: u64,

    /// Edge hint bits: bit 0 = rate-limit hint, bit 1 = WAF hint.
    pub edge_hints: u32,
}

impl<'a> RequestView<'a> {
    /// Create a request with empty headers/body and no edge hints.
    pub fn new(path: &'a str, method: &'a str) -> Self {
        Self {
            path,
            method,
            headers_flat: &[],
            body: &[],
            trace_id: 0,
            span_id: 0,
            edge_hints: 0,
        }
    }

    /// Attach edge hint bits.
    pub fn with_edge_hints(mut self, hints: u32) -> Self {
        self.edge_hints = hints;
        self
    }

    /// Attach trace/span identifiers.
    pub fn with_trace(mut self, trace_id: u64, span_id: u64) -> Self {
        self.trace_id = trace_id;
        self.span_id = span_id;
        self
    }

    /// Attach a header block and body.
    pub fn with_payload(mut self, headers_flat: &'a [u8], body: &'a [u8]) -> Self {
        self.headers_flat = headers_flat;
        self.body = body;
        self
    }

    /// True when the method is GET (the only cacheable method).
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }
}
