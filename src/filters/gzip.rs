//! Gzip marker filter.
//!
//! Does not perform actual compression: it records compression intent with a
//! deterministic header and meta bit, leaving the body untouched so core
//! behavior stays byte-stable. Outer layers that see the marker may compress.

use crate::filters::{FilterContext, ResponseFilter};
use crate::http::flags;

const GZIP_HEADER: &str = "Content-Encoding: gzip\r\n";
const GZIP_MARKER: &str = "Content-Encoding: gzip";

/// Appends the gzip marker header and ORs the gzip meta bit.
pub struct GzipMarkerFilter;

impl ResponseFilter for GzipMarkerFilter {
    fn name(&self) -> &'static str {
        "gzip_marker"
    }

    fn apply(
        &self,
        _ctx: &FilterContext,
        headers_flat: &mut String,
        _body: &mut Vec<u8>,
        meta_flags: &mut u32,
    ) -> bool {
        // Idempotent append: never duplicate the marker.
        if !headers_flat.contains(GZIP_MARKER) {
            headers_flat.push_str(GZIP_HEADER);
        }
        *meta_flags |= flags::COMP_GZIP;
        true
    }
}
