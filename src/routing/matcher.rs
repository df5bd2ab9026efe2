//! Route rules and the deterministic prefix matcher.
//!
//! # Design Decisions
//! - Rules are scanned in table order; the first prefix hit wins
//! - Path matching is case-sensitive
//! - An empty prefix is treated as non-matching rather than universal

/// One routing rule in the ordered table.
#[derive(Debug, Clone, Default)]
pub struct RouteRule {
    /// Literal path prefix; empty prefixes never match.
    pub match_prefix: String,

    /// Optional fixed status; `None` means 200.
    pub status_override: Option<u16>,

    /// Optional static body served verbatim.
    pub static_body: Option<String>,

    /// Optional "Key: Value\r\n…" fragment prepended before core headers.
    pub extra_headers: Option<String>,

    /// Meta flags stamped on responses produced from this rule.
    pub meta_flags: u32,
}

/// Scan `rules` in order and return the first whose prefix matches `path`.
pub fn first_match<'a>(path: &str, rules: &'a [RouteRule]) -> Option<&'a RouteRule> {
    rules
        .iter()
        .find(|r| !r.match_prefix.is_empty() && path.starts_with(&r.match_prefix))
}
