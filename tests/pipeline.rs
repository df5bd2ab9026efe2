//! End-to-end pipeline behavior: terminal outcomes, ordering, admin ops.

use olwsx_core::http::flags;
use olwsx_core::routing::RouteRule;
use olwsx_core::{Core, CoreConfig, CoreError, RequestView};

const HINT_RATE_LIMIT: u32 = 0b01;
const HINT_WAF: u32 = 0b10;

fn running_core() -> Core {
    let core = Core::new(CoreConfig::default());
    core.init();
    core
}

#[test]
fn test_status_route_after_init() {
    let core = running_core();
    let resp = core
        .process_request(&RequestView::new("/__status", "GET"))
        .unwrap();

    assert_eq!(resp.status, 200);
    assert_eq!(resp.body(), b"OK");
    assert_eq!(resp.headers(), b"Content-Type: text/plain\r\nCache: MISS\r\n");
    assert_eq!(
        resp.meta_flags,
        flags::COMP_NONE | flags::CACHE_MISS | flags::SEC_OK
    );
    resp.release();
}

#[test]
fn test_seeded_hello_entry_is_a_mid_tier_hit() {
    let core = running_core();
    let resp = core
        .process_request(&RequestView::new("/hello", "GET"))
        .unwrap();

    assert_eq!(resp.status, 200);
    assert_eq!(resp.body(), b"Hello from OLWSX Core (L2 cached)");
    assert_eq!(resp.headers(), b"Content-Type: text/plain\r\nCache: L2\r\n");
    assert_eq!(
        resp.meta_flags,
        flags::CACHE_L2 | flags::COMP_NONE | flags::SEC_OK
    );
    resp.release();
}

#[test]
fn test_waf_hint_blocks_regardless_of_path() {
    let core = running_core();
    for path in ["/anything", "/__status", "/hello"] {
        let req = RequestView::new(path, "POST").with_edge_hints(HINT_WAF);
        let resp = core.process_request(&req).unwrap();
        assert_eq!(resp.status, 403);
        assert_eq!(resp.body(), b"Forbidden (WAF)");
        assert_eq!(resp.headers(), b"Content-Type: text/plain\r\n");
        assert_eq!(
            resp.meta_flags,
            flags::SEC_WAF | flags::CACHE_MISS | flags::COMP_NONE
        );
        resp.release();
    }
}

#[test]
fn test_rate_limit_hint_includes_retry_header() {
    let core = running_core();
    let req = RequestView::new("/anything", "GET").with_edge_hints(HINT_RATE_LIMIT);
    let resp = core.process_request(&req).unwrap();

    assert_eq!(resp.status, 429);
    assert_eq!(resp.body(), b"Too Many Requests (Rate Limit)");
    assert_eq!(
        resp.headers(),
        b"Content-Type: text/plain\r\nRetry-After: 1\r\n"
    );
    assert_eq!(
        resp.meta_flags,
        flags::SEC_RATELIM | flags::CACHE_MISS | flags::COMP_NONE
    );
    resp.release();
}

#[test]
fn test_waf_outranks_rate_limit_hint() {
    let core = running_core();
    let req = RequestView::new("/x", "GET").with_edge_hints(HINT_WAF | HINT_RATE_LIMIT);
    let resp = core.process_request(&req).unwrap();
    assert_eq!(resp.status, 403);
    resp.release();
}

#[test]
fn test_miss_then_mid_tier_hit() {
    let core = running_core();
    let expected = b"OLWSX Core Response (MISS): path=/new method=GET";

    let first = core
        .process_request(&RequestView::new("/new", "GET"))
        .unwrap();
    assert_eq!(first.status, 200);
    assert_eq!(first.body(), expected.as_slice());
    assert_eq!(first.headers(), b"Content-Type: text/plain\r\nCache: MISS\r\n");
    assert_eq!(
        first.meta_flags,
        flags::CACHE_MISS | flags::COMP_NONE | flags::SEC_OK
    );
    first.release();

    let second = core
        .process_request(&RequestView::new("/new", "GET"))
        .unwrap();
    assert_eq!(second.body(), expected.as_slice());
    assert_eq!(
        second.meta_flags,
        flags::CACHE_L2 | flags::COMP_NONE | flags::SEC_OK
    );
    second.release();
}

#[test]
fn test_non_get_never_touches_the_cache() {
    let core = running_core();

    let first = core
        .process_request(&RequestView::new("/post-path", "POST"))
        .unwrap();
    assert_eq!(first.meta_flags & flags::CACHE_MISS, flags::CACHE_MISS);
    first.release();

    // The POST miss must not have populated the mid tier.
    let second = core
        .process_request(&RequestView::new("/post-path", "POST"))
        .unwrap();
    assert_eq!(second.meta_flags & flags::CACHE_MISS, flags::CACHE_MISS);
    second.release();

    let get = core
        .process_request(&RequestView::new("/post-path", "GET"))
        .unwrap();
    assert_eq!(get.meta_flags & flags::CACHE_MISS, flags::CACHE_MISS);
    get.release();
}

#[test]
fn test_route_first_match_wins_over_specificity() {
    let core = running_core();
    core.set_rules(vec![
        RouteRule {
            match_prefix: "/a".to_string(),
            static_body: Some("first".to_string()),
            ..Default::default()
        },
        RouteRule {
            match_prefix: "/ab".to_string(),
            static_body: Some("second".to_string()),
            ..Default::default()
        },
    ]);

    let resp = core
        .process_request(&RequestView::new("/abc", "GET"))
        .unwrap();
    assert_eq!(resp.body(), b"first");
    resp.release();
}

#[test]
fn test_rule_without_extra_headers_or_body() {
    let core = running_core();
    core.set_rules(vec![RouteRule {
        match_prefix: "/bare".to_string(),
        status_override: Some(204),
        meta_flags: flags::COMP_NONE | flags::CACHE_MISS | flags::SEC_OK,
        ..Default::default()
    }]);

    let resp = core
        .process_request(&RequestView::new("/bare", "GET"))
        .unwrap();
    assert_eq!(resp.status, 204);
    assert_eq!(resp.headers(), b"Cache: MISS\r\n");
    assert!(resp.body_is_absent());
    resp.release();
}

#[test]
fn test_gzip_flagged_rule_gets_marker_header() {
    let core = running_core();
    core.set_rules(vec![RouteRule {
        match_prefix: "/gz".to_string(),
        static_body: Some("payload".to_string()),
        extra_headers: Some("Content-Type: text/plain\r\n".to_string()),
        meta_flags: flags::COMP_GZIP | flags::CACHE_MISS | flags::SEC_OK,
        ..Default::default()
    }]);

    let resp = core.process_request(&RequestView::new("/gz", "GET")).unwrap();
    assert_eq!(
        resp.headers(),
        b"Content-Type: text/plain\r\nCache: MISS\r\nContent-Encoding: gzip\r\n"
    );
    // Body bytes are never transformed; only intent is marked.
    assert_eq!(resp.body(), b"payload");
    assert_eq!(resp.meta_flags & flags::COMP_GZIP, flags::COMP_GZIP);
    resp.release();
}

#[test]
fn test_invalidate_then_insert_is_idempotent() {
    let core = running_core();

    for _ in 0..2 {
        core.cache_invalidate("/admin-key").unwrap();
        core.cache_insert("/admin-key", b"fresh", flags::COMP_NONE).unwrap();

        let resp = core
            .process_request(&RequestView::new("/admin-key", "GET"))
            .unwrap();
        assert_eq!(resp.body(), b"fresh");
        assert_eq!(resp.meta_flags & flags::CACHE_L2, flags::CACHE_L2);
        resp.release();
    }
}

#[test]
fn test_stage_and_apply_generations() {
    let core = running_core();
    core.stage_config(b"blob-v5", 5).unwrap();
    assert!(core.apply_config(5).is_ok());
    assert_eq!(core.apply_config(6), Err(CoreError::NotFound));

    assert_eq!(
        core.stage_config(b"", 7),
        Err(CoreError::InvalidArgument("config blob"))
    );
    // The failed stage left generation 5 in place.
    assert!(core.apply_config(5).is_ok());
}

#[test]
fn test_not_initialized_and_shutdown() {
    let core = Core::new(CoreConfig::default());
    assert_eq!(
        core.process_request(&RequestView::new("/x", "GET")).unwrap_err(),
        CoreError::NotInitialized
    );

    core.init();
    let resp = core.process_request(&RequestView::new("/x", "GET")).unwrap();
    resp.release();

    core.shutdown();
    assert_eq!(
        core.process_request(&RequestView::new("/x", "GET")).unwrap_err(),
        CoreError::NotInitialized
    );
}

#[test]
fn test_oversize_input_rejected_before_processing() {
    let core = running_core();

    let long_path = format!("/{}", "p".repeat(64 * 1024));
    assert_eq!(
        core.process_request(&RequestView::new(&long_path, "GET")).unwrap_err(),
        CoreError::TooLarge("path")
    );

    let big_headers = vec![b'h'; 2 * 1024 * 1024 + 1];
    let req = RequestView::new("/x", "GET").with_payload(&big_headers, b"");
    assert_eq!(
        core.process_request(&req).unwrap_err(),
        CoreError::TooLarge("headers")
    );

    // Oversize requests must not reach the security gate counters.
    assert_eq!(core.security_stats().allowed, 0);
}

#[test]
fn test_security_stats_accumulate() {
    let core = running_core();
    for _ in 0..3 {
        core.process_request(&RequestView::new("/a", "GET"))
            .unwrap()
            .release();
    }
    core.process_request(&RequestView::new("/a", "GET").with_edge_hints(HINT_WAF))
        .unwrap()
        .release();

    let stats = core.security_stats();
    assert_eq!(stats.allowed, 3);
    assert_eq!(stats.blocked, 1);
    assert_eq!(stats.rate_limited, 0);
}
