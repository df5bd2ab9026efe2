//! Multi-threaded behavior: table swaps under load, concurrent cache writes,
//! counter accounting.

use std::sync::Arc;
use std::thread;

use olwsx_core::http::flags;
use olwsx_core::routing::RouteRule;
use olwsx_core::{Core, CoreConfig, RequestView};

fn rule(prefix: &str, body: &str) -> RouteRule {
    RouteRule {
        match_prefix: prefix.to_string(),
        static_body: Some(body.to_string()),
        meta_flags: flags::COMP_NONE | flags::CACHE_MISS | flags::SEC_OK,
        ..Default::default()
    }
}

#[test]
fn test_rule_swaps_are_atomic_under_load() {
    let core = Arc::new(Core::new(CoreConfig::default()));
    core.init();
    core.set_rules(vec![rule("/swap", "table-a")]);

    let mut handles = Vec::new();

    for _ in 0..4 {
        let core = core.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..500 {
                let resp = core
                    .process_request(&RequestView::new("/swap", "GET"))
                    .unwrap();
                // Readers must observe one table or the other, never a mix.
                assert!(resp.body() == b"table-a" || resp.body() == b"table-b");
                resp.release();
            }
        }));
    }

    {
        let core = core.clone();
        handles.push(thread::spawn(move || {
            for i in 0..200 {
                let body = if i % 2 == 0 { "table-b" } else { "table-a" };
                core.set_rules(vec![rule("/swap", body)]);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_mid_tier_writes_and_reads() {
    let core = Arc::new(Core::new(CoreConfig::default()));
    core.init();

    let mut handles = Vec::new();
    for t in 0..4 {
        let core = core.clone();
        handles.push(thread::spawn(move || {
            let key = format!("/worker-{t}");
            for i in 0..200 {
                let value = format!("value-{i}");
                core.cache_insert(&key, value.as_bytes(), 0).unwrap();
                let resp = core.process_request(&RequestView::new(&key, "GET")).unwrap();
                // Last-write-wins per key; this thread is the only writer.
                assert_eq!(resp.body(), value.as_bytes());
                assert_eq!(resp.meta_flags & flags::CACHE_L2, flags::CACHE_L2);
                resp.release();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_security_counters_account_for_every_call() {
    let core = Arc::new(Core::new(CoreConfig::default()));
    core.init();

    let mut handles = Vec::new();
    for _ in 0..4 {
        let core = core.clone();
        handles.push(thread::spawn(move || {
            for i in 0..300u32 {
                let hints = match i % 3 {
                    0 => 0,
                    1 => 0b01,
                    _ => 0b10,
                };
                let resp = core
                    .process_request(&RequestView::new("/c", "GET").with_edge_hints(hints))
                    .unwrap();
                resp.release();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let stats = core.security_stats();
    assert_eq!(stats.allowed, 400);
    assert_eq!(stats.rate_limited, 400);
    assert_eq!(stats.blocked, 400);
}
