#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use vitals_core::metrics::Registry;
use vitals_core::VitalsError;

#[test]
fn counter_counts_match_increments() {
    let registry = Registry::new();
    let requests = registry
        .register_counter("requests_total", "Total requests", &["method"])
        .expect("register");

    for _ in 0..5 {
        requests.inc(&["GET"]).expect("inc");
    }

    assert_eq!(requests.get(&["GET"]), 5);
    assert!(registry
        .render()
        .contains("requests_total{method=\"GET\"} 5"));
}

#[test]
fn distinct_tuples_are_independent() {
    let registry = Registry::new();
    let requests = registry
        .register_counter("requests_total", "Total requests", &["method", "path"])
        .expect("register");

    requests.inc(&["GET", "/"]).expect("inc");
    requests.inc(&["GET", "/"]).expect("inc");
    requests.inc(&["GET", "/health"]).expect("inc");

    assert_eq!(requests.get(&["GET", "/"]), 2);
    assert_eq!(requests.get(&["GET", "/health"]), 1);
    assert_eq!(requests.get(&["POST", "/"]), 0);
}

#[test]
fn gauge_reflects_last_set() {
    let registry = Registry::new();
    let uptime = registry
        .register_gauge("uptime_seconds", "Uptime in seconds")
        .expect("register");

    uptime.set(2.5);
    assert!(registry.render().contains("uptime_seconds 2.5\n"));

    uptime.set(7.25);
    assert_eq!(uptime.get(), 7.25);
    assert!(registry.render().contains("uptime_seconds 7.25\n"));
}

#[test]
fn render_is_idempotent() {
    let registry = Registry::new();
    let requests = registry
        .register_counter("requests_total", "Total requests", &["method"])
        .expect("register");
    let uptime = registry
        .register_gauge("uptime_seconds", "Uptime in seconds")
        .expect("register");

    requests.inc(&["GET"]).expect("inc");
    requests.inc(&["PUT"]).expect("inc");
    uptime.set(1.5);

    assert_eq!(registry.render(), registry.render());
}

#[test]
fn concurrent_increments_are_not_lost() {
    let registry = Registry::new();
    let requests = registry
        .register_counter("requests_total", "Total requests", &["method"])
        .expect("register");

    let workers: u64 = 16;
    let handles: Vec<_> = (0..workers)
        .map(|_| {
            let requests = Arc::clone(&requests);
            thread::spawn(move || requests.inc(&["GET"]).expect("inc"))
        })
        .collect();
    for h in handles {
        h.join().expect("join");
    }

    assert_eq!(requests.get(&["GET"]), workers);
    assert!(registry
        .render()
        .contains(&format!("requests_total{{method=\"GET\"}} {workers}")));
}

#[test]
fn duplicate_name_is_rejected() {
    let registry = Registry::new();
    registry
        .register_counter("requests_total", "Total requests", &["method"])
        .expect("first registration");

    let err = registry
        .register_gauge("requests_total", "Shadowing gauge")
        .expect_err("must fail");
    assert!(matches!(err, VitalsError::DuplicateMetric(name) if name == "requests_total"));
}

#[test]
fn wrong_arity_is_rejected() {
    let registry = Registry::new();
    let requests = registry
        .register_counter("requests_total", "Total requests", &["method", "path"])
        .expect("register");

    let err = requests.inc(&["GET"]).expect_err("must fail");
    assert!(matches!(
        err,
        VitalsError::LabelArity {
            expected: 2,
            got: 1,
            ..
        }
    ));
    // Nothing observed on the failed path.
    assert_eq!(requests.get(&["GET", "/"]), 0);
}

#[test]
fn exposition_shape_and_order() {
    let registry = Registry::new();
    let requests = registry
        .register_counter(
            "http_requests_total",
            "Total HTTP Requests",
            &["method", "endpoint", "http_status"],
        )
        .expect("register");
    let uptime = registry
        .register_gauge("app_uptime_seconds", "Application uptime in seconds")
        .expect("register");

    requests.inc(&["GET", "/", "200"]).expect("inc");
    uptime.set(3.0);

    let out = registry.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "# HELP http_requests_total Total HTTP Requests",
            "# TYPE http_requests_total counter",
            "http_requests_total{method=\"GET\",endpoint=\"/\",http_status=\"200\"} 1",
            "# HELP app_uptime_seconds Application uptime in seconds",
            "# TYPE app_uptime_seconds gauge",
            "app_uptime_seconds 3",
        ]
    );
}

#[test]
fn counter_series_render_sorted() {
    let registry = Registry::new();
    let requests = registry
        .register_counter("requests_total", "Total requests", &["path"])
        .expect("register");

    requests.inc(&["/z"]).expect("inc");
    requests.inc(&["/a"]).expect("inc");
    requests.inc(&["/m"]).expect("inc");

    let out = registry.render();
    let a = out.find("path=\"/a\"").expect("a rendered");
    let m = out.find("path=\"/m\"").expect("m rendered");
    let z = out.find("path=\"/z\"").expect("z rendered");
    assert!(a < m && m < z);
}

#[test]
fn label_values_are_escaped() {
    let registry = Registry::new();
    let lookups = registry
        .register_counter("lookups_total", "Total lookups", &["key"])
        .expect("register");

    lookups.inc(&["a\"b\\c\nd"]).expect("inc");

    assert!(registry
        .render()
        .contains("lookups_total{key=\"a\\\"b\\\\c\\nd\"} 1"));
}
