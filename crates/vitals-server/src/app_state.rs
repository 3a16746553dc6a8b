//! Shared application state for the vitals server.
//!
//! The registry is constructed here and injected into handlers through
//! axum state rather than living in a module-level singleton, so tests can
//! build isolated instances.

use std::sync::Arc;
use std::time::Instant;

use vitals_core::error::Result;
use vitals_core::metrics::{Counter, Gauge, Registry};

use crate::config::ServiceConfig;

/// Label schema for the request counter.
const REQUEST_LABELS: [&str; 3] = ["method", "endpoint", "http_status"];

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    registry: Registry,
    http_requests: Arc<Counter>,
    uptime: Arc<Gauge>,
    started: Instant,
}

impl AppState {
    /// Build application state and register all process metrics.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        let registry = Registry::new();
        let http_requests = registry.register_counter(
            "http_requests_total",
            "Total HTTP Requests",
            &REQUEST_LABELS,
        )?;
        let uptime =
            registry.register_gauge("app_uptime_seconds", "Application uptime in seconds")?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                http_requests,
                uptime,
                started: Instant::now(),
            }),
        })
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    /// Count one handled request. Arity is fixed by `REQUEST_LABELS`, so a
    /// mismatch is a programmer error; it is logged rather than propagated
    /// into the response path.
    pub fn record_request(&self, method: &str, endpoint: &str, status: &str) {
        if let Err(e) = self.inner.http_requests.inc(&[method, endpoint, status]) {
            tracing::warn!(%e, "request counter increment rejected");
        }
    }

    /// Refresh the uptime gauge and render the full exposition.
    pub fn render_metrics(&self) -> String {
        self.inner
            .uptime
            .set(self.inner.started.elapsed().as_secs_f64());
        self.inner.registry.render()
    }
}
