//! vitals server
//!
//! Minimal liveness + metrics HTTP service:
//! - `GET /`        -> "Hello World!\n"
//! - `GET /health`  -> {"status":"healthy"}
//! - `GET /metrics` -> Prometheus text exposition

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use vitals_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_or_default("vitals.yaml").expect("config load failed");
    let state = app_state::AppState::new(cfg).expect("metric registration failed");
    let listen: SocketAddr = state
        .cfg()
        .server
        .listen_addr()
        .expect("server.listen must be a valid SocketAddr");

    let app = router::build_router(state);

    tracing::info!(%listen, "vitals-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
