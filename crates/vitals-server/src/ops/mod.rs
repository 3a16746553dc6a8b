//! Service HTTP endpoints.
//!
//! - `/`        : hello body
//! - `/health`  : liveness (no dependency checks)
//! - `/metrics` : Prometheus text format
//!
//! Every handler answers 200, so the status label on the request counter is
//! constant.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::app_state::AppState;

pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    state.record_request("GET", "/", "200");
    (StatusCode::OK, "Hello World!\n")
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    state.record_request("GET", "/health", "200");
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.render_metrics();

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
        .into_response()
}
