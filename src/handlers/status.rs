//! Status endpoints: service identity and liveness.
//!
//! Both return static bodies with no external calls.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Service identity
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service identity")
    ),
    tag = "Status"
)]
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "name": "translate api",
            "status": "active",
            "service": "translation"
        })),
    )
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy")
    ),
    tag = "Status"
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
