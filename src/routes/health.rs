use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::db;
use crate::AppState;

/// Root endpoint - basic status
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "Medialib Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

/// Health check response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    uptime: u64,
    database: bool,
}

/// GET /health - Database status and uptime
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let database_ok = db::health_check(&state.pool).await;

    let (code, status) = if database_ok {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    let health = HealthResponse {
        status: status.to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        database: database_ok,
    };

    (code, Json(health))
}

/// Liveness check
pub async fn live() -> impl IntoResponse {
    (StatusCode::OK, "alive")
}
