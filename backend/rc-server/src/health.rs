use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let phase = state.scheduler.phase().await;
    let healthy = state.monitor.is_healthy().await;
    let monitoring = state.monitor.is_monitoring().await;

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "scheduler": phase.as_str(),
            "monitor": if monitoring { "operational" } else { "stopped" },
            "server": if healthy { "healthy" } else { "degraded" },
        },
        "shutting_down": state.shutdown.is_shutdown(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}
