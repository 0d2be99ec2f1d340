use crate::{AppState, api, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the admin router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/metrics", get(api::restart::get_metrics))
        // Restart API
        .route("/api/v1/status", get(api::restart::get_status))
        .route("/api/v1/history", get(api::restart::get_history))
        .route("/api/v1/health-sample", get(api::restart::get_health_sample))
        .route("/api/v1/restart", post(api::restart::request_restart))
        .route("/api/v1/cancel", post(api::restart::cancel_restart))
        .route("/api/v1/reload", post(api::restart::reload_config))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
