use crate::AppState;
use crate::api::cancel_response::CancelResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::history_response::HistoryResponse;
use crate::api::monitor_status::MonitorStatus;
use crate::api::reload_response::ReloadResponse;
use crate::api::restart_request_body::RestartRequestBody;
use crate::api::status_response::StatusResponse;
use crate::reload::reload_from_disk;

use rc_scheduler::RestartTicket;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use log::info;
use tracing::instrument;

/// GET /api/v1/status
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        scheduler: state.scheduler.status().await,
        monitor: MonitorStatus::collect(&state.monitor).await,
        started_at: state.started_at,
    })
}

/// GET /api/v1/history
pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        entries: state.scheduler.history().await,
        total_restarts_managed: state.scheduler.total_restarts_managed().await,
    })
}

/// GET /api/v1/health-sample
pub async fn get_health_sample(State(state): State<AppState>) -> Json<MonitorStatus> {
    Json(MonitorStatus::collect(&state.monitor).await)
}

/// POST /api/v1/restart
#[instrument(skip(state))]
pub async fn request_restart(
    State(state): State<AppState>,
    Json(body): Json<RestartRequestBody>,
) -> ApiResult<(StatusCode, Json<RestartTicket>)> {
    let request = body.into_request()?;
    info!(
        "Admin API restart request: {} in {}s from {}",
        request.reason,
        request.delay_secs(),
        request.initiator
    );

    let ticket = state.scheduler.request_restart(request).await?;
    Ok((StatusCode::ACCEPTED, Json(ticket)))
}

/// POST /api/v1/cancel
#[instrument(skip(state))]
pub async fn cancel_restart(State(state): State<AppState>) -> Json<CancelResponse> {
    let cancelled = state.scheduler.cancel_all().await;
    info!("Admin API cancel request (cancelled: {cancelled})");
    Json(CancelResponse { cancelled })
}

/// POST /api/v1/reload - re-read config from disk; 400 leaves everything as it was
#[instrument(skip(state))]
pub async fn reload_config(
    State(state): State<AppState>,
) -> ApiResult<Json<ReloadResponse>> {
    info!("Admin API reload request");
    let response = reload_from_disk(&state.scheduler, &state.monitor).await?;
    Ok(Json(response))
}

/// GET /metrics - Prometheus text exposition
pub async fn get_metrics(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(ref handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => ApiError::unavailable("metrics recorder not installed").into_response(),
    }
}
