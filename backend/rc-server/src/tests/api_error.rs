use crate::ApiError;

use rc_config::ConfigError;
use rc_core::RestartReason;
use rc_scheduler::SchedulerError;

use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let (status, json) =
        body_json(ApiError::validation("delay_secs must be 0-86400", Some("delay_secs"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "delay_secs");
}

#[tokio::test]
async fn given_emergency_rejection_when_converted_then_409_with_scheduler_code() {
    let rejection =
        SchedulerError::emergency_active(RestartReason::EmergencyMemory, RestartReason::Manual);

    let (status, json) = body_json(ApiError::from(rejection)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "EMERGENCY_ACTIVE");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_executing_rejection_when_converted_then_409() {
    let (status, json) = body_json(ApiError::from(SchedulerError::executing())).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "RESTART_EXECUTING");
}

#[tokio::test]
async fn given_delay_out_of_range_when_converted_then_400_on_delay_field() {
    let (status, json) =
        body_json(ApiError::from(SchedulerError::delay_out_of_range(u64::MAX))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "delay_secs");
}

#[tokio::test]
async fn given_invalid_config_when_converted_then_400_without_location() {
    let invalid = ConfigError::config("halt.grace_period_secs must be 0-60, got 999");

    let (status, json) = body_json(ApiError::from(invalid)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"]["message"],
        "halt.grace_period_secs must be 0-60, got 999"
    );
}

#[tokio::test]
async fn given_unavailable_error_when_rendered_then_503() {
    let (status, json) = body_json(ApiError::unavailable("no recorder")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["message"], "no recorder");
}
