//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use rc_config::ConfigError;
use rc_scheduler::SchedulerError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "EMERGENCY_ACTIVE", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Restart refused by the scheduler (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Feature not available in this process (503)
    #[error("Unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<M: Into<String>>(message: M, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable<M: Into<String>>(message: M) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::warn!("{}", self);

        let (status, body) = match self {
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Conflict { code, message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: code.into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Unavailable { message, .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiErrorBody {
                    code: "UNAVAILABLE".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Scheduler rejections surface as conflicts with the scheduler's code,
/// except a delay the clock cannot represent, which is the caller's fault
impl From<SchedulerError> for ApiError {
    #[track_caller]
    fn from(e: SchedulerError) -> Self {
        match e {
            SchedulerError::DelayOutOfRange { .. } => {
                ApiError::validation(e.user_message(), Some("delay_secs"))
            }
            _ => ApiError::Conflict {
                code: e.error_code(),
                message: e.user_message(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// A config that fails to load or validate is rejected as a whole
impl From<ConfigError> for ApiError {
    #[track_caller]
    fn from(e: ConfigError) -> Self {
        let message = match e {
            ConfigError::Generic { message, .. } => message,
            other => other.to_string(),
        };
        ApiError::validation(message, None)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
