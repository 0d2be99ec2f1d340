use crate::api::error::{ApiError, Result as ApiResult};

use rc_core::{RestartReason, RestartRequest};

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

pub const MAX_DELAY_SECS: u64 = 86_400;
pub const DEFAULT_INITIATOR: &str = "admin";

/// Body of `POST /api/v1/restart`
#[derive(Debug, Clone, Deserialize)]
pub struct RestartRequestBody {
    pub delay_secs: u64,
    #[serde(default)]
    pub initiator: Option<String>,
    /// snake_case reason tag; manual when omitted
    #[serde(default)]
    pub reason: Option<String>,
}

impl RestartRequestBody {
    pub fn into_request(self) -> ApiResult<RestartRequest> {
        if self.delay_secs > MAX_DELAY_SECS {
            return Err(ApiError::validation(
                format!(
                    "delay_secs must be 0-{MAX_DELAY_SECS}, got {}",
                    self.delay_secs
                ),
                Some("delay_secs"),
            ));
        }

        let reason = match self.reason.as_deref() {
            None => RestartReason::Manual,
            Some(raw) => RestartReason::from_str(raw).map_err(|_| {
                ApiError::validation(format!("unknown restart reason '{raw}'"), Some("reason"))
            })?,
        };

        let initiator = self
            .initiator
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_INITIATOR));

        Ok(RestartRequest::new(
            Duration::from_secs(self.delay_secs),
            reason,
            initiator,
        ))
    }
}
