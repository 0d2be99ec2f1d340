use crate::api::monitor_status::MonitorStatus;

use rc_scheduler::RestartStatus;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub scheduler: RestartStatus,
    pub monitor: MonitorStatus,
    pub started_at: DateTime<Utc>,
}
