use crate::RestartPhase;

use rc_core::RestartReason;

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// Point-in-time view of the scheduler for the outward query surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestartStatus {
    pub phase: RestartPhase,
    pub restart_in_progress: bool,
    pub remaining_seconds: u64,
    pub total_delay_secs: Option<u64>,
    pub requested_at: Option<DateTime<Utc>>,
    pub reason: Option<RestartReason>,
    pub initiator: Option<String>,
    pub emergency_active: bool,
    pub total_restarts_managed: u64,
    pub next_scheduled_restart: Option<DateTime<FixedOffset>>,
    pub history_len: usize,
}
