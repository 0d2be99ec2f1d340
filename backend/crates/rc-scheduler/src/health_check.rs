use rc_core::{HealthSample, RestartReason};

use serde::Serialize;

/// Outcome of a single monitoring tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthCheck {
    pub sample: HealthSample,
    pub healthy: bool,
    /// Emergency detected this tick, whether or not a restart was requested
    pub emergency: Option<RestartReason>,
    /// True when this tick's detection produced an accepted restart request
    pub restart_requested: bool,
}
