use crate::{CoreError, HaltMode, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Why a restart was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartReason {
    /// Fired by a recurring time-of-day definition
    Scheduled,
    /// Requested by an operator
    Manual,
    /// Throughput fell below the emergency floor
    EmergencyThroughput,
    /// Memory utilisation rose above the emergency ceiling
    EmergencyMemory,
    /// Generic emergency raised by the health monitor or a host
    EmergencySystem,
    /// Requested by another component through the public API
    ExternalRequest,
}

impl RestartReason {
    pub const ALL: [RestartReason; 6] = [
        Self::Scheduled,
        Self::Manual,
        Self::EmergencyThroughput,
        Self::EmergencyMemory,
        Self::EmergencySystem,
        Self::ExternalRequest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Manual => "manual",
            Self::EmergencyThroughput => "emergency_throughput",
            Self::EmergencyMemory => "emergency_memory",
            Self::EmergencySystem => "emergency_system",
            Self::ExternalRequest => "external_request",
        }
    }

    /// Label substituted into broadcast templates.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled Restart",
            Self::Manual => "Manual Restart",
            Self::EmergencyThroughput => "Emergency Throughput",
            Self::EmergencyMemory => "Emergency Memory",
            Self::EmergencySystem => "System Emergency",
            Self::ExternalRequest => "External Request",
        }
    }

    /// Emergency restarts cannot be superseded by non-emergency requests.
    pub fn is_emergency(&self) -> bool {
        matches!(
            self,
            Self::EmergencyThroughput | Self::EmergencyMemory | Self::EmergencySystem
        )
    }

    pub fn halt_mode(&self) -> HaltMode {
        if self.is_emergency() {
            HaltMode::Shutdown
        } else {
            HaltMode::Reload
        }
    }
}

impl FromStr for RestartReason {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| CoreError::invalid_restart_reason(s))
    }
}

impl std::fmt::Display for RestartReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
