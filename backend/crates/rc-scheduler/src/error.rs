use rc_core::RestartReason;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error(
        "Restart rejected: {current} is active and {requested} cannot override it {location}"
    )]
    EmergencyActive {
        current: RestartReason,
        requested: RestartReason,
        location: ErrorLocation,
    },

    #[error("Restart rejected: a restart is already executing {location}")]
    Executing { location: ErrorLocation },

    #[error("Restart rejected: delay of {delay_secs}s is beyond the clock's range {location}")]
    DelayOutOfRange {
        delay_secs: u64,
        location: ErrorLocation,
    },
}

impl SchedulerError {
    #[track_caller]
    pub fn emergency_active(current: RestartReason, requested: RestartReason) -> Self {
        Self::EmergencyActive {
            current,
            requested,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn executing() -> Self {
        Self::Executing {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn delay_out_of_range(delay_secs: u64) -> Self {
        Self::DelayOutOfRange {
            delay_secs,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message for the requester, without the source location.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmergencyActive { current, .. } => {
                format!("Restart rejected: {current} in progress cannot be overridden")
            }
            Self::Executing { .. } => String::from("Restart rejected: server is restarting now"),
            Self::DelayOutOfRange { delay_secs, .. } => {
                format!("Restart rejected: a delay of {delay_secs} seconds is too long")
            }
        }
    }

    /// Stable code for API clients.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmergencyActive { .. } => "EMERGENCY_ACTIVE",
            Self::Executing { .. } => "RESTART_EXECUTING",
            Self::DelayOutOfRange { .. } => "DELAY_OUT_OF_RANGE",
        }
    }
}

pub type SchedulerResult<T> = std::result::Result<T, SchedulerError>;
