mod halt_error;
mod sampler_error;

pub use halt_error::HaltError;
pub use sampler_error::SamplerError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid restart time '{value}': {message} {location}")]
    InvalidRestartTime {
        value: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid restart reason: {value} {location}")]
    InvalidRestartReason {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid timezone: {value} {location}")]
    InvalidTimeZone {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_restart_time<V: Into<String>, M: Into<String>>(value: V, message: M) -> Self {
        Self::InvalidRestartTime {
            value: value.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_restart_reason<V: Into<String>>(value: V) -> Self {
        Self::InvalidRestartReason {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_time_zone<V: Into<String>>(value: V) -> Self {
        Self::InvalidTimeZone {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
