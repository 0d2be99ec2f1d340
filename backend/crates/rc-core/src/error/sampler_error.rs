use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// A health reading could not be taken.
#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("Sampler unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Sampler returned an unusable reading '{raw}' {location}")]
    InvalidReading {
        raw: String,
        location: ErrorLocation,
    },
}

impl SamplerError {
    #[track_caller]
    pub fn unavailable<M: Into<String>>(message: M) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_reading<R: Into<String>>(raw: R) -> Self {
        Self::InvalidReading {
            raw: raw.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
