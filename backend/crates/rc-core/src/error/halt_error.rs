use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure reported by the external halt/reload action.
#[derive(Error, Debug)]
pub enum HaltError {
    #[error("Failed to launch halt command '{command}': {source} {location}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Halt command '{command}' exited with status {status} {location}")]
    NonZeroExit {
        command: String,
        status: i32,
        location: ErrorLocation,
    },

    #[error("Halt action failed: {message} {location}")]
    Other {
        message: String,
        location: ErrorLocation,
    },
}

impl HaltError {
    #[track_caller]
    pub fn spawn<C: Into<String>>(command: C, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn non_zero_exit<C: Into<String>>(command: C, status: i32) -> Self {
        Self::NonZeroExit {
            command: command.into(),
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn other<M: Into<String>>(message: M) -> Self {
        Self::Other {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
