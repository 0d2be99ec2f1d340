use crate::RestartReason;

use std::time::Duration;

/// A request handed to the scheduler. Consumed immediately, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartRequest {
    pub delay: Duration,
    pub reason: RestartReason,
    pub initiator: String,
}

impl RestartRequest {
    pub fn new<S: Into<String>>(delay: Duration, reason: RestartReason, initiator: S) -> Self {
        Self {
            delay,
            reason,
            initiator: initiator.into(),
        }
    }

    pub fn manual<S: Into<String>>(delay: Duration, initiator: S) -> Self {
        Self::new(delay, RestartReason::Manual, initiator)
    }

    pub fn scheduled(delay: Duration) -> Self {
        Self::new(delay, RestartReason::Scheduled, "System")
    }

    pub fn emergency<S: Into<String>>(delay: Duration, reason: RestartReason, initiator: S) -> Self {
        debug_assert!(reason.is_emergency());
        Self::new(delay, reason, initiator)
    }

    pub fn external<S: Into<String>>(delay: Duration, initiator: S) -> Self {
        Self::new(delay, RestartReason::ExternalRequest, initiator)
    }

    /// Delay rounded down to whole seconds, the countdown's unit.
    pub fn delay_secs(&self) -> u64 {
        self.delay.as_secs()
    }
}
