use crate::{DelayedTask, RepeatingTimer};

use rc_core::{RecurringRestart, RestartReason};

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

/// The one restart currently counting down.
///
/// Every timer it owns captured `generation` when armed and re-checks it
/// under the scheduler lock before acting, so a timer that fires after
/// supersession or cancellation is a no-op.
#[derive(Debug)]
pub(crate) struct ActiveRestart {
    pub generation: u64,
    pub reason: RestartReason,
    pub initiator: String,
    /// History detail recorded on execution
    pub detail: String,
    pub total_delay_secs: u64,
    pub remaining_secs: u64,
    pub deadline: Instant,
    pub requested_at: DateTime<Utc>,
    pub emergency: bool,
    /// Recurring definition that produced this restart, if any
    pub origin: Option<RecurringRestart>,
    pub warnings: Vec<DelayedTask>,
    pub countdown: Option<RepeatingTimer>,
    pub execution: Option<DelayedTask>,
}

impl ActiveRestart {
    /// Whole seconds left, rounded up so a restart never reads 0 early.
    pub fn seconds_until_deadline(&self, now: Instant) -> u64 {
        ceil_secs(self.deadline.saturating_duration_since(now))
    }

    /// Abort every timer, execution included.
    pub fn cancel_timers(&mut self) {
        self.cancel_warnings_and_countdown();
        if let Some(execution) = self.execution.take() {
            execution.cancel();
        }
    }

    /// Abort warnings and the countdown and hand back the execution task
    /// without aborting it. Called from inside that task.
    pub fn release_for_execution(&mut self) -> Option<DelayedTask> {
        self.cancel_warnings_and_countdown();
        self.execution.take()
    }

    fn cancel_warnings_and_countdown(&mut self) {
        for warning in self.warnings.drain(..) {
            warning.cancel();
        }
        if let Some(countdown) = self.countdown.take() {
            countdown.cancel();
        }
    }
}

pub(crate) fn ceil_secs(duration: Duration) -> u64 {
    duration
        .as_secs()
        .saturating_add(u64::from(duration.subsec_nanos() > 0))
}
