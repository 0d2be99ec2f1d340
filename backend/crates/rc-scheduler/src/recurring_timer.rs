use crate::RepeatingTimer;

use rc_core::RecurringRestart;

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::time::Instant;

pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Daily timer for one recurring restart definition.
///
/// Fires `countdown` ahead of each occurrence and re-arms itself 24h
/// later. The callback receives the occurrence the firing belongs to.
#[derive(Debug)]
pub(crate) struct RecurringTimer {
    definition: RecurringRestart,
    /// Scheduled instant of the first firing
    first_fire: Instant,
    countdown: Duration,
    /// Latest occurrence the scheduler has acted on
    delivered: Option<Instant>,
    timer: RepeatingTimer,
}

impl RecurringTimer {
    pub fn arm<F, Fut>(
        definition: RecurringRestart,
        occurrence: Instant,
        countdown: Duration,
        mut on_fire: F,
    ) -> Self
    where
        F: FnMut(Instant) -> Fut + Send + 'static,
        Fut: Future<Output = ControlFlow<()>> + Send + 'static,
    {
        let first_fire = occurrence.checked_sub(countdown).unwrap_or(occurrence);
        let lead = occurrence.saturating_duration_since(first_fire);

        let timer = RepeatingTimer::spawn_at(first_fire, DAY, move |scheduled| {
            on_fire(scheduled + lead)
        });

        Self {
            definition,
            first_fire,
            countdown: lead,
            delivered: None,
            timer,
        }
    }

    pub fn definition(&self) -> RecurringRestart {
        self.definition
    }

    pub fn countdown(&self) -> Duration {
        self.countdown
    }

    /// Record that the scheduler acted on `occurrence`. Must be called under
    /// the same lock that `pending_occurrence` is read under.
    pub fn mark_delivered(&mut self, occurrence: Instant) {
        self.delivered = Some(occurrence);
    }

    /// Earliest occurrence the scheduler has not acted on yet. A firing that
    /// is due but still waiting to be delivered counts as pending.
    pub fn pending_occurrence(&self, now: Instant) -> Instant {
        let due = self.latest_due_fire(now) + self.countdown;
        match self.delivered {
            Some(delivered) => due.max(delivered + DAY),
            None => due,
        }
    }

    /// Last firing at or before `now`, or the first one when none is due.
    fn latest_due_fire(&self, now: Instant) -> Instant {
        if now < self.first_fire {
            return self.first_fire;
        }

        let elapsed_days = now.duration_since(self.first_fire).as_secs() / DAY.as_secs();
        let days = u32::try_from(elapsed_days).unwrap_or(u32::MAX);
        self.first_fire + DAY.saturating_mul(days)
    }

    pub fn cancel(&self) {
        self.timer.cancel();
    }
}
