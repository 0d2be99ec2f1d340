use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Runs a callback on a fixed-rate grid until cancelled or the callback
/// breaks.
///
/// The callback receives the tick's scheduled instant, which may be
/// earlier than `Instant::now()` when the runtime was busy. Ticks never
/// overlap: the next one waits for the previous callback. Missed ticks are
/// skipped rather than replayed in a burst.
#[derive(Debug)]
pub struct RepeatingTimer {
    handle: JoinHandle<()>,
    period: Duration,
}

impl RepeatingTimer {
    /// First tick after `initial_delay`, then every `period`.
    pub fn spawn<F, Fut>(initial_delay: Duration, period: Duration, callback: F) -> Self
    where
        F: FnMut(Instant) -> Fut + Send + 'static,
        Fut: Future<Output = ControlFlow<()>> + Send + 'static,
    {
        Self::spawn_at(Instant::now() + initial_delay, period, callback)
    }

    /// First tick at `start` (immediately if already past), then every
    /// `period` after `start`.
    pub fn spawn_at<F, Fut>(start: Instant, period: Duration, mut callback: F) -> Self
    where
        F: FnMut(Instant) -> Fut + Send + 'static,
        Fut: Future<Output = ControlFlow<()>> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                let scheduled = interval.tick().await;
                if callback(scheduled).await.is_break() {
                    break;
                }
            }
        });

        Self { handle, period }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}
